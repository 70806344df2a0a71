#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use skycast_server::config;

#[test]
fn defaults_when_env_is_empty() {
    let cfg = config::load_with(|_| None).expect("must load");
    assert_eq!(cfg.port, 5000);
    assert_eq!(cfg.version, "1.0.0");
}

#[test]
fn env_overrides_apply() {
    let cfg = config::load_with(|key| match key {
        "PORT" => Some("8080".into()),
        "APP_VERSION" => Some("2.3.1".into()),
        _ => None,
    })
    .expect("must load");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.version, "2.3.1");
}

#[test]
fn malformed_port_is_rejected() {
    let err = config::load_with(|key| match key {
        "PORT" => Some("not-a-port".into()),
        _ => None,
    })
    .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = config::load_with(|key| match key {
        "PORT" => Some("70000".into()), // > u16::MAX
        _ => None,
    })
    .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn blank_version_is_rejected() {
    let err = config::load_with(|key| match key {
        "APP_VERSION" => Some("   ".into()),
        _ => None,
    })
    .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}
