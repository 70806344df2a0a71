//! Server config loader (environment only, strict parsing).

pub mod schema;

use skycast_core::error::Result;

pub use schema::ServerConfig;

/// Load config from the process environment.
pub fn load_from_env() -> Result<ServerConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Load config through an injected variable lookup (used by tests).
pub fn load_with<F>(lookup: F) -> Result<ServerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let cfg = ServerConfig::from_lookup(lookup)?;
    cfg.validate()?;
    Ok(cfg)
}
