//! Reading generation tests: bounds, rounding, variation, wire shape.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use skycast_core::catalog;
use skycast_core::reading::Reading;

/// A rounded value times ten must be (nearly) integral.
fn is_one_decimal(v: f64) -> bool {
    ((v * 10.0) - (v * 10.0).round()).abs() < 1e-9
}

#[test]
fn readings_stay_within_city_domains() {
    let mut rng = StdRng::seed_from_u64(7);
    for city in catalog::CITIES {
        for _ in 0..100 {
            let r = Reading::generate(city, &mut rng).expect("generation must succeed");
            assert_eq!(r.city, city.name);
            assert!(r.temperature >= city.temp_min && r.temperature <= city.temp_max);
            assert!(r.humidity >= city.humidity_min && r.humidity <= city.humidity_max);
            assert!(city.conditions.contains(&r.conditions));
            assert!(is_one_decimal(r.temperature));
            assert!(is_one_decimal(r.humidity));
            // Sanity floor: any real clock is well past 2020.
            assert!(r.timestamp > 1_577_836_800.0);
        }
    }
}

#[test]
fn repeated_readings_vary() {
    let mut rng = StdRng::seed_from_u64(42);
    let city = catalog::find("london").unwrap();

    let mut temps = std::collections::BTreeSet::new();
    let mut humidities = std::collections::BTreeSet::new();
    for _ in 0..50 {
        let r = Reading::generate(city, &mut rng).unwrap();
        temps.insert((r.temperature * 10.0) as i64);
        humidities.insert((r.humidity * 10.0) as i64);
    }
    assert!(temps.len() > 1, "temperature must not be constant");
    assert!(humidities.len() > 1, "humidity must not be constant");
}

#[test]
fn reading_serializes_expected_fields() {
    let mut rng = StdRng::seed_from_u64(1);
    let city = catalog::find("new_york").unwrap();
    let r = Reading::generate(city, &mut rng).unwrap();

    let v = serde_json::to_value(&r).unwrap();
    let obj = v.as_object().unwrap();
    assert_eq!(obj.len(), 5);
    for key in ["city", "temperature", "conditions", "humidity", "timestamp"] {
        assert!(obj.contains_key(key), "missing field {key}");
    }
    assert_eq!(obj["city"], "New York");
    assert!(obj["timestamp"].is_f64());
}
