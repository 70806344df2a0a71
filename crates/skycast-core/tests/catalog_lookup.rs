//! City catalog lookup tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use skycast_core::catalog;

#[test]
fn lookup_is_case_insensitive() {
    for spelling in ["london", "London", "LONDON", "LoNdOn"] {
        let city = catalog::find(spelling).expect("london must resolve");
        assert_eq!(city.name, "London");
    }
    assert_eq!(catalog::find("New_York").unwrap().name, "New York");
}

#[test]
fn unknown_city_is_none() {
    assert!(catalog::find("atlantis").is_none());
    assert!(catalog::find("").is_none());
}

#[test]
fn catalog_entries_are_well_formed() {
    for city in catalog::CITIES {
        assert_eq!(city.id, city.id.to_ascii_lowercase(), "ids are lowercase keys");
        assert!(!city.name.is_empty());
        assert!(!city.conditions.is_empty());
        assert!(city.temp_min <= city.temp_max);
        assert!(city.humidity_min <= city.humidity_max);
    }
}
