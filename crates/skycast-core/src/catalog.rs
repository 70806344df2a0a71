//! Static city catalog.
//!
//! Each entry is plain data: the display name plus the value domains a
//! reading is sampled from. Behavior lives in [`crate::reading`], not here.

/// Value domains for one city. Immutable, defined at startup.
#[derive(Debug, Clone, Copy)]
pub struct CityConfig {
    /// Lowercase identifier used in request paths.
    pub id: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Temperature bounds in degrees Celsius (inclusive).
    pub temp_min: f64,
    pub temp_max: f64,
    /// Condition set a reading picks from.
    pub conditions: &'static [&'static str],
    /// Relative humidity bounds in percent (inclusive).
    pub humidity_min: f64,
    pub humidity_max: f64,
}

/// The shipped catalog.
pub const CITIES: &[CityConfig] = &[
    CityConfig {
        id: "new_york",
        name: "New York",
        temp_min: 0.0,
        temp_max: 35.0,
        conditions: &["Sunny", "Cloudy", "Rainy", "Snowy"],
        humidity_min: 30.0,
        humidity_max: 90.0,
    },
    CityConfig {
        id: "london",
        name: "London",
        temp_min: -5.0,
        temp_max: 25.0,
        conditions: &["Cloudy", "Rainy", "Foggy", "Clear"],
        humidity_min: 40.0,
        humidity_max: 95.0,
    },
];

/// Case-insensitive lookup by city identifier.
pub fn find(city: &str) -> Option<&'static CityConfig> {
    CITIES.iter().find(|c| c.id.eq_ignore_ascii_case(city))
}
