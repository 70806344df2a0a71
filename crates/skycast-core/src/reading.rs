//! Weather reading generation.
//!
//! A [`Reading`] is sampled fresh per request from a city's configured
//! domains and never stored. Generation is a pure function of the catalog
//! entry and the RNG, apart from the timestamp.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::catalog::CityConfig;
use crate::error::{Result, SkycastError};

/// One generated weather observation.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    /// City display name.
    pub city: String,
    /// Degrees Celsius, rounded to 1 decimal.
    pub temperature: f64,
    /// One of the city's configured conditions.
    pub conditions: &'static str,
    /// Relative humidity in percent, rounded to 1 decimal.
    pub humidity: f64,
    /// Epoch seconds with sub-second precision.
    pub timestamp: f64,
}

impl Reading {
    /// Sample a reading from `city`'s domains.
    ///
    /// The clock is the only operational failure point; a pre-epoch system
    /// time surfaces as [`SkycastError::Internal`].
    pub fn generate<R: Rng + ?Sized>(city: &CityConfig, rng: &mut R) -> Result<Self> {
        let conditions = city
            .conditions
            .choose(rng)
            .copied()
            .ok_or_else(|| SkycastError::Internal(format!("city {} has no conditions", city.id)))?;

        Ok(Self {
            city: city.name.to_string(),
            temperature: round1(rng.gen_range(city.temp_min..=city.temp_max)),
            conditions,
            humidity: round1(rng.gen_range(city.humidity_min..=city.humidity_max)),
            timestamp: epoch_seconds()?,
        })
    }
}

/// Round to 1 decimal place.
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn epoch_seconds() -> Result<f64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .map_err(|e| SkycastError::Internal(format!("system clock before epoch: {e}")))
}
