use thiserror::Error;

use crate::domain::humidity::HumidityReading;

pub const SIMULATED_HUMIDITY_PERCENT: f32 = 45.0;

#[derive(Debug, Error)]
pub enum HumidityError {
    #[error("humidity source unavailable: {0}")]
    Unavailable(String),
}

pub trait HumidityProvider {
    fn fetch(&self, location: &str) -> Result<HumidityReading, HumidityError>;
}

/// Stand-in for a live humidity source. Every location gets the same reading
/// and the fetch never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedHumidityClient;

impl SimulatedHumidityClient {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl HumidityProvider for SimulatedHumidityClient {
    fn fetch(&self, location: &str) -> Result<HumidityReading, HumidityError> {
        Ok(HumidityReading::simulated(
            location,
            SIMULATED_HUMIDITY_PERCENT,
        ))
    }
}
