use std::fmt;

/// Relative humidity as a percentage of saturation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeHumidity(f32);

impl RelativeHumidity {
    #[must_use]
    pub fn from_percent(percent: f32) -> Self {
        Self(percent)
    }

    #[must_use]
    pub fn percent(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn rounded_percent(self) -> i32 {
        self.0.round() as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Simulated,
}

impl Provenance {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Provenance::Simulated => "Simulated",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HumidityReading {
    pub location: String,
    pub relative_humidity: RelativeHumidity,
    pub provenance: Provenance,
}

impl HumidityReading {
    #[must_use]
    pub fn simulated(location: impl Into<String>, percent: f32) -> Self {
        Self {
            location: location.into(),
            relative_humidity: RelativeHumidity::from_percent(percent),
            provenance: Provenance::Simulated,
        }
    }
}

impl fmt::Display for HumidityReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% ({})",
            self.relative_humidity.rounded_percent(),
            self.provenance.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_formats_percent_and_provenance() {
        let reading = HumidityReading::simulated("Tokyo", 45.0);
        assert_eq!(reading.to_string(), "45% (Simulated)");
    }

    #[test]
    fn rounding_is_to_nearest_percent() {
        assert_eq!(RelativeHumidity::from_percent(44.4).rounded_percent(), 44);
        assert_eq!(RelativeHumidity::from_percent(44.6).rounded_percent(), 45);
    }

    #[test]
    fn reading_keeps_location_verbatim() {
        let reading = HumidityReading::simulated("", 45.0);
        assert_eq!(reading.location, "");
    }
}
