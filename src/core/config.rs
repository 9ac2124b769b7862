use super::compiler::DEFAULT_SINK_NAME;
use serde::{Deserialize, Serialize};

/// Configuration for measurement runs over a pulse network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementConfig {
    /// Number of button presses for pulse counting
    pub counting_presses: u64,
    /// Upper bound on presses for activation and cycle searches.
    /// `None` leaves the search unbounded.
    pub press_limit: Option<u64>,
    /// Name of the terminal sink module
    pub sink_name: String,
}

impl MeasurementConfig {
    /// Create a configuration with default values: 1000 counting presses,
    /// no press limit, sink named `rx`.
    pub fn new() -> Self {
        Self {
            counting_presses: 1000,
            press_limit: None,
            sink_name: DEFAULT_SINK_NAME.to_string(),
        }
    }

    /// Set the number of presses used for pulse counting
    pub fn with_counting_presses(mut self, presses: u64) -> Self {
        self.counting_presses = presses;
        self
    }

    /// Bound activation and cycle searches to at most `limit` presses
    pub fn with_press_limit(mut self, limit: u64) -> Self {
        self.press_limit = Some(limit);
        self
    }

    /// Set the name of the terminal sink module
    pub fn with_sink_name(mut self, name: &str) -> Self {
        self.sink_name = name.to_string();
        self
    }
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MeasurementConfig::default();
        assert_eq!(config.counting_presses, 1000);
        assert_eq!(config.press_limit, None);
        assert_eq!(config.sink_name, "rx");
    }

    #[test]
    fn test_config_builder() {
        let config = MeasurementConfig::new()
            .with_counting_presses(10)
            .with_press_limit(500)
            .with_sink_name("out");

        assert_eq!(config.counting_presses, 10);
        assert_eq!(config.press_limit, Some(500));
        assert_eq!(config.sink_name, "out");
    }
}
