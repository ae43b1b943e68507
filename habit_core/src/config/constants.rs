//! Simulation constants with the game's reference values as defaults

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable constants for the daily-damage curve
///
/// The defaults reproduce the game's reference behavior exactly; a
/// TOML file may override individual fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConstants {
    /// Lowest task value fed into the damage curve
    #[serde(default = "default_value_floor")]
    pub value_floor: f64,
    /// Highest task value fed into the damage curve
    #[serde(default = "default_value_ceiling")]
    pub value_ceiling: f64,
    /// Base of the exponential decay curve; values below 1 make more
    /// negative task values hit harder
    #[serde(default = "default_decay_base")]
    pub decay_base: f64,
    /// Flat multiplier applied after constitution and priority scaling
    #[serde(default = "default_priority_scale")]
    pub priority_scale: f64,
}

impl Default for SimConstants {
    fn default() -> Self {
        SimConstants {
            value_floor: default_value_floor(),
            value_ceiling: default_value_ceiling(),
            decay_base: default_decay_base(),
            priority_scale: default_priority_scale(),
        }
    }
}

fn default_value_floor() -> f64 {
    -47.27
}
fn default_value_ceiling() -> f64 {
    21.27
}
fn default_decay_base() -> f64 {
    0.9747
}
fn default_priority_scale() -> f64 {
    2.0
}

impl SimConstants {
    /// Load constants from a TOML file, validating them
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse constants from a TOML string, validating them
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let constants: SimConstants = toml::from_str(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Reject constants outside their expected domains
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.value_floor > self.value_ceiling {
            return Err(ConfigError::Validation(format!(
                "value_floor {} exceeds value_ceiling {}",
                self.value_floor, self.value_ceiling
            )));
        }
        if !(self.decay_base > 0.0) {
            return Err(ConfigError::Validation(format!(
                "decay_base {} must be positive",
                self.decay_base
            )));
        }
        if self.priority_scale < 0.0 {
            return Err(ConfigError::Validation(format!(
                "priority_scale {} is negative",
                self.priority_scale
            )));
        }
        Ok(())
    }
}
