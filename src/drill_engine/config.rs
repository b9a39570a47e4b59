//! Drill configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! feedback_delay_ms = 500
//! table_min = 2
//! table_max = 12
//!
//! [multiplier_range]
//! min = 1
//! max = 12
//! ```

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::drill_engine::{error::ConfigError, models::MultiplierRange};

pub const DEFAULT_FEEDBACK_DELAY_MS: u64 = 1000;
pub const DEFAULT_TABLE_MIN: u32 = 10;
pub const DEFAULT_TABLE_MAX: u32 = 40;
pub const DEFAULT_MAX_DISPLAY_OPTIONS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrillConfig {
    /// Range the second factor is drawn from.
    pub multiplier_range: MultiplierRange,
    /// How long Correct/Try again feedback stays up.
    pub feedback_delay_ms: u64,
    /// Smallest selectable table (inclusive).
    pub table_min: u32,
    /// Largest selectable table (inclusive).
    pub table_max: u32,
    /// Upper bound on answer buttons per question.
    pub max_display_options: usize,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            multiplier_range: MultiplierRange::default(),
            feedback_delay_ms: DEFAULT_FEEDBACK_DELAY_MS,
            table_min: DEFAULT_TABLE_MIN,
            table_max: DEFAULT_TABLE_MAX,
            max_display_options: DEFAULT_MAX_DISPLAY_OPTIONS,
        }
    }
}

impl DrillConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: DrillConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = self.multiplier_range;
        if range.min > range.max {
            return Err(ConfigError::Invalid(format!(
                "multiplier_range min ({}) is greater than max ({})",
                range.min, range.max
            )));
        }
        if self.table_min > self.table_max {
            return Err(ConfigError::Invalid(format!(
                "table_min ({}) is greater than table_max ({})",
                self.table_min, self.table_max
            )));
        }
        if self.max_display_options == 0 {
            return Err(ConfigError::Invalid(
                "max_display_options must be at least 1".to_string(),
            ));
        }
        if self.table_max.checked_mul(range.max).is_none() {
            return Err(ConfigError::Invalid(format!(
                "{} x {} overflows a u32 answer",
                self.table_max, range.max
            )));
        }
        Ok(())
    }

    /// Tables the learner can pick from.
    pub fn available_tables(&self) -> RangeInclusive<u32> {
        self.table_min..=self.table_max
    }

    pub fn is_available_table(&self, table: u32) -> bool {
        self.available_tables().contains(&table)
    }
}
