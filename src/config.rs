//! Directory configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```rust
//! use staff_directory_core::config::DirectoryConfig;
//!
//! let config = DirectoryConfig::from_toml_str("seed = 42\nrecord_count = 12")?;
//! assert_eq!(config.seed, Some(42));
//! assert_eq!(config.record_count, 12);
//! assert_eq!(config.page_size, 10);
//! # Ok::<(), staff_directory_core::app_response::AppResponse>(())
//! ```

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::app_response::AppResponse;

/// Calendar years accepted for `reference_year` and `hire_year_start`.
pub const YEAR_RANGE: RangeInclusive<i32> = 1900..=2200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Seed for the record generator. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub record_count: u32,
    /// Year that years-in-service is measured against.
    pub reference_year: i32,
    pub hire_year_start: i32,
    /// Number of distinct hire years sampled, starting at `hire_year_start`.
    pub hire_year_span: i32,
    pub query_latency_ms: u64,
    pub page_size: usize,
    pub recent_count: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            record_count: 50,
            reference_year: 2026,
            hire_year_start: 1990,
            hire_year_span: 33,
            query_latency_ms: 300,
            page_size: 10,
            recent_count: 5,
        }
    }
}

impl DirectoryConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, AppResponse> {
        let config: DirectoryConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppResponse> {
        if self.page_size == 0 {
            return Err(AppResponse::ConfigError("page_size must be greater than zero".to_string()));
        }
        if self.hire_year_span <= 0 {
            return Err(AppResponse::ConfigError("hire_year_span must be greater than zero".to_string()));
        }
        check_year("reference_year", self.reference_year)?;
        check_year("hire_year_start", self.hire_year_start)?;
        let last_hire_year = self
            .hire_year_start
            .checked_add(self.hire_year_span - 1)
            .ok_or_else(|| AppResponse::ConfigError("hire window overflows the year range".to_string()))?;
        if last_hire_year > self.reference_year {
            return Err(AppResponse::ConfigError(format!(
                "hire window ends in {last_hire_year}, after reference year {}",
                self.reference_year
            )));
        }
        Ok(())
    }

    pub fn query_latency(&self) -> Duration {
        Duration::from_millis(self.query_latency_ms)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn check_year(field: &str, year: i32) -> Result<(), AppResponse> {
    if YEAR_RANGE.contains(&year) {
        Ok(())
    } else {
        Err(AppResponse::ConfigError(format!(
            "{field} {year} is outside {}..={}",
            YEAR_RANGE.start(),
            YEAR_RANGE.end()
        )))
    }
}
