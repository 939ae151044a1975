//! Configuration data model and validation

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Main harness configuration.
///
/// Constructed once at startup (defaults, then environment, then CLI
/// overrides) and threaded through the run explicitly; there is no
/// module-level mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Region A registry instance
    pub region_a_url: String,

    /// Base URL of the Region B registry instance
    pub region_b_url: String,

    /// Latency probe iterations per region and operation
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Consistency probe trial count
    #[serde(default = "default_trials")]
    pub trials: u32,

    /// Request timeout duration
    #[serde(default = "default_timeout_secs")]
    pub timeout_seconds: u64,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region_a_url: String::new(),
            region_b_url: String::new(),
            iterations: default_iterations(),
            trials: default_trials(),
            timeout_seconds: default_timeout_secs(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Merge supported environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(value) = env::var("REGION_A_URL") {
            self.region_a_url = value;
        }
        if let Ok(value) = env::var("REGION_B_URL") {
            self.region_b_url = value;
        }
        if let Ok(value) = env::var("ITERATIONS") {
            self.iterations = value.parse()?;
        }
        if let Ok(value) = env::var("TRIALS") {
            self.trials = value.parse()?;
        }
        if let Ok(value) = env::var("TIMEOUT_SECONDS") {
            self.timeout_seconds = value.parse()?;
        }
        if let Ok(value) = env::var("ENABLE_COLOR") {
            self.enable_color = value.parse()?;
        }
        Ok(())
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        for (name, flag, env_var, value) in [
            ("Region A", "--region-a", "REGION_A_URL", &self.region_a_url),
            ("Region B", "--region-b", "REGION_B_URL", &self.region_b_url),
        ] {
            if value.is_empty() {
                return Err(AppError::config(format!(
                    "{} endpoint is required (set {} or {})",
                    name, flag, env_var
                )));
            }
            let parsed = url::Url::parse(value)
                .map_err(|e| AppError::config(format!("Invalid {} endpoint '{}': {}", name, value, e)))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(AppError::config(format!(
                    "{} endpoint must use http or https, got '{}'",
                    name, value
                )));
            }
        }

        if self.region_a_url == self.region_b_url {
            return Err(AppError::config(
                "Region A and Region B endpoints must be distinct instances",
            ));
        }

        if self.iterations == 0 {
            return Err(AppError::config("Iteration count must be greater than zero"));
        }
        if self.trials == 0 {
            return Err(AppError::config("Trial count must be greater than zero"));
        }
        if self.timeout_seconds == 0 {
            return Err(AppError::config("Timeout must be greater than zero"));
        }

        Ok(())
    }
}

fn default_iterations() -> u32 {
    crate::defaults::DEFAULT_ITERATIONS
}

fn default_trials() -> u32 {
    crate::defaults::DEFAULT_TRIALS
}

fn default_timeout_secs() -> u64 {
    crate::defaults::DEFAULT_TIMEOUT.as_secs()
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
