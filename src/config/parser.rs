//! Configuration parsing from CLI arguments and environment variables

use crate::{cli::Cli, config::env::EnvManager, error::Result, models::Config};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration.
    ///
    /// Layering, lowest precedence first: built-in defaults, `.env` file,
    /// process environment, CLI arguments.
    pub fn parse(&self) -> Result<Config> {
        let mut config = Config::default();

        EnvManager::load_env_file(self.cli.debug)?;
        config.merge_from_env()?;
        self.apply_cli_overrides(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(ref url) = self.cli.region_a {
            config.region_a_url = url.clone();
        }
        if let Some(ref url) = self.cli.region_b {
            config.region_b_url = url.clone();
        }

        if self.cli.iterations != crate::defaults::DEFAULT_ITERATIONS {
            config.iterations = self.cli.iterations;
        }
        if self.cli.trials != crate::defaults::DEFAULT_TRIALS {
            config.trials = self.cli.trials;
        }
        if self.cli.timeout != crate::defaults::DEFAULT_TIMEOUT.as_secs() {
            config.timeout_seconds = self.cli.timeout;
        }

        if self.cli.color {
            config.enable_color = true;
        }
        if self.cli.no_color {
            config.enable_color = false;
        }

        // CLI-only flags
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}
