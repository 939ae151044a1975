//! Main application orchestration and execution

use crate::{
    cli::Cli,
    client::HttpRegistryClient,
    config::load_config,
    error::{AppError, Result},
    logging::RunLogger,
    probe::UsernameFactory,
    report::create_reporter,
    runner::run_benchmark,
};
use std::sync::Arc;

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Result<Self> {
        cli.validate().map_err(AppError::config)?;
        Ok(Self { cli })
    }

    /// Run one complete benchmark and print the report to stdout
    pub async fn run(self) -> Result<()> {
        let use_colors = self.cli.use_colors();
        let config = load_config(self.cli)?;

        let logger = RunLogger::new(config.debug, config.verbose, use_colors);
        logger.debug(&format!(
            "Configuration: A={} B={} iterations={} trials={} timeout={}s",
            config.region_a_url,
            config.region_b_url,
            config.iterations,
            config.trials,
            config.timeout_seconds
        ));

        let client_a = Arc::new(HttpRegistryClient::new(
            &config.region_a_url,
            config.timeout(),
        )?);
        let client_b = Arc::new(HttpRegistryClient::new(
            &config.region_b_url,
            config.timeout(),
        )?);

        let usernames = UsernameFactory::new();
        logger.debug(&format!("Username run tag: {}", usernames.run_tag()));

        let report = run_benchmark(
            Arc::clone(&client_a),
            Arc::clone(&client_b),
            client_a.endpoint(),
            client_b.endpoint(),
            &config,
            &usernames,
            &logger,
        )
        .await?;

        let reporter = create_reporter(config.enable_color && use_colors);
        println!("{}", reporter.format(&report)?);

        Ok(())
    }
}
