//! Command-line interface

use clap::Parser;

/// Registry Benchmark - latency and cross-region consistency measurements
#[derive(Parser, Debug, Clone)]
#[command(name = "regbench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the Region A registry instance
    #[arg(long, value_name = "URL")]
    pub region_a: Option<String>,

    /// Base URL of the Region B registry instance
    #[arg(long, value_name = "URL")]
    pub region_b: Option<String>,

    /// Latency probe iterations per region and operation
    #[arg(short = 'n', long, default_value_t = crate::defaults::DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Consistency probe trial count
    #[arg(short = 't', long, default_value_t = crate::defaults::DEFAULT_TRIALS)]
    pub trials: u32,

    /// Request timeout in seconds
    #[arg(long, default_value_t = crate::defaults::DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.iterations == 0 {
            return Err("--iterations must be greater than zero".to_string());
        }

        if self.trials == 0 {
            return Err("--trials must be greater than zero".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            supports_color()
        }
    }
}

/// Detect whether the terminal supports colored output
fn supports_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    match std::env::var("TERM") {
        Ok(term) => term != "dumb",
        Err(_) => false,
    }
}
