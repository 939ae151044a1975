//! Registry Benchmark
//!
//! A benchmarking harness that measures request round-trip latency against
//! two regional instances of a replicated username registry and probes
//! cross-region read-after-write staleness by racing writes against
//! concurrent reads.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod probe;
pub mod report;
pub mod runner;
pub mod stats;
pub mod timing;
pub mod types;

// Re-export commonly used types
pub use client::{HttpRegistryClient, RegistryClient};
pub use error::{AppError, Result};
pub use models::{Config, ConsistencyReport, LatencyReport, RunReport};
pub use probe::{ConsistencyProber, LatencyProber, UsernameFactory};
pub use report::{create_reporter, ConsoleReporter, PlainReporter, Reporter};
pub use runner::run_benchmark;
pub use timing::Stopwatch;
pub use types::{ProbeOperation, Region};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_ITERATIONS: u32 = 10;
    pub const DEFAULT_TRIALS: u32 = 10;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
