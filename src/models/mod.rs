//! Data models for configuration and run results

pub mod config;
pub mod report;

pub use config::Config;
pub use report::{ConsistencyReport, LatencyReport, RunReport};
