//! Latency and consistency probes

pub mod consistency;
pub mod latency;

pub use consistency::ConsistencyProber;
pub use latency::LatencyProber;

use crate::types::Region;
use uuid::Uuid;

/// Generates registry usernames that are unique per run, per region and per
/// trial, so successive runs and concurrent probes never collide on the
/// registry's dedup-by-key semantics.
#[derive(Debug, Clone)]
pub struct UsernameFactory {
    run_tag: String,
}

impl UsernameFactory {
    /// Create a factory with a fresh random run tag
    pub fn new() -> Self {
        let id = Uuid::new_v4().simple().to_string();
        Self {
            // Eight hex chars keep usernames short while leaving collisions
            // across runs vanishingly unlikely.
            run_tag: id[..8].to_string(),
        }
    }

    /// Create a factory with an explicit run tag (tests)
    pub fn with_tag<S: Into<String>>(run_tag: S) -> Self {
        Self {
            run_tag: run_tag.into(),
        }
    }

    /// Run tag shared by every username this factory produces
    pub fn run_tag(&self) -> &str {
        &self.run_tag
    }

    /// Username for one latency-probe register iteration, tagged with the
    /// region so post-hoc inspection can tell which region produced which
    /// record.
    pub fn latency_username(&self, region: Region, iteration: u32) -> String {
        format!("latency_{}_{}_{}", self.run_tag, region.label(), iteration)
    }

    /// Distinct, previously-unused usernames for a consistency probe
    pub fn consistency_usernames(&self, trials: u32) -> Vec<String> {
        (0..trials)
            .map(|i| format!("consistency_{}_{}", self.run_tag, i))
            .collect()
    }
}

impl Default for UsernameFactory {
    fn default() -> Self {
        Self::new()
    }
}
