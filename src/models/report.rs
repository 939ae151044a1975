//! Result models for one complete benchmark run

use crate::error::Result;
use crate::stats;
use crate::types::{ProbeOperation, Region};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latency series for one (region, operation) pair, with derived summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyReport {
    /// Which region was probed
    pub region: Region,

    /// Which operation was measured
    pub operation: ProbeOperation,

    /// Ordered round-trip durations, one per completed iteration
    pub samples_ms: Vec<f64>,

    /// Arithmetic mean of the series
    pub mean_ms: f64,

    /// Fastest round trip in the series
    pub min_ms: f64,

    /// Slowest round trip in the series
    pub max_ms: f64,
}

impl LatencyReport {
    /// Build a report from a completed sample series.
    ///
    /// Errors if the series is empty; probes always produce at least one
    /// sample or fail the run, so an empty series is a caller bug.
    pub fn from_samples(
        region: Region,
        operation: ProbeOperation,
        samples_ms: Vec<f64>,
    ) -> Result<Self> {
        let mean_ms = stats::mean(&samples_ms)?;
        let min_ms = stats::min(&samples_ms)?;
        let max_ms = stats::max(&samples_ms)?;
        Ok(Self {
            region,
            operation,
            samples_ms,
            mean_ms,
            min_ms,
            max_ms,
        })
    }
}

/// Outcome of the cross-region consistency probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// Region that received the writes
    pub writer: Region,

    /// Region whose reads raced the writes
    pub reader: Region,

    /// Number of trials executed
    pub trials: u32,

    /// Trials where the write was not yet visible to the racing read
    pub misses: u32,

    /// `misses / trials`
    pub miss_ratio: f64,
}

impl ConsistencyReport {
    /// Build a report from a completed probe outcome
    pub fn new(writer: Region, reader: Region, trials: u32, misses: u32) -> Result<Self> {
        let miss_ratio = stats::miss_ratio(misses, trials)?;
        Ok(Self {
            writer,
            reader,
            trials,
            misses,
            miss_ratio,
        })
    }
}

/// Read-only aggregate of one complete benchmark run.
///
/// Has no identity beyond the run; built once by the orchestrator, handed to
/// a reporter, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Region A endpoint the run was executed against
    pub region_a_url: String,

    /// Region B endpoint the run was executed against
    pub region_b_url: String,

    /// One latency series per (region, operation) pair, in probe order
    pub latency: Vec<LatencyReport>,

    /// Consistency probe outcome
    pub consistency: ConsistencyReport,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run completed
    pub completed_at: DateTime<Utc>,
}
