//! Sequential round-trip latency probes
//!
//! Each probe issues a fixed number of strictly sequential calls of one
//! operation against one region and returns the ordered duration series.
//! Sequential execution is mandatory: the samples are meant to reflect a
//! single caller's round-trip time, and overlapping requests would contend
//! for the same connection and skew every measurement.

use crate::client::RegistryClient;
use crate::error::Result;
use crate::probe::UsernameFactory;
use crate::timing::Stopwatch;
use crate::types::Region;

/// Drives latency measurements for one operation kind against one region
#[derive(Debug, Clone, Copy)]
pub struct LatencyProber {
    iterations: u32,
}

impl LatencyProber {
    /// Create a prober; `iterations > 0` is enforced by config validation
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Measure `register` round trips against `region`.
    ///
    /// Each iteration registers a username unique across iterations and
    /// regions, so the registry's upsert semantics never collapse two
    /// measured writes into one record.
    ///
    /// Fail-fast: the first failed call aborts the probe with no partial
    /// samples.
    pub async fn probe_register<C: RegistryClient + ?Sized>(
        &self,
        client: &C,
        region: Region,
        usernames: &UsernameFactory,
    ) -> Result<Vec<f64>> {
        let mut samples = Vec::with_capacity(self.iterations as usize);
        for i in 0..self.iterations {
            let username = usernames.latency_username(region, i);
            let watch = Stopwatch::start();
            client.register(&username).await?;
            samples.push(watch.elapsed_ms());
        }
        Ok(samples)
    }

    /// Measure `list` round trips against one region, fail-fast as above
    pub async fn probe_list<C: RegistryClient + ?Sized>(&self, client: &C) -> Result<Vec<f64>> {
        let mut samples = Vec::with_capacity(self.iterations as usize);
        for _ in 0..self.iterations {
            let watch = Stopwatch::start();
            client.list().await?;
            samples.push(watch.elapsed_ms());
        }
        Ok(samples)
    }
}
