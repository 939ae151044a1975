//! Benchmark run orchestration
//!
//! One run walks a fixed sequence of states, each gated on the previous one
//! completing: clear both regions, register-latency probes, list-latency
//! probes, clear again, consistency probe, report assembly. No state is
//! retried; the first error anywhere aborts the run so a partial latency
//! series or consistency count can never masquerade as a trustworthy result.

use crate::client::RegistryClient;
use crate::error::Result;
use crate::logging::RunLogger;
use crate::models::{Config, ConsistencyReport, LatencyReport, RunReport};
use crate::probe::{ConsistencyProber, LatencyProber, UsernameFactory};
use crate::types::{ProbeOperation, Region};
use chrono::Utc;
use std::sync::Arc;

/// Execute one complete benchmark run against two regional clients.
///
/// Generic over the client type so the entire pipeline can run against
/// in-memory stubs; `endpoint_a`/`endpoint_b` only label the report.
pub async fn run_benchmark<A, B>(
    client_a: Arc<A>,
    client_b: Arc<B>,
    endpoint_a: &str,
    endpoint_b: &str,
    config: &Config,
    usernames: &UsernameFactory,
    logger: &RunLogger,
) -> Result<RunReport>
where
    A: RegistryClient + 'static,
    B: RegistryClient + 'static,
{
    let started_at = Utc::now();

    logger.info("Clearing both regions");
    client_a.clear().await?;
    client_b.clear().await?;

    let latency = LatencyProber::new(config.iterations);
    let mut series = Vec::with_capacity(4);

    logger.info(&format!(
        "Measuring /register latency ({} iterations per region)",
        config.iterations
    ));
    let samples = latency
        .probe_register(client_a.as_ref(), Region::A, usernames)
        .await?;
    series.push(LatencyReport::from_samples(
        Region::A,
        ProbeOperation::Register,
        samples,
    )?);
    let samples = latency
        .probe_register(client_b.as_ref(), Region::B, usernames)
        .await?;
    series.push(LatencyReport::from_samples(
        Region::B,
        ProbeOperation::Register,
        samples,
    )?);

    logger.info(&format!(
        "Measuring /list latency ({} iterations per region)",
        config.iterations
    ));
    let samples = latency.probe_list(client_a.as_ref()).await?;
    series.push(LatencyReport::from_samples(
        Region::A,
        ProbeOperation::List,
        samples,
    )?);
    let samples = latency.probe_list(client_b.as_ref()).await?;
    series.push(LatencyReport::from_samples(
        Region::B,
        ProbeOperation::List,
        samples,
    )?);

    logger.info("Clearing both regions before consistency probe");
    client_a.clear().await?;
    client_b.clear().await?;

    logger.info(&format!(
        "Running consistency probe ({} trials, A writes, B reads)",
        config.trials
    ));
    let trial_usernames = usernames.consistency_usernames(config.trials);
    let misses = ConsistencyProber::new(config.trials)
        .probe(Arc::clone(&client_a), client_b.as_ref(), &trial_usernames)
        .await?;
    logger.debug(&format!("Consistency misses: {} / {}", misses, config.trials));

    let consistency = ConsistencyReport::new(Region::A, Region::B, config.trials, misses)?;

    Ok(RunReport {
        region_a_url: endpoint_a.to_string(),
        region_b_url: endpoint_b.to_string(),
        latency: series,
        consistency,
        started_at,
        completed_at: Utc::now(),
    })
}
