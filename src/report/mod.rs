//! Run report formatting
//!
//! Reporters turn a `RunReport` into a displayable string; actually emitting
//! it is the caller's concern. The probers and orchestrator never touch a
//! reporter, so output can be swapped without changing measurement code.

use crate::error::Result;
use crate::models::RunReport;
use colored::Colorize;

/// Formats a completed run report for display
pub trait Reporter {
    fn format(&self, report: &RunReport) -> Result<String>;
}

/// Create a reporter matching the color preference
pub fn create_reporter(enable_color: bool) -> Box<dyn Reporter> {
    if enable_color {
        Box::new(ConsoleReporter)
    } else {
        Box::new(PlainReporter)
    }
}

/// Plain-text reporter for scripts and logs
pub struct PlainReporter;

impl Reporter for PlainReporter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("Registry Benchmark Results\n");
        out.push_str(&format!("Region A: {}\n", report.region_a_url));
        out.push_str(&format!("Region B: {}\n", report.region_b_url));
        out.push('\n');

        out.push_str("Latency (per round trip)\n");
        for series in &report.latency {
            out.push_str(&format!(
                "  {} {}: avg {:.2} ms  min {:.2} ms  max {:.2} ms  ({} samples)\n",
                series.region,
                series.operation,
                series.mean_ms,
                series.min_ms,
                series.max_ms,
                series.samples_ms.len()
            ));
        }
        out.push('\n');

        let c = &report.consistency;
        out.push_str("Eventual Consistency\n");
        out.push_str(&format!(
            "  {} writes, {} reads: misses {} / {} ({:.0}%)\n",
            c.writer,
            c.reader,
            c.misses,
            c.trials,
            c.miss_ratio * 100.0
        ));
        out.push('\n');

        out.push_str(&format!(
            "Run: {} .. {}\n",
            report.started_at.format("%Y-%m-%d %H:%M:%S%.3f UTC"),
            report.completed_at.format("%Y-%m-%d %H:%M:%S%.3f UTC")
        ));

        Ok(out)
    }
}

/// Colored console reporter
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!("{}\n", "Registry Benchmark Results".bold()));
        out.push_str(&format!("Region A: {}\n", report.region_a_url.cyan()));
        out.push_str(&format!("Region B: {}\n", report.region_b_url.cyan()));
        out.push('\n');

        out.push_str(&format!("{}\n", "Latency (per round trip)".bold()));
        for series in &report.latency {
            out.push_str(&format!(
                "  {} {}: avg {}  min {:.2} ms  max {:.2} ms  ({} samples)\n",
                series.region,
                series.operation,
                format!("{:.2} ms", series.mean_ms).green().bold(),
                series.min_ms,
                series.max_ms,
                series.samples_ms.len()
            ));
        }
        out.push('\n');

        let c = &report.consistency;
        let misses = format!("{} / {}", c.misses, c.trials);
        let misses = if c.misses == 0 {
            misses.green().bold()
        } else {
            misses.yellow().bold()
        };
        out.push_str(&format!("{}\n", "Eventual Consistency".bold()));
        out.push_str(&format!(
            "  {} writes, {} reads: misses {} ({:.0}%)\n",
            c.writer,
            c.reader,
            misses,
            c.miss_ratio * 100.0
        ));
        out.push('\n');

        out.push_str(&format!(
            "Run: {} .. {}\n",
            report.started_at.format("%Y-%m-%d %H:%M:%S%.3f UTC"),
            report.completed_at.format("%Y-%m-%d %H:%M:%S%.3f UTC")
        ));

        Ok(out)
    }
}
