//! Registry Benchmark - Main CLI Application
//!
//! Measures round-trip latency against two regional registry instances and
//! probes cross-region read-after-write staleness.

use clap::Parser;
use registry_bench::{app::App, cli::Cli, error::AppError};
use std::process;

#[tokio::main]
async fn main() {
    // Panics must reach the error channel, not vanish into a backtrace dump.
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    let cli = Cli::parse();
    let use_colors = cli.use_colors();

    if let Err(e) = run_application(cli).await {
        eprintln!("Error: {}", e.format_for_console(use_colors));
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<(), AppError> {
    App::new(cli)?.run().await
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Set both region endpoints: --region-a URL --region-b URL");
            eprintln!("  - Endpoints may also come from REGION_A_URL / REGION_B_URL or a .env file");
            eprintln!("  - URLs must start with http:// or https://");
        }
        AppError::Transport(_) => {
            eprintln!();
            eprintln!("Network troubleshooting:");
            eprintln!("  - Verify both registry instances are running and reachable");
            eprintln!("  - Check firewall rules for the configured ports");
        }
        AppError::RequestFailed { .. } => {
            eprintln!();
            eprintln!("The registry rejected a request; the response body above");
            eprintln!("is the service's own diagnostic. The run was aborted with");
            eprintln!("no partial results.");
        }
        AppError::Timeout(_) => {
            eprintln!();
            eprintln!("Timeout troubleshooting:");
            eprintln!("  - Increase the limit with --timeout");
            eprintln!("  - Check latency to both regions manually first");
        }
        _ => {}
    }
}
