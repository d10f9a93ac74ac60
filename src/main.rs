//! Workflow acceptance harness - runs the fixed acceptance suite against
//! a workflow service and prints the report on stdout.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use workflow_acceptance::common::{logging, Config, Error, Result};
use workflow_acceptance::{api, run_suite};

#[derive(Parser)]
#[command(
    name = "workflow-acceptance",
    about = "Acceptance test suite for a workflow engine service"
)]
#[command(version, long_about = None)]
struct Cli {
    /// Base URL of the workflow service (default: http://localhost:5000)
    base_url: Option<String>,

    /// Per-request timeout in seconds (default: 10)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Harness configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print response payloads of failed assertions
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    let base_url = cli.base_url.unwrap_or(config.target.base_url);
    let timeout = match cli.timeout {
        Some(0) => return Err(Error::Config("--timeout must be greater than zero".to_string())),
        Some(secs) => Duration::from_secs(secs),
        None => config.timeouts.request(),
    };

    let transport = api::connect(&base_url, timeout)?;
    tracing::info!(%base_url, ?timeout, "starting acceptance run");

    // A FAIL verdict is reported on stdout, not through the exit code
    let report = run_suite(transport.as_ref(), cli.verbose || config.output.verbose).await;
    report.print();

    Ok(())
}
