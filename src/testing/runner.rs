//! Run controller
//!
//! Probes the service, runs the scenario groups in order and turns the
//! counters into a report.

use colored::Colorize;

use crate::api::{Request, Transport};

use super::context::RunContext;
use super::recorder::{Expectation, Recorder};
use super::suite;

const RULE_WIDTH: usize = 40;

/// Overall verdict of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

/// Final tally of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub passed: u32,
    pub failed: u32,
    /// The connectivity probe failed and no group ran
    pub aborted: bool,
}

impl RunReport {
    fn from_recorder(recorder: &Recorder, aborted: bool) -> Self {
        Self {
            passed: recorder.passed(),
            failed: recorder.failed(),
            aborted,
        }
    }

    pub fn total(&self) -> u32 {
        self.passed + self.failed
    }

    /// Percentage of passed assertions, 0 when nothing was asserted
    pub fn success_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.passed) / f64::from(total) * 100.0,
        }
    }

    pub fn verdict(&self) -> Verdict {
        if self.failed > 0 {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }

    /// Print the summary banner and verdict
    pub fn print(&self) {
        println!("\n{}", "=".repeat(RULE_WIDTH));
        println!(
            "{} {}/{} passed ({:.1}%)",
            "Results:".bold(),
            self.passed,
            self.total(),
            self.success_rate()
        );

        match self.verdict() {
            Verdict::Pass => println!("{} {}", "Status:".bold(), "✓ PASS".green().bold()),
            Verdict::Fail => println!("{} {}", "Status:".bold(), "✗ FAIL".red().bold()),
        }

        if self.aborted {
            println!("{}", "Run aborted at the connectivity check".red());
        } else if self.failed > 0 {
            println!("{} {} test(s) failed", "✗".red(), self.failed);
        }
    }
}

/// Run the whole suite against `transport`
pub async fn run_suite(transport: &dyn Transport, verbose: bool) -> RunReport {
    println!("{}", "Workflow Engine Test Suite".blue().bold());
    println!("{}", "=".repeat(RULE_WIDTH));

    let mut ctx = RunContext::new(Recorder::new(verbose));

    let probe = transport.execute(Request::list_definitions()).await;
    if !ctx
        .recorder
        .expect("Server connectivity", &probe, Expectation::Reachable)
    {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Server unreachable. Ensure workflow engine is running.".red()
        );
        tracing::warn!("connectivity probe failed: {}", probe.describe());
        return RunReport::from_recorder(&ctx.recorder, true);
    }

    suite::definitions(transport, &mut ctx).await;
    suite::instances(transport, &mut ctx).await;
    suite::actions(transport, &mut ctx).await;
    suite::validation(transport, &mut ctx).await;

    RunReport::from_recorder(&ctx.recorder, false)
}
