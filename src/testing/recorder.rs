//! Assertion accounting
//!
//! Each assertion prints one line and bumps one of two counters. Nothing
//! else about it is kept.

use colored::Colorize;

use crate::api::Outcome;

/// What a step expects of the service's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// The service answered with a status below 400, body not inspected
    Reachable,
    /// The service applied the request and reported success
    Accepted,
    /// Transport failure, error status, or body-level failure
    Rejected,
}

impl Expectation {
    pub fn holds(self, outcome: &Outcome) -> bool {
        match self {
            Self::Reachable => outcome.is_ok(),
            Self::Accepted => outcome.accepted(),
            Self::Rejected => outcome.rejected(),
        }
    }

    fn failure_detail(self, outcome: &Outcome) -> String {
        match self {
            Self::Reachable | Self::Accepted => outcome.describe(),
            Self::Rejected => format!("expected rejection, got {}", outcome.describe()),
        }
    }
}

/// Pass/fail counters for one run
#[derive(Debug, Default)]
pub struct Recorder {
    passed: u32,
    failed: u32,
    verbose: bool,
}

impl Recorder {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    /// Record a named assertion; returns `condition` unchanged
    ///
    /// `detail` is only rendered when the assertion fails.
    pub fn check(&mut self, name: &str, condition: bool, detail: impl FnOnce() -> String) -> bool {
        if condition {
            self.passed += 1;
            println!("  {} {}", "✓".green(), name);
        } else {
            self.failed += 1;
            let detail = detail();
            tracing::debug!(assertion = name, "assertion failed: {}", detail);
            println!("  {} {}: {}", "✗".red(), name, detail);
        }
        condition
    }

    /// Record whether `outcome` meets `expectation`
    pub fn expect(&mut self, name: &str, outcome: &Outcome, expectation: Expectation) -> bool {
        let holds = self.check(name, expectation.holds(outcome), || {
            expectation.failure_detail(outcome)
        });

        if !holds && self.verbose {
            if let Some(body) = outcome.body() {
                if let Ok(pretty) = serde_json::to_string_pretty(body) {
                    for line in pretty.lines() {
                        println!("      {}", line.dimmed());
                    }
                }
            }
        }
        holds
    }

    /// Announce that a step or group did not run; records nothing
    pub fn skip(&self, reason: &str) {
        println!("  {} {}", "-".yellow(), reason.yellow());
    }

    pub fn passed(&self) -> u32 {
        self.passed
    }

    pub fn failed(&self) -> u32 {
        self.failed
    }

    pub fn total(&self) -> u32 {
        self.passed + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiResponse;

    fn applied(success: bool) -> Outcome {
        Outcome::Applied(ApiResponse {
            success,
            ..ApiResponse::default()
        })
    }

    #[test]
    fn test_check_returns_condition_and_counts() {
        let mut recorder = Recorder::new(false);
        assert!(recorder.check("first", true, String::new));
        assert!(!recorder.check("second", false, || "nope".to_string()));
        assert!(recorder.check("third", true, String::new));

        assert_eq!(recorder.passed(), 2);
        assert_eq!(recorder.failed(), 1);
        assert_eq!(recorder.total(), 3);
    }

    #[test]
    fn test_detail_only_rendered_on_failure() {
        let mut recorder = Recorder::new(false);
        recorder.check("passes", true, || panic!("detail rendered for a pass"));
        assert_eq!(recorder.passed(), 1);
    }

    #[test]
    fn test_skip_records_nothing() {
        let recorder = Recorder::new(true);
        recorder.skip("Skipping instance tests - no definition ID");
        assert_eq!(recorder.total(), 0);
    }

    #[test]
    fn test_expectations() {
        let transport = Outcome::Transport("connection refused".into());
        let http = Outcome::Http {
            status: 500,
            body: ApiResponse::default(),
        };

        assert!(Expectation::Accepted.holds(&applied(true)));
        assert!(!Expectation::Accepted.holds(&applied(false)));
        assert!(!Expectation::Accepted.holds(&http));

        assert!(Expectation::Rejected.holds(&transport));
        assert!(Expectation::Rejected.holds(&http));
        assert!(Expectation::Rejected.holds(&applied(false)));
        assert!(!Expectation::Rejected.holds(&applied(true)));

        // Reachability ignores the body flag
        assert!(Expectation::Reachable.holds(&applied(false)));
        assert!(!Expectation::Reachable.holds(&http));
        assert!(!Expectation::Reachable.holds(&transport));
    }

    #[test]
    fn test_expect_counts_through_check() {
        let mut recorder = Recorder::new(true);
        assert!(recorder.expect("accepted", &applied(true), Expectation::Accepted));
        assert!(!recorder.expect("rejected", &applied(true), Expectation::Rejected));
        assert_eq!(recorder.passed(), 1);
        assert_eq!(recorder.failed(), 1);
    }
}
