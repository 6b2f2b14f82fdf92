//! Test execution engine.

use std::io::Write;
use std::time::Instant;

use crate::conformance::{CaseRun, execute_case};
use crate::diff;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome, StreamKind};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| verify_case(case).0)
            .collect()
    }

    /// Run all fixtures, emitting one JSONL entry per case plus start/end markers.
    pub fn run_logged<W: Write>(
        &self,
        fixture_set: &FixtureSet,
        emitter: &mut LogEmitter<W>,
    ) -> std::io::Result<Vec<VerificationResult>> {
        emitter.emit_entry(
            LogEntry::new("", LogLevel::Info, "fixture_set_start")
                .with_stream(StreamKind::Conformance)
                .with_details(serde_json::json!({
                    "family": fixture_set.family,
                    "version": fixture_set.version,
                    "cases": fixture_set.cases.len(),
                })),
        )?;

        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let started = Instant::now();
            let (result, unsupported) = verify_case(case);
            let elapsed = started.elapsed().as_nanos();
            let latency_ns = u64::try_from(elapsed).unwrap_or(u64::MAX);

            let (level, outcome) = match (unsupported, result.passed) {
                (true, _) => (LogLevel::Error, Outcome::Error),
                (false, true) => (LogLevel::Info, Outcome::Pass),
                (false, false) => (LogLevel::Warn, Outcome::Fail),
            };
            let entry = LogEntry::new("", level, "case_result")
                .with_stream(StreamKind::Conformance)
                .with_case(&case.function, &case.input)
                .with_outcome(outcome)
                .with_latency_ns(latency_ns)
                .with_details(serde_json::json!({
                    "case": result.case_name,
                    "expected": result.expected,
                    "actual": result.actual,
                    "host_parity": result.host_parity,
                }));
            emitter.emit_entry(entry)?;
            results.push(result);
        }

        let failed = results.iter().filter(|r| !r.passed).count();
        emitter.emit_entry(
            LogEntry::new(
                "",
                if failed == 0 { LogLevel::Info } else { LogLevel::Warn },
                "fixture_set_end",
            )
            .with_stream(StreamKind::Conformance)
            .with_outcome(if failed == 0 { Outcome::Pass } else { Outcome::Fail })
            .with_details(serde_json::json!({
                "family": fixture_set.family,
                "failed": failed,
            })),
        )?;
        emitter.flush()?;
        Ok(results)
    }
}

/// Verify one case. The flag is set when the function is not supported.
fn verify_case(case: &FixtureCase) -> (VerificationResult, bool) {
    let (actual, diff, host_parity, unsupported) = match execute_case(&case.function, &case.input)
    {
        Ok(run) => {
            let diff = case_diff(case, &run);
            (run.impl_output, diff, run.host_parity, false)
        }
        Err(err) => {
            let actual = format!("unsupported:{err}");
            let diff = Some(diff::render_diff(&case.expected_output, &actual));
            (actual, diff, false, true)
        }
    };

    let result = VerificationResult {
        case_name: case.name.clone(),
        reference: case.reference.clone(),
        passed: actual == case.expected_output,
        expected: case.expected_output.clone(),
        actual,
        diff,
        host_parity,
    };
    (result, unsupported)
}

fn case_diff(case: &FixtureCase, run: &CaseRun) -> Option<String> {
    if run.impl_output != case.expected_output {
        Some(diff::render_diff(&case.expected_output, &run.impl_output))
    } else {
        run.note.clone()
    }
}
