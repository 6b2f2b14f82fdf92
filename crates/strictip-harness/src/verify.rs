//! Output comparison and verification.

use serde::{Deserialize, Serialize};

/// Result of verifying a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Name of the test case.
    pub case_name: String,
    /// RFC or grammar reference the case pins down.
    pub reference: String,
    /// Whether the strict output matched the fixture.
    pub passed: bool,
    /// Expected output.
    pub expected: String,
    /// Actual output from the strict codec.
    pub actual: String,
    /// Diff if the case failed, or host divergence notes if it passed.
    pub diff: Option<String>,
    /// Whether `std::net` produced the same result.
    pub host_parity: bool,
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total cases run.
    pub total: usize,
    /// Cases passed.
    pub passed: usize,
    /// Cases failed.
    pub failed: usize,
    /// Cases where strict and host results differ.
    pub host_divergent: usize,
    /// Individual results.
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let host_divergent = results.iter().filter(|r| !r.host_parity).count();
        Self {
            total,
            passed,
            failed: total - passed,
            host_divergent,
            results,
        }
    }

    /// Returns true if all cases passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
