//! Conformance testing harness for strictip.
//!
//! This crate provides:
//! - Fixtures: JSON reference cases for every codec entry point
//! - Conformance execution: run a case through the strict codec and the
//!   `std::net` host parser side by side
//! - Parity scans: list every literal where strict and host disagree
//! - Report generation: human-readable + machine-readable conformance reports
//! - Structured JSONL logging and a SHA-256 artifact index

#![forbid(unsafe_code)]

pub mod artifacts;
pub mod conformance;
pub mod diff;
pub mod fixtures;
pub mod parity;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
