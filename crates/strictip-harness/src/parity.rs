//! Host-parity scan.
//!
//! Feeds every literal of a corpus to the strict codec and to `std::net`
//! through the address, endpoint and port entry points, and records where the
//! two disagree.

use serde::{Deserialize, Serialize};

use crate::conformance::execute_case;

/// Entry points every corpus literal is run through.
pub const SCANNED_FUNCTIONS: [&str; 3] = ["ip_parse", "socket_parse", "port_parse"];

/// One literal through one entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityRow {
    pub function: String,
    pub input: String,
    pub strict: String,
    pub host: String,
    pub agrees: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParityReport {
    pub literals: usize,
    pub checks: usize,
    pub divergent: usize,
    pub rows: Vec<ParityRow>,
}

impl ParityReport {
    /// Scan a corpus with one literal per line. Blank lines and lines
    /// starting with `#` are skipped; literals are taken verbatim otherwise.
    #[must_use]
    pub fn scan(corpus: &str) -> Self {
        let literals: Vec<&str> = corpus
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
            .collect();
        Self::scan_literals(&literals)
    }

    #[must_use]
    pub fn scan_literals(literals: &[&str]) -> Self {
        let mut rows = Vec::with_capacity(literals.len() * SCANNED_FUNCTIONS.len());
        for input in literals {
            for function in SCANNED_FUNCTIONS {
                // Every scanned function is supported, so the error arm is unreachable.
                let Ok(run) = execute_case(function, input) else {
                    continue;
                };
                rows.push(ParityRow {
                    function: function.to_string(),
                    input: (*input).to_string(),
                    strict: run.impl_output,
                    host: run.host_output,
                    agrees: run.host_parity,
                });
            }
        }

        let divergent = rows.iter().filter(|r| !r.agrees).count();
        Self {
            literals: literals.len(),
            checks: rows.len(),
            divergent,
            rows,
        }
    }

    /// Rows where strict and host disagree.
    pub fn divergences(&self) -> impl Iterator<Item = &ParityRow> {
        self.rows.iter().filter(|r| !r.agrees)
    }

    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("# strictip host parity\n\n");
        out.push_str(&format!("- Literals: {}\n", self.literals));
        out.push_str(&format!("- Checks: {}\n", self.checks));
        out.push_str(&format!("- Divergent: {}\n\n", self.divergent));
        out.push_str("| Function | Input | Strict | Host |\n");
        out.push_str("|----------|-------|--------|------|\n");
        for r in self.divergences() {
            out.push_str(&format!(
                "| {} | `{}` | {} | {} |\n",
                r.function, r.input, r.strict, r.host
            ));
        }
        out
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
