//! Device check results and the aggregated security verdict.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The device-trust checks run during the security scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Jailbreak/root detection
    Jailbreak,
    /// Malware and virus scan
    Malware,
    /// Device integrity verification
    Integrity,
}

impl CheckKind {
    /// Every check in battery order
    pub const ALL: [CheckKind; 3] = [CheckKind::Jailbreak, CheckKind::Malware, CheckKind::Integrity];

    /// Status line shown while this check runs
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::Jailbreak => "Checking for jailbreak/root access...",
            CheckKind::Malware => "Scanning for malware and viruses...",
            CheckKind::Integrity => "Verifying device integrity...",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckKind::Jailbreak => write!(f, "jailbreak"),
            CheckKind::Malware => write!(f, "malware"),
            CheckKind::Integrity => write!(f, "integrity"),
        }
    }
}

/// Outcome of a single device check. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Which check produced this result
    pub kind: CheckKind,

    /// Whether the device came back clean
    pub passed: bool,
}

impl CheckResult {
    /// A clean outcome for the given check
    pub fn clean(kind: CheckKind) -> Self {
        Self { kind, passed: true }
    }

    /// A flagged outcome for the given check
    pub fn flagged(kind: CheckKind) -> Self {
        Self {
            kind,
            passed: false,
        }
    }
}

/// Aggregated pass/fail outcome of the device-check battery.
///
/// Derived from the individual results and never mutated after
/// construction: `overall_passed` is the conjunction of every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityVerdict {
    /// Individual check outcomes, in battery order
    pub results: Vec<CheckResult>,

    /// Whether every check came back clean
    pub overall_passed: bool,

    /// When the last check completed
    pub completed_at: DateTime<Utc>,
}

impl SecurityVerdict {
    /// Aggregate a verdict from the collected check results
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let overall_passed = results.iter().all(|result| result.passed);
        Self {
            results,
            overall_passed,
            completed_at: Utc::now(),
        }
    }

    /// The checks that flagged the device, for diagnostic display
    pub fn failed_checks(&self) -> Vec<CheckKind> {
        self.results
            .iter()
            .filter(|result| !result.passed)
            .map(|result| result.kind)
            .collect()
    }
}
