//! Aggregation of per-file records into a run-level report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzer::TestFileRecord;
use crate::checks::DependencyReport;
use crate::scanner::SuiteOutcome;

/// Qualitative label derived from the aggregate coverage percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusTier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl StatusTier {
    /// Maps a coverage percentage to its tier.
    pub fn from_coverage(percent: f64) -> Self {
        if percent >= 80.0 {
            StatusTier::Excellent
        } else if percent >= 60.0 {
            StatusTier::Good
        } else {
            StatusTier::NeedsImprovement
        }
    }

    /// Returns a human-readable name for the tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            StatusTier::Excellent => "EXCELLENT",
            StatusTier::Good => "GOOD",
            StatusTier::NeedsImprovement => "NEEDS IMPROVEMENT",
        }
    }
}

/// Running totals across every file folded into a run.
///
/// Owned by the run and threaded through sequential folds; there is no
/// module-level state. `total_tests == passed_tests + failed_tests` holds
/// after every fold.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuiteReport {
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
}

impl SuiteReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one file record into the totals.
    ///
    /// Attribution is coarse on purpose: the file's verdict applies to
    /// every test name found in it, so a FAIL file with 5 detected tests
    /// adds 5 to `failed_tests`. Individual test outcomes are never known.
    pub fn record(&mut self, record: &TestFileRecord) {
        self.total_tests += record.test_count;
        if record.verdict.is_pass() {
            self.passed_tests += record.test_count;
        } else {
            self.failed_tests += record.test_count;
        }
    }

    /// Coverage percentage, or None when no tests were counted.
    pub fn coverage(&self) -> Option<f64> {
        if self.total_tests == 0 {
            return None;
        }
        Some(self.passed_tests as f64 / self.total_tests as f64 * 100.0)
    }

    /// Status tier, or None when no tests were counted.
    pub fn tier(&self) -> Option<StatusTier> {
        self.coverage().map(StatusTier::from_coverage)
    }
}

/// Everything a run produces, ready for rendering.
///
/// Pure data: the CLI owns all formatting.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Per-suite outcomes, in configuration order.
    pub suites: Vec<SuiteOutcome>,
    /// Aggregate totals across all suites.
    pub summary: SuiteReport,
    /// Required project files that were not found.
    pub missing_files: Vec<String>,
    /// Result of the manifest dependency check.
    pub dependencies: DependencyReport,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}
