use std::fmt::Display;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// One skipped record or file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadIssue {
    /// File the problem was found in.
    pub file: String,
    /// Offending line, absent for file-level issues.
    pub line: Option<String>,
    /// Why the record or file was skipped.
    pub reason: String,
}

/// Warning ledger for a load run.
///
/// Every issue recorded here is also emitted through `tracing::warn!`, which
/// the CLI routes to standard error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadReport {
    pub products_loaded: u64,
    pub salesmen_loaded: u64,
    pub sales_loaded: u64,
    pub warnings: Vec<LoadIssue>,
}

impl LoadReport {
    /// Records a skipped line.
    pub fn warn_line(&mut self, file: &Path, line: &str, reason: impl Display) {
        let reason = reason.to_string();
        warn!(file = %file.display(), line, %reason, "record skipped");
        self.warnings.push(LoadIssue {
            file: file.display().to_string(),
            line: Some(line.to_string()),
            reason,
        });
    }

    /// Records a skipped file.
    pub fn warn_file(&mut self, file: &Path, reason: impl Display) {
        let reason = reason.to_string();
        warn!(file = %file.display(), %reason, "file skipped");
        self.warnings.push(LoadIssue {
            file: file.display().to_string(),
            line: None,
            reason,
        });
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
