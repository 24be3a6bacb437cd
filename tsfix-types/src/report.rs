use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final report for one run: counts, fixed paths, and per-file failures.
///
/// Built incrementally as files complete, finalized once at end of run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixReport {
    pub schema: String,
    pub tool: ToolInfo,
    pub run: RunInfo,
    pub summary: RunSummary,

    /// Paths written back (or that would be, in a dry run), in completion order.
    #[serde(default)]
    pub fixed: Vec<Utf8PathBuf>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FileFailure>,
}

impl FixReport {
    pub fn new(tool: ToolInfo) -> Self {
        Self {
            schema: crate::schema::TSFIX_REPORT_V1.to_string(),
            tool,
            run: RunInfo {
                started_at: Utc::now(),
                ended_at: None,
            },
            summary: RunSummary::default(),
            fixed: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn record_fixed(&mut self, path: Utf8PathBuf) {
        self.summary.files_scanned += 1;
        self.summary.files_fixed += 1;
        self.fixed.push(path);
    }

    pub fn record_unchanged(&mut self) {
        self.summary.files_scanned += 1;
    }

    pub fn record_failure(&mut self, path: Utf8PathBuf, reason: String) {
        self.summary.files_scanned += 1;
        self.summary.files_failed += 1;
        self.failures.push(FileFailure { path, reason });
    }

    pub fn finish(&mut self) {
        self.run.ended_at = Some(Utc::now());
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunInfo {
    pub started_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub files_scanned: u64,
    pub files_fixed: u64,

    #[serde(default)]
    pub files_failed: u64,
}

/// Record of a file that could not be read or written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: Utf8PathBuf,
    pub reason: String,
}
