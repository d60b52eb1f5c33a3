//! Per-file outcomes and the run summary built from them.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Backup written and original overwritten.
    Cleaned { changed: bool },
    /// Dry run: nothing written.
    WouldClean { changed: bool },
    /// Backup renamed back over the original.
    Restored,
    /// Read, backup, write or rename failed; the run continued.
    Failed { error: String },
}

impl FileStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, FileStatus::Failed { .. })
    }

    pub fn changed(&self) -> bool {
        match self {
            FileStatus::Cleaned { changed } | FileStatus::WouldClean { changed } => *changed,
            FileStatus::Restored => true,
            FileStatus::Failed { .. } => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Path relative to the run root when possible.
    #[serde(serialize_with = "serialize_lossy")]
    pub path: PathBuf,
    pub status: FileStatus,
}

fn serialize_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// Aggregate of every file handled in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub processed: usize,
    pub changed: usize,
    pub failed: usize,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
}

impl RunSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn record(&mut self, report: FileReport) {
        self.processed += 1;
        if report.status.is_failure() {
            self.failed += 1;
        } else if report.status.changed() {
            self.changed += 1;
        }
        self.files.push(report);
    }

    pub fn succeeded(&self) -> usize {
        self.processed - self.failed
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.status.is_failure())
    }
}
