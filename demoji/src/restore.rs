//! `demoji restore`: move backups back over their originals.

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::core::report::{FileReport, FileStatus, RunSummary};
use crate::io::config::DemojiConfig;
use crate::io::discover::{discover_backups, display_path};
use crate::io::files::restore_backup;
use crate::report::print_status;

/// Restore every backup found in the discovery locations under `root`.
///
/// Per-file failures are recorded and do not stop the run.
pub fn run_restore(root: &Path, cfg: &DemojiConfig, quiet: bool) -> Result<RunSummary> {
    let backups = discover_backups(root, cfg)?;
    info!(root = %root.display(), count = backups.len(), "backups discovered");

    let mut summary = RunSummary::new(false);
    for backup in &backups {
        let status = match restore_backup(backup, &cfg.backup_suffix) {
            Ok(restored) => {
                info!(path = %restored.display(), "restored");
                FileStatus::Restored
            }
            Err(err) => {
                warn!(backup = %backup.display(), error = %format!("{err:#}"), "restore failed");
                FileStatus::Failed {
                    error: format!("{err:#}"),
                }
            }
        };
        let shown = display_path(root, backup);
        if !quiet {
            print_status(&shown, &status);
        }
        summary.record(FileReport {
            path: shown,
            status,
        });
    }
    Ok(summary)
}
