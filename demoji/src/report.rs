//! Human and JSON rendering of run results on stdout.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::report::{FileStatus, RunSummary};
use crate::io::config::DemojiConfig;

/// Print the progress line that follows `Processing: <path>`.
pub fn print_status(shown: &Path, status: &FileStatus) {
    match status {
        FileStatus::Cleaned { .. } => println!("Cleaned: {}", shown.display()),
        FileStatus::WouldClean { changed: true } => println!("Would clean: {}", shown.display()),
        FileStatus::WouldClean { changed: false } => println!("Unchanged: {}", shown.display()),
        FileStatus::Restored => println!("Restored: {}", shown.display()),
        FileStatus::Failed { error } => {
            println!("Error processing {}: {}", shown.display(), error);
        }
    }
}

/// Print the closing summary of a clean run.
pub fn print_clean_summary(summary: &RunSummary, cfg: &DemojiConfig) {
    println!();
    if summary.dry_run {
        println!(
            "Checked {} files, {} would change (dry run, nothing written)",
            summary.processed, summary.changed
        );
    } else {
        println!("Processed {} files", summary.processed);
        println!("Backup files created with {} extension", cfg.backup_suffix);
        println!("To restore: demoji restore");
        println!("  or: {}", restore_hint(cfg));
    }
    if summary.failed > 0 {
        println!("{} files failed", summary.failed);
    }
}

/// Print the closing summary of a restore run.
pub fn print_restore_summary(summary: &RunSummary) {
    println!();
    println!("Restored {} files", summary.succeeded());
    if summary.failed > 0 {
        println!("{} files failed", summary.failed);
    }
}

/// Print the summary as pretty JSON with a trailing newline.
pub fn print_json(summary: &RunSummary) -> Result<()> {
    let payload = serde_json::to_string_pretty(summary).context("serialize summary json")?;
    println!("{payload}");
    Ok(())
}

/// Shell loop that renames every backup back over its original.
pub fn restore_hint(cfg: &DemojiConfig) -> String {
    let suffix = &cfg.backup_suffix;
    let mut globs = vec![format!("*{suffix}")];
    globs.extend(cfg.directories.iter().map(|dir| format!("{dir}/*{suffix}")));
    format!(
        "for f in {}; do mv \"$f\" \"${{f%{suffix}}}\"; done",
        globs.join(" ")
    )
}
