//! `demoji clean`: discover, back up, strip, overwrite, report.
//!
//! Files are handled one at a time. A failure on one file is recorded in the
//! summary and the run moves on; only discovery failures abort the run.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::core::report::{FileReport, FileStatus, RunSummary};
use crate::core::strategy::Cleaner;
use crate::io::config::DemojiConfig;
use crate::io::discover::{discover_documents, display_path};
use crate::io::files::{decode_utf8, read_document, write_atomic, write_backup};
use crate::report::print_status;

/// Options for [`run_clean`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Compute results without writing backups or documents.
    pub dry_run: bool,
    /// Suppress per-file progress lines.
    pub quiet: bool,
}

/// Clean every discovered document under `root`.
pub fn run_clean(
    root: &Path,
    cfg: &DemojiConfig,
    cleaner: &Cleaner,
    options: CleanOptions,
) -> Result<RunSummary> {
    let documents = discover_documents(root, cfg)?;
    info!(
        root = %root.display(),
        count = documents.len(),
        strategy = ?cleaner.strategy(),
        dry_run = options.dry_run,
        "documents discovered"
    );

    let mut summary = RunSummary::new(options.dry_run);
    for path in &documents {
        let shown = display_path(root, path);
        if !options.quiet {
            println!("Processing: {}", shown.display());
        }
        let status = match clean_file(path, cleaner, &cfg.backup_suffix, options.dry_run) {
            Ok(status) => status,
            Err(err) => {
                warn!(path = %path.display(), error = %format!("{err:#}"), "clean failed");
                FileStatus::Failed {
                    error: format!("{err:#}"),
                }
            }
        };
        if !options.quiet {
            print_status(&shown, &status);
        }
        summary.record(FileReport {
            path: shown,
            status,
        });
    }
    Ok(summary)
}

/// Clean a single document.
///
/// The backup is written before the original is touched; if it fails the
/// original is left as it was.
pub fn clean_file(
    path: &Path,
    cleaner: &Cleaner,
    backup_suffix: &str,
    dry_run: bool,
) -> Result<FileStatus> {
    let original = read_document(path)?;
    let text = decode_utf8(path, &original)?;
    let cleaned = cleaner.clean(text);
    let changed = cleaned != text;
    debug!(path = %path.display(), changed, "cleaned in memory");

    if dry_run {
        return Ok(FileStatus::WouldClean { changed });
    }

    let backup = write_backup(path, &original, backup_suffix)?;
    debug!(backup = %backup.display(), "backup written");
    write_atomic(path, &cleaned)?;
    Ok(FileStatus::Cleaned { changed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::strategy::Strategy;
    use crate::test_support::DocTree;

    const QUIET: CleanOptions = CleanOptions {
        dry_run: false,
        quiet: true,
    };

    fn cleaner(strategy: Strategy) -> Cleaner {
        Cleaner::new(strategy, &[]).expect("cleaner")
    }

    #[test]
    fn cleans_documents_and_keeps_backups() {
        let tree = DocTree::new().expect("tree");
        let original = "# 🚀 Launch\n\n🎯 Goals:  ship\n";
        tree.write("README.md", original).expect("write");
        tree.write("docs/guide.md", "✅ done\n").expect("write");

        let summary = run_clean(
            tree.path(),
            &DemojiConfig::default(),
            &cleaner(Strategy::Dictionary),
            QUIET,
        )
        .expect("clean");

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.changed, 2);
        assert_eq!(summary.failed, 0);
        assert_eq!(tree.read("README.md").expect("read"), "# Launch\n\n Goals: ship\n");
        assert_eq!(tree.read("README.md.backup").expect("read"), original);
        assert_eq!(tree.read("docs/guide.md").expect("read"), " done\n");
        assert_eq!(tree.read("docs/guide.md.backup").expect("read"), "✅ done\n");
    }

    #[test]
    fn unchanged_files_still_get_backups() {
        let tree = DocTree::new().expect("tree");
        tree.write("plain.md", "plain text\n").expect("write");
        let summary = run_clean(
            tree.path(),
            &DemojiConfig::default(),
            &cleaner(Strategy::Dictionary),
            QUIET,
        )
        .expect("clean");
        assert_eq!(summary.changed, 0);
        assert_eq!(
            summary.files[0].status,
            FileStatus::Cleaned { changed: false }
        );
        assert_eq!(tree.read("plain.md.backup").expect("read"), "plain text\n");
    }

    #[test]
    fn failure_on_one_file_does_not_stop_the_run() {
        let tree = DocTree::new().expect("tree");
        tree.write("a.md", [0xffu8, 0xfe, 0x00]).expect("write");
        tree.write("b.md", "🔥 hot\n").expect("write");

        let summary = run_clean(
            tree.path(),
            &DemojiConfig::default(),
            &cleaner(Strategy::Dictionary),
            QUIET,
        )
        .expect("clean");

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.failed, 1);
        assert!(matches!(
            &summary.files[0].status,
            FileStatus::Failed { error } if error.contains("UTF-8")
        ));
        assert!(!tree.exists("a.md.backup"));
        assert_eq!(tree.read_bytes("a.md").expect("read"), vec![0xff, 0xfe, 0x00]);
        assert_eq!(tree.read("b.md").expect("read"), " hot\n");
    }

    #[test]
    fn dry_run_writes_nothing() {
        let tree = DocTree::new().expect("tree");
        tree.write("a.md", "📦 pkg\n").expect("write");
        tree.write("b.md", "plain\n").expect("write");

        let summary = run_clean(
            tree.path(),
            &DemojiConfig::default(),
            &cleaner(Strategy::Dictionary),
            CleanOptions {
                dry_run: true,
                quiet: true,
            },
        )
        .expect("clean");

        assert!(summary.dry_run);
        assert_eq!(summary.changed, 1);
        assert_eq!(
            summary.files[1].status,
            FileStatus::WouldClean { changed: false }
        );
        assert_eq!(tree.read("a.md").expect("read"), "📦 pkg\n");
        assert!(!tree.exists("a.md.backup"));
    }

    #[test]
    fn second_run_changes_nothing() {
        let tree = DocTree::new().expect("tree");
        tree.write("a.md", "🚀 Launch  😀 now\n\n").expect("write");
        let cfg = DemojiConfig::default();

        for strategy in [Strategy::Dictionary, Strategy::Ranges] {
            let c = cleaner(strategy);
            run_clean(tree.path(), &cfg, &c, QUIET).expect("first");
            let summary = run_clean(tree.path(), &cfg, &c, QUIET).expect("second");
            assert_eq!(summary.changed, 0, "{strategy:?}");
        }
    }

    #[test]
    fn ranges_strategy_flattens_document() {
        let tree = DocTree::new().expect("tree");
        tree.write("a.md", "# 😀 Title\n\nBody\n").expect("write");
        run_clean(
            tree.path(),
            &DemojiConfig::default(),
            &cleaner(Strategy::Ranges),
            QUIET,
        )
        .expect("clean");
        assert_eq!(tree.read("a.md").expect("read"), "# Title Body ");
    }

    #[test]
    fn failed_backup_leaves_original_untouched() {
        let tree = DocTree::new().expect("tree");
        tree.write("a.md", "🚀 launch\n").expect("write");
        std::fs::create_dir(tree.path().join("a.md.backup")).expect("block backup path");

        let summary = run_clean(
            tree.path(),
            &DemojiConfig::default(),
            &cleaner(Strategy::Dictionary),
            QUIET,
        )
        .expect("clean");

        assert_eq!(summary.failed, 1);
        assert!(matches!(
            &summary.files[0].status,
            FileStatus::Failed { error } if error.contains("write backup")
        ));
        assert_eq!(tree.read("a.md").expect("read"), "🚀 launch\n");
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_document_is_cleaned_through_the_link() {
        let tree = DocTree::new().expect("tree");
        let target = tree.write("real/target.md", "🚀 hi\n").expect("write");
        let link = tree.path().join("link.md");
        std::os::unix::fs::symlink(&target, &link).expect("symlink");

        let summary = run_clean(
            tree.path(),
            &DemojiConfig::default(),
            &cleaner(Strategy::Dictionary),
            QUIET,
        )
        .expect("clean");

        assert_eq!(
            summary.files[0].status,
            FileStatus::Cleaned { changed: true }
        );
        assert!(
            std::fs::symlink_metadata(&link)
                .expect("lstat")
                .file_type()
                .is_symlink()
        );
        assert_eq!(tree.read("real/target.md").expect("read"), " hi\n");
        assert_eq!(tree.read("link.md.backup").expect("read"), "🚀 hi\n");
    }

    #[test]
    fn custom_suffix_is_used() {
        let tree = DocTree::new().expect("tree");
        tree.write("a.md", "🔧 fix\n").expect("write");
        let cfg = DemojiConfig {
            backup_suffix: ".orig".to_string(),
            ..DemojiConfig::default()
        };
        run_clean(tree.path(), &cfg, &cleaner(Strategy::Dictionary), QUIET).expect("clean");
        assert!(tree.exists("a.md.orig"));
        assert!(!tree.exists("a.md.backup"));
    }
}
