//! Locate documents (and their backups) under a run root.
//!
//! Discovery is non-recursive: the root itself plus each configured
//! subdirectory. Hidden files are skipped, as a shell glob would.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::io::config::DemojiConfig;

/// List documents to clean: `<root>/*.<ext>` then `<root>/<dir>/*.<ext>`.
pub fn discover_documents(root: &Path, cfg: &DemojiConfig) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{}", cfg.extension);
    discover(root, cfg, &suffix)
}

/// List backups: `<root>/*.<ext><backup_suffix>` and the same per subdirectory.
pub fn discover_backups(root: &Path, cfg: &DemojiConfig) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{}{}", cfg.extension, cfg.backup_suffix);
    discover(root, cfg, &suffix)
}

fn discover(root: &Path, cfg: &DemojiConfig, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    let mut push_unique = |paths: Vec<PathBuf>| {
        for path in paths {
            let key = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
            if seen.insert(key) {
                found.push(path);
            } else {
                debug!(path = %path.display(), "skipping duplicate");
            }
        }
    };

    push_unique(list_matching(root, suffix)?);
    for dir in &cfg.directories {
        let dir_path = root.join(dir);
        if !dir_path.is_dir() {
            debug!(dir = %dir_path.display(), "directory missing, skipped");
            continue;
        }
        push_unique(list_matching(&dir_path, suffix)?);
    }

    Ok(found)
}

/// Regular, non-hidden files in `dir` whose name ends with `suffix`, sorted.
///
/// Names are matched as raw bytes, so non-UTF-8 names are included.
fn list_matching(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let name = entry.file_name();
        let name = name.as_encoded_bytes();
        if name.starts_with(b".")
            || name.len() <= suffix.len()
            || !name.ends_with(suffix.as_bytes())
        {
            continue;
        }
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Render `path` relative to `root` for reporting.
pub fn display_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DocTree;

    fn relative(tree: &DocTree, paths: Vec<PathBuf>) -> Vec<String> {
        paths
            .iter()
            .map(|p| display_path(tree.path(), p).display().to_string())
            .collect()
    }

    #[test]
    fn finds_root_then_docs() {
        let tree = DocTree::new().expect("tree");
        tree.write("README.md", "r").expect("write");
        tree.write("CHANGELOG.md", "c").expect("write");
        tree.write("docs/guide.md", "g").expect("write");
        tree.write("docs/api.md", "a").expect("write");
        tree.write("notes.txt", "n").expect("write");

        let docs = discover_documents(tree.path(), &DemojiConfig::default()).expect("discover");
        assert_eq!(
            relative(&tree, docs),
            vec!["CHANGELOG.md", "README.md", "docs/api.md", "docs/guide.md"]
        );
    }

    #[test]
    fn is_not_recursive_and_skips_hidden_and_dirs() {
        let tree = DocTree::new().expect("tree");
        tree.write("a.md", "a").expect("write");
        tree.write(".hidden.md", "h").expect("write");
        tree.write("docs/deep/nested.md", "n").expect("write");
        tree.write("other/skip.md", "s").expect("write");
        fs::create_dir_all(tree.path().join("folder.md")).expect("mkdir");

        let docs = discover_documents(tree.path(), &DemojiConfig::default()).expect("discover");
        assert_eq!(relative(&tree, docs), vec!["a.md"]);
    }

    #[test]
    fn missing_docs_directory_is_fine() {
        let tree = DocTree::new().expect("tree");
        tree.write("only.md", "x").expect("write");
        let docs = discover_documents(tree.path(), &DemojiConfig::default()).expect("discover");
        assert_eq!(relative(&tree, docs), vec!["only.md"]);
    }

    #[test]
    fn overlapping_directories_are_deduplicated() {
        let tree = DocTree::new().expect("tree");
        tree.write("a.md", "a").expect("write");
        let cfg = DemojiConfig {
            directories: vec![".".to_string()],
            ..DemojiConfig::default()
        };
        let docs = discover_documents(tree.path(), &cfg).expect("discover");
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn backups_are_listed_separately() {
        let tree = DocTree::new().expect("tree");
        tree.write("a.md", "a").expect("write");
        tree.write("a.md.backup", "a").expect("write");
        tree.write("docs/b.md.backup", "b").expect("write");
        tree.write("c.txt.backup", "c").expect("write");

        let cfg = DemojiConfig::default();
        let docs = discover_documents(tree.path(), &cfg).expect("docs");
        assert_eq!(relative(&tree, docs), vec!["a.md"]);
        let backups = discover_backups(tree.path(), &cfg).expect("backups");
        assert_eq!(
            relative(&tree, backups),
            vec!["a.md.backup", "docs/b.md.backup"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_discovered() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tree = DocTree::new().expect("tree");
        tree.write("a.md", "a").expect("write");
        let odd = tree.path().join(OsStr::from_bytes(b"caf\xe9.md"));
        fs::write(&odd, "x").expect("write");

        let docs = discover_documents(tree.path(), &DemojiConfig::default()).expect("discover");
        assert_eq!(docs.len(), 2);
        assert!(docs.contains(&odd));
    }

    #[test]
    fn unreadable_root_is_an_error() {
        let tree = DocTree::new().expect("tree");
        let missing = tree.path().join("absent");
        assert!(discover_documents(&missing, &DemojiConfig::default()).is_err());
    }
}
