//! Cleaner configuration stored in `demoji.toml` at the run root.

use std::fs;
use std::path::{Component, Path};

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};

use crate::core::glyphs::is_single_glyph;
use crate::core::strategy::Strategy;

/// Default config file name, looked up in the run root.
pub const CONFIG_FILE_NAME: &str = "demoji.toml";

/// Cleaner configuration (TOML).
///
/// Missing fields default to the behavior of a bare `demoji` invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemojiConfig {
    /// Removal strategy used when `--strategy` is not given.
    pub strategy: Strategy,

    /// File extension of documents to clean, without the dot.
    pub extension: String,

    /// Subdirectories of the root scanned in addition to the root itself.
    pub directories: Vec<String>,

    /// Suffix appended to a document's file name for its backup.
    pub backup_suffix: String,

    /// Glyphs removed in addition to the built-in dictionary.
    pub extra_glyphs: Vec<String>,
}

impl Default for DemojiConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            extension: "md".to_string(),
            directories: vec!["docs".to_string()],
            backup_suffix: ".backup".to_string(),
            extra_glyphs: Vec::new(),
        }
    }
}

impl DemojiConfig {
    pub fn validate(&self) -> Result<()> {
        let ext = self.extension.trim();
        if ext.is_empty() {
            return Err(anyhow!("extension must be non-empty"));
        }
        if ext.contains(['.', '/', '\\']) {
            return Err(anyhow!(
                "extension must not contain '.' or path separators (got {:?})",
                self.extension
            ));
        }
        if !self.backup_suffix.starts_with('.') || self.backup_suffix.len() < 2 {
            return Err(anyhow!(
                "backup_suffix must start with '.' and name an extension (got {:?})",
                self.backup_suffix
            ));
        }
        if self.backup_suffix.contains(['/', '\\']) {
            return Err(anyhow!("backup_suffix must not contain path separators"));
        }
        for dir in &self.directories {
            let path = Path::new(dir);
            if dir.trim().is_empty() || path.is_absolute() {
                return Err(anyhow!("directories must be relative paths (got {:?})", dir));
            }
            if path.components().any(|c| matches!(c, Component::ParentDir)) {
                return Err(anyhow!("directories must stay inside the root (got {:?})", dir));
            }
        }
        for glyph in &self.extra_glyphs {
            if !is_single_glyph(glyph) || glyph.chars().any(char::is_whitespace) {
                return Err(anyhow!(
                    "extra_glyphs entries must be a single non-space glyph (got {:?})",
                    glyph
                ));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DemojiConfig::default()`.
pub fn load_config(path: &Path) -> Result<DemojiConfig> {
    if !path.exists() {
        let cfg = DemojiConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DemojiConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Resolve the config for a run rooted at `root`.
///
/// An explicitly requested file must exist; the implicit `demoji.toml` is
/// optional.
pub fn resolve_config(root: &Path, explicit: Option<&Path>) -> Result<DemojiConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            load_config(path)
        }
        None => load_config(&root.join(CONFIG_FILE_NAME)),
    }
}
