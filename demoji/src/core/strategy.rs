//! Emoji removal strategies.
//!
//! A [`Cleaner`] is built once per process from the static tables in
//! [`super::glyphs`] plus any configured extra glyphs, then applied to every
//! document. Cleaning is pure: same input, same output.

use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::glyphs::{DICTIONARY, VARIATION_SELECTOR_16, is_single_glyph, range_class};
use super::whitespace::{collapse_document, collapse_lines};

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(&range_class()).unwrap());

/// How emoji are located and how whitespace is normalized afterwards.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Remove dictionary glyphs line by line; collapse whitespace within lines.
    #[default]
    Dictionary,
    /// Remove dictionary glyphs and every pictographic range over the whole
    /// text; collapse all whitespace, newlines included.
    Ranges,
}

/// Compiled replacement table for one run.
#[derive(Debug, Clone)]
pub struct Cleaner {
    strategy: Strategy,
    dictionary: Regex,
}

impl Cleaner {
    /// Build a cleaner with the built-in dictionary extended by `extra_glyphs`.
    ///
    /// Each extra glyph must be a single character with an optional VS16.
    pub fn new(strategy: Strategy, extra_glyphs: &[String]) -> Result<Self> {
        if let Some(glyph) = extra_glyphs.iter().find(|g| !is_single_glyph(g)) {
            bail!("extra glyph {glyph:?} must be a single character");
        }
        let dictionary = dictionary_regex(extra_glyphs).context("compile glyph dictionary")?;
        Ok(Self {
            strategy,
            dictionary,
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Remove emoji from `text` according to the configured strategy.
    pub fn clean(&self, text: &str) -> String {
        match self.strategy {
            Strategy::Dictionary => self.clean_lines(text),
            Strategy::Ranges => self.clean_document(text),
        }
    }

    fn clean_lines(&self, text: &str) -> String {
        let stripped = self.dictionary.replace_all(text, "");
        collapse_lines(&stripped)
    }

    fn clean_document(&self, text: &str) -> String {
        let stripped = self.dictionary.replace_all(text, "");
        let stripped = RANGE_RE.replace_all(&stripped, "");
        collapse_document(&stripped)
    }
}

/// Alternation of every glyph, each optionally followed by VS16.
fn dictionary_regex(extra_glyphs: &[String]) -> Result<Regex> {
    let mut glyphs: Vec<&str> = DICTIONARY.iter().copied().collect();
    glyphs.extend(
        extra_glyphs
            .iter()
            .map(|g| g.strip_suffix(VARIATION_SELECTOR_16).unwrap_or(g)),
    );
    glyphs.sort_unstable();
    glyphs.dedup();

    let alternation = glyphs
        .iter()
        .map(|glyph| regex::escape(glyph))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        "(?:{alternation})\\x{{{:X}}}?",
        VARIATION_SELECTOR_16 as u32
    );
    Ok(Regex::new(&pattern)?)
}
