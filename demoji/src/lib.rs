//! Strip emoji from Markdown documentation, keeping a backup of every file.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (replacement tables, removal
//!   strategies, whitespace rules, run summaries). No I/O.
//! - **[`io`]**: Side-effecting operations (config, discovery, backup and
//!   atomic overwrite).
//!
//! Orchestration modules ([`clean`], [`restore`]) combine the two to implement
//! CLI commands; [`report`] renders their results.

pub mod clean;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
pub mod restore;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
