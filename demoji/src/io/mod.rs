//! Filesystem helpers for cleaner commands.

pub mod config;
pub mod discover;
pub mod files;
