//! Stable exit codes for the `demoji` CLI.

/// Run completed. Individual file failures do not change the exit code.
pub const OK: i32 = 0;
/// Run could not start: invalid arguments, config, or an unreadable root.
pub const INVALID: i32 = 1;
