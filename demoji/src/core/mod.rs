//! Pure, deterministic cleaning logic. No I/O.

pub mod glyphs;
pub mod report;
pub mod strategy;
pub mod whitespace;
