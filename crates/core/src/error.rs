//! Error types for the swatch color core.

use thiserror::Error;

/// Errors produced by color operations.
///
/// Parsing is the only fallible path in the core: conversions and
/// formatting are total functions over already-validated values.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A color string did not match any recognized notation, or a
    /// component was out of its syntactic shape (wrong hex digit count,
    /// non-numeric component).
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An output format name was not one of the recognized formats.
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
}
