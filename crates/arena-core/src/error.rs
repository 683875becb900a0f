//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `ArenaError` as one
//! variant where they need to surface configuration problems.

use thiserror::Error;

/// The base error type for `arena-core`.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("unknown creature kind tag {0}")]
    UnknownKind(i64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `arena-core`.
pub type ArenaResult<T> = Result<T, ArenaError>;
