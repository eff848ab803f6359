//! Cross-cutting error types.
//!
//! Transport and service errors live in `auras-client` and `auras-services`;
//! this module only covers failures that can happen while handling wire
//! values on their own.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name any variant of a wire enum.
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },

    /// The OS random source could not produce an identifier.
    #[error("failed to generate id: {0}")]
    IdGeneration(String),
}
