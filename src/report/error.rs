//! Error types for pattern compilation

use thiserror::Error;

/// Errors related to pattern compilation.
///
/// This is the only failure the tool distinguishes. Everything else — zero
/// matches, zero groups, an empty test list — is a normal outcome.
#[derive(Error, Debug)]
pub enum PatternError {
    /// The pattern is not valid under the engine's regex dialect.
    ///
    /// Carries the engine diagnostic verbatim; callers needing finer
    /// categories must derive them from the message text.
    #[error("invalid pattern: {0}")]
    CompileFailed(#[from] regex::Error),
}
