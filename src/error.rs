//! Error taxonomy for the hook
//!
//! Every variant is recoverable: the adapter in [`crate::hook`] turns each of
//! them into the permit outcome.

#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    /// Raw hook input was not valid UTF-8
    #[error("hook input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Raw hook input was not valid JSON for the request model
    #[error("failed to parse hook input: {0}")]
    Parse(#[from] serde_json::Error),

    /// Request parsed but a field the hook needs is missing or mistyped
    #[error("unexpected hook input shape: {0}")]
    Shape(&'static str),

    /// A built-in rule failed to compile
    #[error("rule {rule_id} has an invalid pattern: {message}")]
    Pattern {
        rule_id: &'static str,
        message: String,
    },

    /// Anything else, including panics caught at the hook boundary
    #[error("internal error: {0}")]
    Internal(String),
}
