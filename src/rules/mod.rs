//! Rule tables for git-safety-guard
//!
//! Two ordered tables: safe patterns that always pass, and destructive
//! patterns that block with a reason. Both are compiled into the binary.

pub mod destructive;
pub mod pattern;
pub mod safe;

/// A pattern that unconditionally permits a command
#[derive(Debug, Clone, Copy)]
pub struct SafeRule {
    /// Unique identifier for this rule
    pub id: &'static str,

    /// Regex pattern to search for
    pub pattern: &'static str,
}

impl SafeRule {
    /// Create a new safe rule
    pub const fn new(id: &'static str, pattern: &'static str) -> Self {
        Self { id, pattern }
    }
}

/// A pattern that blocks a command
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Unique identifier for this rule
    pub id: &'static str,

    /// Regex pattern to search for
    pub pattern: &'static str,

    /// Text that, found right where `pattern` ends, cancels that match
    pub not_followed_by: Option<&'static str>,

    /// Human-readable reason for blocking
    pub reason: &'static str,
}

impl Rule {
    /// Create a new destructive rule
    pub const fn new(id: &'static str, pattern: &'static str, reason: &'static str) -> Self {
        Self {
            id,
            pattern,
            not_followed_by: None,
            reason,
        }
    }

    /// Create a destructive rule that does not fire where `pattern` is
    /// immediately followed by `not_followed_by`
    pub const fn excluding(
        id: &'static str,
        pattern: &'static str,
        not_followed_by: &'static str,
        reason: &'static str,
    ) -> Self {
        Self {
            id,
            pattern,
            not_followed_by: Some(not_followed_by),
            reason,
        }
    }
}
