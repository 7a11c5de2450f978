//! Command classifier for git-safety-guard
//!
//! Runs the safe table, then the destructive table, first match wins in
//! each. Anything left over is allowed.

use crate::error::GuardError;
use crate::output::Decision;
use crate::rules::destructive::DESTRUCTIVE_RULES;
use crate::rules::pattern::CompiledPattern;
use crate::rules::safe::SAFE_RULES;
use crate::rules::{Rule, SafeRule};

use once_cell::sync::OnceCell;

static SHARED: OnceCell<CommandClassifier> = OnceCell::new();

/// Compiled rule tables
#[derive(Debug)]
pub struct CommandClassifier {
    safe: Vec<(SafeRule, CompiledPattern)>,
    destructive: Vec<(Rule, CompiledPattern)>,
}

impl CommandClassifier {
    /// Compile the built-in rule tables
    pub fn new() -> Result<Self, GuardError> {
        Self::from_rules(SAFE_RULES, DESTRUCTIVE_RULES)
    }

    /// Compile custom rule tables, keeping their order
    pub fn from_rules(safe: &[SafeRule], destructive: &[Rule]) -> Result<Self, GuardError> {
        let safe = safe
            .iter()
            .map(|rule| Ok((*rule, CompiledPattern::compile(rule.id, rule.pattern, None)?)))
            .collect::<Result<Vec<_>, GuardError>>()?;

        let destructive = destructive
            .iter()
            .map(|rule| {
                let pattern = CompiledPattern::compile(rule.id, rule.pattern, rule.not_followed_by)?;
                Ok((*rule, pattern))
            })
            .collect::<Result<Vec<_>, GuardError>>()?;

        Ok(Self { safe, destructive })
    }

    /// The process-wide classifier for the built-in tables, compiled on first use
    pub fn shared() -> Result<&'static CommandClassifier, GuardError> {
        SHARED.get_or_try_init(Self::new)
    }

    /// Classify a shell command
    pub fn classify(&self, command: &str) -> Decision {
        if let Some(rule) = self.match_safe(command) {
            return Decision::allow(format!("matched safe pattern {}", rule.id));
        }

        if let Some(rule) = self.match_destructive(command) {
            return Decision::deny(rule.id, rule.reason);
        }

        Decision::allow("no destructive pattern matched")
    }

    /// First safe rule matching `command`
    pub fn match_safe(&self, command: &str) -> Option<&SafeRule> {
        self.safe
            .iter()
            .find(|(_, pattern)| pattern.is_match(command))
            .map(|(rule, _)| rule)
    }

    /// First destructive rule matching `command`
    pub fn match_destructive(&self, command: &str) -> Option<&Rule> {
        self.destructive
            .iter()
            .find(|(_, pattern)| pattern.is_match(command))
            .map(|(rule, _)| rule)
    }

    /// Number of (safe, destructive) rules loaded
    pub fn rule_counts(&self) -> (usize, usize) {
        (self.safe.len(), self.destructive.len())
    }
}
