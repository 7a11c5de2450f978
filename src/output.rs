//! Output formatting for Claude Code hook responses
//!
//! Only denials produce output; an allowed command gets an empty stdout.

use serde::Serialize;

/// Provenance tag at the top of every denial message
pub const PROVENANCE: &str = "BLOCKED by git-safety-guard";

/// Closing guidance in every denial message
pub const GUIDANCE: &str =
    "If you really need to run this command, ask the user for explicit permission.";

/// Main output structure for Claude Code hooks
#[derive(Debug, Serialize)]
pub struct HookOutput {
    /// Hook-specific output containing the permission decision
    #[serde(rename = "hookSpecificOutput")]
    pub hook_specific_output: HookSpecificOutput,
}

/// Hook-specific output with permission decision
#[derive(Debug, Serialize)]
pub struct HookSpecificOutput {
    /// The hook event name, always "PreToolUse"
    #[serde(rename = "hookEventName")]
    pub hook_event_name: String,

    /// Permission decision, always "deny"
    #[serde(rename = "permissionDecision")]
    pub permission_decision: String,

    /// Explanation shown to the assistant
    #[serde(rename = "permissionDecisionReason")]
    pub permission_decision_reason: String,
}

/// Decision result from the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Allow the command
    Allow { reason: String },

    /// Deny the command
    Deny { rule_id: String, reason: String },
}

impl Decision {
    /// Create an allow decision
    pub fn allow(reason: impl Into<String>) -> Self {
        Decision::Allow {
            reason: reason.into(),
        }
    }

    /// Create a deny decision
    pub fn deny(rule_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Decision::Deny {
            rule_id: rule_id.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is an allow decision
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow { .. })
    }

    /// Check if this is a deny decision
    pub fn is_deny(&self) -> bool {
        matches!(self, Decision::Deny { .. })
    }

    /// Get the rule ID if applicable
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            Decision::Allow { .. } => None,
            Decision::Deny { rule_id, .. } => Some(rule_id),
        }
    }

    /// Get the reason
    pub fn reason(&self) -> &str {
        match self {
            Decision::Allow { reason } => reason,
            Decision::Deny { reason, .. } => reason,
        }
    }
}

impl HookOutput {
    /// Create a deny response for `command`
    pub fn deny(command: &str, reason: &str) -> Self {
        HookOutput {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: "PreToolUse".to_string(),
                permission_decision: "deny".to_string(),
                permission_decision_reason: format!(
                    "{}\n\nReason: {}\n\nCommand: {}\n\n{}",
                    PROVENANCE, reason, command, GUIDANCE
                ),
            },
        }
    }

    /// Create output from a Decision; allowed commands produce none
    pub fn from_decision(command: &str, decision: &Decision) -> Option<Self> {
        match decision {
            Decision::Allow { .. } => None,
            Decision::Deny { reason, .. } => Some(HookOutput::deny(command, reason)),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
