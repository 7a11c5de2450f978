//! Input parsing for Claude Code hook JSON format
//!
//! Parses the JSON input from stdin that Claude Code sends to hooks. Only
//! `tool_name` and `tool_input.command` matter; everything else is ignored.

use serde::Deserialize;

use crate::error::GuardError;

/// Tool name of the shell-execution tool
pub const SHELL_TOOL: &str = "Bash";

/// Main input structure from Claude Code hooks
#[derive(Debug, Deserialize)]
pub struct HookInput {
    /// Name of the tool being invoked (e.g., "Bash", "Read", "Edit")
    #[serde(default)]
    pub tool_name: Option<String>,

    /// Tool-specific input parameters, kept raw until the tool is known
    #[serde(default)]
    pub tool_input: Option<serde_json::Value>,

    /// Optional session identifier
    #[serde(default)]
    pub session_id: Option<String>,

    /// Hook event name (e.g., "PreToolUse")
    #[serde(default)]
    pub hook_event_name: Option<String>,
}

impl HookInput {
    /// Parse input from JSON string
    pub fn from_json(json: &str) -> Result<Self, GuardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Tool name, empty when absent
    pub fn tool(&self) -> &str {
        self.tool_name.as_deref().unwrap_or("")
    }

    /// Whether this request is for the shell tool
    pub fn is_shell_tool(&self) -> bool {
        self.tool() == SHELL_TOOL
    }

    /// Extract `tool_input.command`
    pub fn command(&self) -> Result<&str, GuardError> {
        let tool_input = self
            .tool_input
            .as_ref()
            .ok_or(GuardError::Shape("tool_input is missing"))?;

        let fields = tool_input
            .as_object()
            .ok_or(GuardError::Shape("tool_input is not an object"))?;

        fields
            .get("command")
            .ok_or(GuardError::Shape("tool_input.command is missing"))?
            .as_str()
            .ok_or(GuardError::Shape("tool_input.command is not a string"))
    }

    /// Get a summary of the input for logging
    pub fn summary(&self) -> String {
        match self.command() {
            Ok(command) if self.is_shell_tool() => {
                let truncated: String = command.chars().take(100).collect();
                if truncated.len() < command.len() {
                    format!("{}: {}...", SHELL_TOOL, truncated)
                } else {
                    format!("{}: {}", SHELL_TOOL, truncated)
                }
            }
            _ => format!("Tool: {}", self.tool()),
        }
    }
}
