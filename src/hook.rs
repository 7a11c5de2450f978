//! Request adapter
//!
//! Turns one raw hook request into at most one response. Every failure on the
//! way degrades to "permit, no output": a bug in the guard must never block a
//! legitimate command.

use std::panic::{self, AssertUnwindSafe};

use crate::engine::CommandClassifier;
use crate::error::GuardError;
use crate::input::HookInput;
use crate::output::{Decision, HookOutput};

/// Process exit status for every outcome; the JSON payload carries the denial
pub const EXIT_PERMIT: i32 = 0;

/// What the adapter found in a well-formed request
#[derive(Debug)]
pub enum Evaluation {
    /// Blank input
    Empty,

    /// Request for a tool other than the shell
    OtherTool(HookInput),

    /// Shell request with an empty command
    EmptyCommand(HookInput),

    /// Shell command that went through the classifier
    Classified {
        input: HookInput,
        command: String,
        decision: Decision,
    },
}

/// Result of handling one request
#[derive(Debug)]
pub struct HookResponse {
    /// How far the request got, or why it was abandoned
    pub evaluation: Result<Evaluation, GuardError>,

    /// Payload for stdout, present only for a denied shell command
    pub output: Option<HookOutput>,
}

impl HookResponse {
    /// Exit status to report to the host
    pub fn exit_code(&self) -> i32 {
        EXIT_PERMIT
    }

    /// Whether the command was blocked
    pub fn is_deny(&self) -> bool {
        self.output.is_some()
    }

    /// The error that forced the permit outcome, if any
    pub fn error(&self) -> Option<&GuardError> {
        self.evaluation.as_ref().err()
    }
}

/// Handle one raw request with the built-in rules
pub fn handle(raw: &[u8]) -> HookResponse {
    respond(raw, |command| Ok(CommandClassifier::shared()?.classify(command)))
}

/// Handle one raw request with a caller-supplied classifier
pub fn respond<F>(raw: &[u8], classify: F) -> HookResponse
where
    F: Fn(&str) -> Result<Decision, GuardError>,
{
    let evaluation = panic::catch_unwind(AssertUnwindSafe(|| evaluate(raw, &classify)))
        .unwrap_or_else(|payload| Err(GuardError::Internal(panic_message(payload.as_ref()))));

    let output = match &evaluation {
        Ok(Evaluation::Classified {
            command, decision, ..
        }) => HookOutput::from_decision(command, decision),
        _ => None,
    };

    HookResponse { evaluation, output }
}

fn evaluate<F>(raw: &[u8], classify: &F) -> Result<Evaluation, GuardError>
where
    F: Fn(&str) -> Result<Decision, GuardError>,
{
    let text = std::str::from_utf8(raw)?;
    if text.trim().is_empty() {
        return Ok(Evaluation::Empty);
    }

    let input = HookInput::from_json(text)?;
    if !input.is_shell_tool() {
        return Ok(Evaluation::OtherTool(input));
    }

    let command = input.command()?.to_string();
    if command.is_empty() {
        return Ok(Evaluation::EmptyCommand(input));
    }

    let decision = classify(&command)?;
    Ok(Evaluation::Classified {
        input,
        command,
        decision,
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
