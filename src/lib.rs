//! git-safety-guard - PreToolUse hook that blocks destructive git and rm commands
//!
//! This library inspects one proposed shell command and decides whether an
//! agent may run it.
//!
//! # Features
//!
//! - **Safe patterns first**: known-safe forms (new branches, dry runs, temp
//!   directory cleanup) always pass
//! - **Destructive patterns**: ordered rules for discarding changes, hard
//!   resets, force pushes, stash loss and unscoped `rm -rf`
//! - **Fail-open adapter**: malformed or unexpected input never blocks a command
//! - **Audit logging**: optional JSONL log of all decisions
//!
//! # Example
//!
//! ```
//! use git_safety_guard::CommandClassifier;
//!
//! let classifier = CommandClassifier::new().unwrap();
//!
//! let decision = classifier.classify("git reset --hard HEAD~1");
//! assert!(decision.is_deny());
//!
//! let decision = classifier.classify("git checkout -b feature/x");
//! assert!(decision.is_allow());
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod error;
pub mod hook;
pub mod input;
pub mod output;
pub mod rules;

// Re-exports for convenience
pub use config::Config;
pub use engine::CommandClassifier;
pub use error::GuardError;
pub use hook::{handle, respond, Evaluation, HookResponse};
pub use input::HookInput;
pub use output::{Decision, HookOutput};
