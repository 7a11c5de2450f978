//! Pattern compilation
//!
//! Every rule runs on the linear-time `regex` engine. A rule that must not
//! match when certain text follows it carries an exclusion instead of a
//! look-ahead: each place the pattern matches, the exclusion is tried
//! anchored at the end of that match, and the rule fires if any one of those
//! places is not excluded.

use regex::{Regex, RegexBuilder};

use crate::error::GuardError;

/// A case-insensitive search pattern with an optional trailing exclusion
#[derive(Debug)]
pub struct CompiledPattern {
    regex: Regex,
    exclusion: Option<Regex>,
}

impl CompiledPattern {
    /// Compile `pattern` for rule `rule_id`
    pub fn compile(
        rule_id: &'static str,
        pattern: &str,
        not_followed_by: Option<&str>,
    ) -> Result<Self, GuardError> {
        let regex = build(rule_id, pattern)?;
        let exclusion = not_followed_by
            .map(|ex| build(rule_id, &format!("^(?:{})", ex)))
            .transpose()?;

        Ok(Self { regex, exclusion })
    }

    /// Search for the pattern anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        let Some(ref exclusion) = self.exclusion else {
            return self.regex.is_match(text);
        };

        // Every start position counts, not just non-overlapping matches
        let mut pos = 0;
        while let Some(m) = self.regex.find_at(text, pos) {
            if !exclusion.is_match(&text[m.end()..]) {
                return true;
            }
            let Some(next) = text[m.start()..].chars().next() else {
                break;
            };
            pos = m.start() + next.len_utf8();
        }
        false
    }

    /// Whether this pattern carries an exclusion
    pub fn has_exclusion(&self) -> bool {
        self.exclusion.is_some()
    }
}

fn build(rule_id: &'static str, source: &str) -> Result<Regex, GuardError> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|e| GuardError::Pattern {
            rule_id,
            message: e.to_string(),
        })
}
