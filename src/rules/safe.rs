//! Safe command patterns
//!
//! Known-safe forms of otherwise destructive command families. A match here
//! permits the command without consulting the destructive table.

use crate::rules::SafeRule;

pub const SAFE_RULES: &[SafeRule] = &[
    // Branch creation
    SafeRule::new("git-checkout-new-branch", r"git checkout -b"),
    SafeRule::new("git-checkout-orphan", r"git checkout --orphan"),
    // Unstage without touching the working tree
    SafeRule::new("git-restore-staged", r"git restore --staged"),
    // Dry-run clean
    SafeRule::new("git-clean-dry-run-short", r"git clean -n"),
    SafeRule::new("git-clean-dry-run", r"git clean --dry-run"),
    // Temp directory cleanup
    SafeRule::new("rm-rf-tmp", r"rm -rf /tmp/"),
    SafeRule::new("rm-rf-var-tmp", r"rm -rf /var/tmp/"),
    SafeRule::new("rm-rf-tmpdir", r"rm -rf \$TMPDIR/"),
    SafeRule::new("rm-rf-tmpdir-braced", r"rm -rf \$\{TMPDIR"),
];
