//! Destructive command patterns
//!
//! Order matters: when a command matches several rules, the first one in
//! this table supplies the reason.

use crate::rules::Rule;

pub const DESTRUCTIVE_RULES: &[Rule] = &[
    // Discarding uncommitted changes
    Rule::new(
        "git-checkout-dashdash",
        r"git checkout --\s",
        "Permanently discards uncommitted changes to tracked files",
    ),
    Rule::new(
        "git-checkout-dot",
        r"git checkout\s+\.(?:\s*$|\s*[;&|])",
        "Discards all uncommitted changes in current directory",
    ),
    // One whitespace is enough: a longer run always leaves a position
    // that is not followed by --staged
    Rule::excluding(
        "git-restore",
        r"git restore\s",
        "--staged",
        "Discards uncommitted changes (use --staged to only unstage)",
    ),
    // Resets
    Rule::new(
        "git-reset-hard",
        r"git reset --hard",
        "Destroys all uncommitted modifications and staging",
    ),
    Rule::new(
        "git-reset-merge",
        r"git reset --merge",
        "Can destroy uncommitted changes during merge",
    ),
    // -f, -xf, -df, -fd, --force; dry runs are caught by the safe table first
    Rule::new(
        "git-clean-force",
        r"git clean\b.*(?:-[a-z]*f|--force)",
        "Permanently removes untracked files",
    ),
    // --force, --force-with-lease, -f, and +refspec
    Rule::new(
        "git-push-force",
        r"git push\b.*(?:--force|-f\b|\+\w+)",
        "Rewrites remote history, potentially destroying work",
    ),
    Rule::new(
        "git-branch-force-delete",
        r"git branch -D",
        "Force-deletes branch bypassing merge safety checks",
    ),
    // Stash
    Rule::new(
        "git-stash-drop",
        r"git stash drop",
        "Permanently loses stashed changes",
    ),
    Rule::new(
        "git-stash-clear",
        r"git stash clear",
        "Permanently loses ALL stashed changes",
    ),
    // Filesystem; temp dirs are caught by the safe table first
    Rule::new(
        "rm-rf-relative",
        r"rm -rf\s+[^/\$]",
        "Recursive forced deletion - extremely dangerous",
    ),
    Rule::excluding(
        "rm-rf-absolute",
        r"rm -rf\s+/",
        "tmp|var/tmp",
        "Recursive forced deletion outside temp directories",
    ),
];
