//! Integration tests for command classification

use git_safety_guard::{CommandClassifier, Decision};

fn classify(command: &str) -> Decision {
    CommandClassifier::shared().unwrap().classify(command)
}

fn is_allowed(command: &str) -> bool {
    classify(command).is_allow()
}

fn reason_for(command: &str) -> String {
    let decision = classify(command);
    assert!(decision.is_deny(), "expected deny for: {}", command);
    decision.reason().to_string()
}

// ============================================================================
// Safe patterns
// ============================================================================

#[test]
fn test_branch_creation_allowed() {
    assert!(is_allowed("git checkout -b feature/x"));
    assert!(is_allowed("git checkout --orphan gh-pages"));
}

#[test]
fn test_unstage_allowed() {
    assert!(is_allowed("git restore --staged src/lib.rs"));
    assert!(is_allowed("git restore --staged ."));
}

#[test]
fn test_clean_dry_run_allowed() {
    assert!(is_allowed("git clean -n"));
    assert!(is_allowed("git clean -nd"));
    assert!(is_allowed("git clean --dry-run -f"));
}

#[test]
fn test_clean_dry_run_flag_first_allowed() {
    // "-n" leads the cluster, so the literal safe pattern matches
    assert!(is_allowed("git clean -nf"));
}

#[test]
fn test_temp_cleanup_allowed() {
    assert!(is_allowed("rm -rf /tmp/build-cache"));
    assert!(is_allowed("rm -rf /var/tmp/session"));
    assert!(is_allowed("rm -rf $TMPDIR/scratch"));
    assert!(is_allowed("rm -rf ${TMPDIR}/scratch"));
}

#[test]
fn test_safe_pattern_beats_destructive_in_same_command() {
    assert!(is_allowed("rm -rf /tmp/x && rm -rf ./build"));
}

// ============================================================================
// Destructive patterns
// ============================================================================

#[test]
fn test_checkout_discard_blocked() {
    assert_eq!(
        reason_for("git checkout -- src/main.rs"),
        "Permanently discards uncommitted changes to tracked files"
    );
    assert_eq!(
        reason_for("git checkout ."),
        "Discards all uncommitted changes in current directory"
    );
    assert_eq!(
        reason_for("git checkout . && git status"),
        "Discards all uncommitted changes in current directory"
    );
}

#[test]
fn test_restore_blocked() {
    assert_eq!(
        reason_for("git restore src/main.rs"),
        "Discards uncommitted changes (use --staged to only unstage)"
    );
    assert_eq!(
        reason_for("git restore --worktree ."),
        "Discards uncommitted changes (use --staged to only unstage)"
    );
}

#[test]
fn test_reset_blocked() {
    assert_eq!(
        reason_for("git reset --hard HEAD~1"),
        "Destroys all uncommitted modifications and staging"
    );
    assert_eq!(
        reason_for("git reset --merge"),
        "Can destroy uncommitted changes during merge"
    );
}

#[test]
fn test_clean_force_blocked() {
    assert_eq!(reason_for("git clean -f"), "Permanently removes untracked files");
    assert_eq!(reason_for("git clean -fdx"), "Permanently removes untracked files");
    assert_eq!(reason_for("git clean --force"), "Permanently removes untracked files");
    // "-n" not leading the cluster is not the literal dry-run form
    assert_eq!(reason_for("git clean -fdn"), "Permanently removes untracked files");
}

#[test]
fn test_force_push_blocked() {
    let reason = "Rewrites remote history, potentially destroying work";
    assert_eq!(reason_for("git push --force origin main"), reason);
    assert_eq!(reason_for("git push -f"), reason);
    assert_eq!(reason_for("git push --force-with-lease origin feature"), reason);
    assert_eq!(reason_for("git push origin +main"), reason);
}

#[test]
fn test_branch_force_delete_blocked() {
    assert_eq!(
        reason_for("git branch -D old-feature"),
        "Force-deletes branch bypassing merge safety checks"
    );
    // Matching is case-insensitive throughout, lowercase -d included
    assert!(!is_allowed("git branch -d merged-feature"));
}

#[test]
fn test_stash_loss_blocked() {
    assert_eq!(reason_for("git stash drop stash@{0}"), "Permanently loses stashed changes");
    assert_eq!(reason_for("git stash clear"), "Permanently loses ALL stashed changes");
}

#[test]
fn test_rm_rf_blocked() {
    assert_eq!(
        reason_for("rm -rf ./build"),
        "Recursive forced deletion - extremely dangerous"
    );
    assert_eq!(
        reason_for("rm -rf src"),
        "Recursive forced deletion - extremely dangerous"
    );
    assert_eq!(
        reason_for("rm -rf /"),
        "Recursive forced deletion outside temp directories"
    );
    assert_eq!(
        reason_for("rm -rf /home/user/project"),
        "Recursive forced deletion outside temp directories"
    );
}

#[test]
fn test_case_insensitive() {
    assert!(!is_allowed("GIT RESET --HARD"));
    assert!(!is_allowed("Git Stash Clear"));
    assert!(is_allowed("GIT CHECKOUT -B feature"));
}

#[test]
fn test_embedded_in_compound_command() {
    assert_eq!(
        reason_for("cd repo && git reset --hard origin/main"),
        "Destroys all uncommitted modifications and staging"
    );
    assert_eq!(
        reason_for("make clean; git stash clear"),
        "Permanently loses ALL stashed changes"
    );
}

#[test]
fn test_first_rule_reason_reported() {
    // matches git-reset-hard and git-push-force; the earlier rule wins
    assert_eq!(
        reason_for("git push -f && git reset --hard"),
        "Destroys all uncommitted modifications and staging"
    );
}

// ============================================================================
// Default permit
// ============================================================================

#[test]
fn test_ordinary_commands_allowed() {
    assert!(is_allowed("ls -la"));
    assert!(is_allowed("git status"));
    assert!(is_allowed("git checkout main"));
    assert!(is_allowed("git reset --soft HEAD~1"));
    assert!(is_allowed("git push origin main"));
    assert!(is_allowed("git push -u origin feature"));
    assert!(is_allowed("git stash list"));
    assert!(is_allowed("cargo build --release"));
}

#[test]
fn test_rm_rf_unmatched_targets_allowed() {
    // variable targets and bare temp roots fall through both tables
    assert!(is_allowed("rm -rf $HOME/cache"));
    assert!(is_allowed("rm -rf /tmp"));
    assert!(is_allowed("rm -r build"));
}

#[test]
fn test_megabyte_command_still_checked() {
    let padded = format!("echo {} ; rm -rf /etc", "a".repeat(1_000_000));
    assert_eq!(classify(&padded).rule_id(), Some("rm-rf-absolute"));

    let repeated = format!("{}; rm -rf /etc", "rm -rf /tmp ".repeat(200_000));
    assert_eq!(classify(&repeated).rule_id(), Some("rm-rf-absolute"));

    let restore = format!("{} && git restore src/lib.rs", "x".repeat(1_000_000));
    assert_eq!(classify(&restore).rule_id(), Some("git-restore"));
}

#[test]
fn test_classification_is_idempotent() {
    for cmd in ["git reset --hard", "ls", "rm -rf /tmp/x", "git clean -fdn"] {
        assert_eq!(classify(cmd), classify(cmd), "command: {}", cmd);
    }
}
