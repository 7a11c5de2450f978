//! Integration tests for git-safety-guard

mod classifier_tests;
