//! Logging and verbosity tests.

use crate::support::*;

#[test]
fn test_default_logs_each_publish() {
    let t = Test::with_secrets(SIMPLE_YAML);

    let output = t.dry_run(&[]);
    assert_success(&output);
    let err = stderr(&output);
    assert!(err.contains("publishing secret"), "got: {}", err);
    assert!(!err.contains("DEBUG"), "default mode should not show debug output");
}

#[test]
fn test_verbose_flag_shows_debug_output() {
    let t = Test::with_secrets(SIMPLE_YAML);

    let output = t.dry_run(&["--verbose"]);
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
    assert_stderr_contains(&output, "secrets compiled");
}

#[test]
fn test_log_env_var_overrides_filter() {
    let t = Test::with_secrets(SIMPLE_YAML);

    let output = t
        .cmd()
        .env("SECRET_PUSHER_LOG", "error")
        .args(["--dry-run", "--verbose"])
        .output()
        .unwrap();
    assert_success(&output);
    let err = stderr(&output);
    assert!(!err.contains("publishing secret"), "got: {}", err);
    assert!(!err.contains("DEBUG"), "got: {}", err);
}

#[test]
fn test_root_path_warns() {
    let t = Test::with_secrets(SIMPLE_YAML);

    let output = t.dry_run(&[]);
    assert_success(&output);
    assert_stderr_contains(&output, "empty path");
}
