//! End-to-end checks of `crew set-team` exit behavior.
//!
//! Targets point at an unreachable address so nothing leaves the machine.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const CONFIG: &str = r#"
default_target = "ci"

[targets.ci]
api = "http://127.0.0.1:1"
token = "test-token"
timeout_secs = 5
"#;

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("crew.toml"), CONFIG).expect("write config");
    dir
}

fn crew(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crew"))
        .current_dir(dir)
        .arg("--config")
        .arg(dir.join("crew.toml"))
        .args(args)
        .env_remove("CREW_LOG")
        .env_remove("CREW_DEFAULT_TARGET")
        .stdin(Stdio::null())
        .output()
        .expect("crew runs")
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn unsafe_configuration_exits_nonzero_with_remediation() {
    let dir = workspace();
    let output = crew(dir.path(), &["set-team", "-n", "ops", "--non-interactive"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(text(&output.stdout), "");

    let stderr = text(&output.stderr);
    assert!(stderr.contains("no auth methods configured! to continue, run:"));
    assert!(stderr.contains("crew -t ci set-team -n ops --no-really-i-dont-want-any-auth"));
    assert!(!stderr.contains("crew error:"));
}

#[test]
fn malformed_flag_fails_before_anything_is_shown() {
    let dir = workspace();
    let output = crew(
        dir.path(),
        &["set-team", "-n", "ops", "--github-team", "acme", "--non-interactive"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(text(&output.stdout), "");
    assert!(text(&output.stderr).contains("--github-team"));
}

#[test]
fn non_interactive_previews_then_surfaces_transport_failure() {
    let dir = workspace();
    let output = crew(
        dir.path(),
        &["set-team", "-n", "ops", "--github-user", "alice", "--non-interactive"],
    );

    assert_eq!(output.status.code(), Some(1));

    let stdout = text(&output.stdout);
    assert!(stdout.starts_with("Team Name: ops\n"));
    assert!(stdout.contains("Users:\n- github:alice\n"));
    assert!(stdout.contains("Groups:\n- none\n"));
    assert!(!stdout.contains("team created"));
    assert!(!stdout.contains("team updated"));

    let stderr = text(&output.stderr);
    assert!(stderr.contains("crew error: request failed"));
    assert!(!stderr.contains("apply configuration?"));
}

#[test]
fn interactive_without_terminal_does_not_submit() {
    let dir = workspace();
    let output = crew(dir.path(), &["set-team", "-n", "ops", "--github-user", "alice"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = text(&output.stderr);
    assert!(stderr.contains("could not confirm"));
    assert!(!stderr.contains("request failed"));
}

#[test]
fn unknown_target_is_reported() {
    let dir = workspace();
    let output = crew(
        dir.path(),
        &["-t", "prod", "set-team", "-n", "ops", "--github-user", "alice"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(text(&output.stderr).contains("unknown target 'prod'"));
}
