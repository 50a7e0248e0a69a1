//! End-to-end checks of the hook binary's stdin/exit-code contract.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::json;
use tempfile::TempDir;

/// Run the hook with `stdin` as payload. TMPDIR points at `tmp` so the
/// diagnostic log lands in the test's own directory.
fn run_hook(tmp: &Path, stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wsl-guard"))
        .env("TMPDIR", tmp)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn wsl-guard");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin)
        .expect("write payload");

    child.wait_with_output().expect("wait for wsl-guard")
}

fn bash(command: &str) -> Vec<u8> {
    json!({ "tool": "Bash", "params": { "command": command } })
        .to_string()
        .into_bytes()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn non_bash_tools_are_allowed() {
    let tmp = TempDir::new().unwrap();
    for tool in ["Read", "Write", "bash", ""] {
        let payload = json!({ "tool": tool, "params": { "command": "pnpm test 2>&1 | tail" } });
        let output = run_hook(tmp.path(), payload.to_string().as_bytes());
        assert_eq!(output.status.code(), Some(0), "tool {tool:?}");
        assert!(output.stderr.is_empty());
    }
}

#[test]
fn stderr_redirect_is_blocked() {
    let tmp = TempDir::new().unwrap();
    let output = run_hook(tmp.path(), &bash("pnpm test 2>&1"));
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("BLOCKED"));
    assert!(err.contains("Command: pnpm test 2>&1"));
}

#[test]
fn pipe_is_blocked() {
    let tmp = TempDir::new().unwrap();
    let output = run_hook(tmp.path(), &bash("npm run build | tail"));
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("npm run build | tail"));
}

#[test]
fn pnpm_test_separator_is_blocked() {
    let tmp = TempDir::new().unwrap();
    let output = run_hook(tmp.path(), &bash("pnpm test utils -- --coverage"));
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn plain_commands_are_allowed() {
    let tmp = TempDir::new().unwrap();
    for command in ["pnpm test", "npm run build", "git log | head", ""] {
        let output = run_hook(tmp.path(), &bash(command));
        assert_eq!(output.status.code(), Some(0), "command {command:?}");
        assert!(output.stderr.is_empty());
    }
}

#[test]
fn malformed_input_fails_open() {
    let tmp = TempDir::new().unwrap();
    let output = run_hook(tmp.path(), b"this is not json");
    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.starts_with("Hook: Failed to parse JSON:"));
    assert!(!err.contains("panicked"));
}

#[test]
fn array_payload_fails_open() {
    let tmp = TempDir::new().unwrap();
    let output = run_hook(tmp.path(), br#"["Bash", {"command": "pnpm test 2>&1"}]"#);
    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.starts_with("Hook: Failed to parse JSON:"));
    assert!(!err.contains("BLOCKED"));
}

#[test]
fn duplicate_tool_key_uses_last_value() {
    let tmp = TempDir::new().unwrap();
    let payload = br#"{"tool":"Read","params":{"command":"npm run build | tail"},"tool":"Bash"}"#;
    let output = run_hook(tmp.path(), payload);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn empty_input_fails_open() {
    let tmp = TempDir::new().unwrap();
    let output = run_hook(tmp.path(), b"");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn diagnostic_log_records_input_and_errors() {
    let tmp = TempDir::new().unwrap();
    run_hook(tmp.path(), &bash("pnpm test"));
    run_hook(tmp.path(), b"{broken");

    let log = std::fs::read_to_string(tmp.path().join("hook_debug.log")).unwrap();
    assert!(log.contains("Received hook input"));
    assert!(log.contains("pnpm test"));
    assert!(log.contains("Undecodable hook input"));
    assert!(log.contains("{broken"));
}
