//! Tests for CLI argument parsing against the built binary.

use std::process::Command;

fn oynaiq_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_oynaiq"))
}

#[test]
fn test_help_lists_options() {
    let output = oynaiq_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--console"));
    assert!(stdout.contains("--log-level"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = oynaiq_cmd()
        .arg("--no-such-flag")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[matches]\ncapacity = 0\n").expect("write config");

    let output = oynaiq_cmd()
        .arg("--console")
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("capacity"));
}

#[test]
fn test_console_session_over_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let dir = tempfile::TempDir::new().expect("temp dir");
    let mut child = oynaiq_cmd()
        .arg("--console")
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .env_remove("OYNAIQ_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to spawn");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all("/start\ncb sport:basketball\n".as_bytes())
        .expect("write stdin");

    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[send]\n👋 Привет!"));
    assert!(stdout.contains("cb match:3"));
}
