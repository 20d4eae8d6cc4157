use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const BANNER: &str = "Client: Using the proxy to request service...";
const CHECKING: &str = "Proxy: Checking access...";
const HANDLING: &str = "RealSubject: Handling request...";
const LOGGED: &str = "Proxy: Logging access...";
const DENIED: &str = "Proxy: Access denied.";

fn run_client(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_access-proxy"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run access-proxy")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_default_run_prints_banner_then_success_sequence() {
    let output = run_client(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec![BANNER, CHECKING, HANDLING, LOGGED]);
}

#[test]
fn test_deny_flag_prints_only_check_and_denial() {
    let output = run_client(&["--deny"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec![BANNER, CHECKING, DENIED]);
}

#[test]
fn test_repeat_prints_banner_once() {
    let output = run_client(&["--repeat", "2"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_lines(&output),
        vec![BANNER, CHECKING, HANDLING, LOGGED, CHECKING, HANDLING, LOGGED]
    );
}

#[test]
fn test_allow_flag_reopens_denying_config() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[access]\nallow = false\n").unwrap();
    let path = file.path().to_str().unwrap();

    let denied = run_client(&["--config", path]);
    assert_eq!(stdout_lines(&denied), vec![BANNER, CHECKING, DENIED]);

    let allowed = run_client(&["--config", path, "--allow"]);
    assert_eq!(stdout_lines(&allowed), vec![BANNER, CHECKING, HANDLING, LOGGED]);
}

#[test]
fn test_unreadable_config_exits_with_io_code() {
    let output = run_client(&["--config", "/nonexistent/access-proxy.toml"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_configuration_exits_with_config_code() {
    let output = run_client(&["--repeat", "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_config_file_exits_with_config_code() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"access = [").unwrap();

    let output = run_client(&["--config", file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
}
