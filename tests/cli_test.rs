use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn sumlog(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sumlog"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sumlog")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn sum_prints_result() {
    let out = sumlog(&["sum", "1", "2"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "3\n");
}

#[test]
fn sum_handles_negative_operands() {
    let out = sumlog(&["sum", "-1", "-2"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "-3\n");

    let out = sumlog(&["sum", "-1", "2"]);
    assert_eq!(stdout(&out), "1\n");
}

#[test]
fn sum_rejects_non_numeric_operand() {
    let out = sumlog(&["sum", "one", "2"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("'one'"));
}

#[test]
fn log_echoes_message_verbatim() {
    let out = sumlog(&["log", "!@#$%^&*()"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "!@#$%^&*()\n");
}

#[test]
fn log_accepts_empty_message() {
    let out = sumlog(&["log", ""]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "\n");
}

#[test]
fn diagnostics_stay_off_stdout() {
    let out = sumlog(&["--verbose", "sum", "0", "0"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0\n");
    assert!(!out.stderr.is_empty());
}

#[test]
fn invalid_settings_file_fails_before_running() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevel = \"loud\"").unwrap();

    let out = sumlog(&["--config", file.path().to_str().unwrap(), "log", "hi"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn overflowing_operand_is_reported_as_typed() {
    let out = sumlog(&["sum", "1e400", "1"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("'1e400'"), "stderr was: {}", stderr);
    assert!(!stderr.contains("'inf'"));
}

#[test]
fn log_writes_control_characters_untouched() {
    let out = sumlog(&["log", "a\tb"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"a\tb\n");
}
