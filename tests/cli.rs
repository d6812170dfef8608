//! End-to-end runs of the `opn` binary against a throwaway home directory.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn opn(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_opn"))
        .args(args)
        .env("OPN_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

fn stderr(out: &Output) -> String {
    String::from_utf8(out.stderr.clone()).unwrap()
}

fn rc(home: &Path) -> String {
    std::fs::read_to_string(home.join(".opnrc")).unwrap()
}

#[test]
fn test_no_arguments_prints_guidance() {
    let home = TempDir::new().unwrap();
    let out = opn(home.path(), &[]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("opn help"));
}

#[test]
fn test_add_and_list() {
    let home = TempDir::new().unwrap();
    assert!(opn(home.path(), &["add", "zed", "/opt/zed"]).status.success());
    assert!(opn(home.path(), &["a", "alpha", "/opt/alpha"]).status.success());

    let out = opn(home.path(), &["list"]);
    assert!(out.status.success());
    insta::assert_snapshot!(stdout(&out), @r"
    alpha
    zed
    ");

    let out = opn(home.path(), &["l", "--long"]);
    insta::assert_snapshot!(stdout(&out), @r"
    alpha=/opt/alpha
    zed=/opt/zed
    ");
    assert_eq!(rc(home.path()), "zed=/opt/zed\nalpha=/opt/alpha\n");
}

#[test]
fn test_add_missing_path_is_not_an_error() {
    let home = TempDir::new().unwrap();
    let out = opn(home.path(), &["add", "foo"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("both an alias and a path"));
    assert_eq!(rc(home.path()), "");
}

#[test]
fn test_add_invalid_name_fails() {
    let home = TempDir::new().unwrap();
    let out = opn(home.path(), &["add", "a=b", "/x"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("must not contain '='"));
    assert_eq!(rc(home.path()), "");
}

#[test]
fn test_list_empty_store() {
    let home = TempDir::new().unwrap();
    let out = opn(home.path(), &["list"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "");
    assert!(stderr(&out).contains("No aliases saved yet"));
    assert!(home.path().join(".opnrc").exists());
}

#[test]
fn test_list_skips_malformed_lines() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join(".opnrc"), "good=/g\nbroken line\n").unwrap();

    let out = opn(home.path(), &["list"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "good\n");
    assert!(stderr(&out).contains("skipping malformed line"));
}

#[test]
fn test_open_unknown_alias() {
    let home = TempDir::new().unwrap();
    let out = opn(home.path(), &["bar"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("alias 'bar' not found"));
}

#[test]
fn test_duplicates_rejected_when_configured() {
    let home = TempDir::new().unwrap();
    assert!(opn(home.path(), &["config", "set", "add.duplicates", "reject"]).status.success());
    assert!(opn(home.path(), &["add", "foo", "/a"]).status.success());

    let out = opn(home.path(), &["add", "foo", "/b"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("alias 'foo' already exists"));
    assert_eq!(rc(home.path()), "foo=/a\n");
}

#[test]
fn test_config_get_and_path() {
    let home = TempDir::new().unwrap();
    let out = opn(home.path(), &["config", "get", "add.duplicates"]);
    assert_eq!(stdout(&out), "shadow\n");

    let out = opn(home.path(), &["config", "path"]);
    let expected = home.path().join(".config").join("opn").join("config.toml");
    assert_eq!(stdout(&out).trim_end(), expected.display().to_string());
}

#[cfg(unix)]
#[test]
fn test_open_runs_configured_command_and_propagates_status() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("opened");
    let command = format!("sh -c 'printf %s \"$1\" > {}; exit 3' sh", log.display());
    assert!(opn(home.path(), &["config", "set", "open.command", &command]).status.success());

    assert!(opn(home.path(), &["add", "foo", "/bin/foo"]).status.success());
    assert_eq!(stdout(&opn(home.path(), &["list"])), "foo\n");

    let out = opn(home.path(), &["foo"]);
    assert_eq!(out.status.code(), Some(3));
    assert_eq!(std::fs::read_to_string(&log).unwrap(), "/bin/foo");

    let out = opn(home.path(), &["open", "foo"]);
    assert_eq!(out.status.code(), Some(3));
}
