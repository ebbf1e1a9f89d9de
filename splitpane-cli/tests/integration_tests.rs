//! Integration tests for the splitpane CLI
//!
//! These tests run the binary against a snapshot in a temporary directory
//! and check output, exit codes, and the persisted layout.

#![allow(clippy::uninlined_format_args)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Temporary config directory plus snapshot path
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn state_file(&self) -> PathBuf {
        self.dir.path().join("layout.json")
    }

    /// Runs the CLI with the workspace config and state
    fn run(&self, args: &[&str]) -> Output {
        run_cli(args, &self.config_dir(), &self.state_file())
    }

    /// Runs the CLI and asserts success
    fn ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "{:?} failed: {}",
            args,
            stderr_str(&output)
        );
        stdout_str(&output)
    }
}

/// Helper to run the CLI with given arguments
fn run_cli(args: &[&str], config_dir: &Path, state_file: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_splitpane"))
        .arg("--config")
        .arg(config_dir)
        .env("SPLITPANE_STATE", state_file)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

/// Helper to get stdout as string
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Helper to get stderr as string
fn stderr_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Builds `a | b` with `c` below `b`
fn three_panes(ws: &Workspace) {
    ws.ok(&["insert", "a", "b"]);
    ws.ok(&["insert", "a", "b"]);
    ws.ok(&["insert", "b", "c", "--axis", "vertical"]);
}

// ============================================================================
// Help Command Tests
// ============================================================================

#[test]
fn test_help_command() {
    let ws = Workspace::new();
    let stdout = ws.ok(&["--help"]);
    for command in ["show", "insert", "split", "remove", "navigate", "drag", "rects"] {
        assert!(stdout.contains(command), "Help should mention {}", command);
    }
}

// ============================================================================
// Edit Command Tests
// ============================================================================

#[test]
fn test_show_empty_layout() {
    let ws = Workspace::new();
    assert!(ws.ok(&["show"]).contains("(empty layout)"));
    assert_eq!(ws.ok(&["show", "--format", "json"]).trim(), "null");
}

#[test]
fn test_first_insert_bootstraps_target() {
    let ws = Workspace::new();
    assert!(ws.ok(&["insert", "a", "b"]).contains("Created layout with a"));
    assert_eq!(ws.ok(&["show", "--format", "json"]).trim(), "\"a\"");
    assert!(ws.state_file().exists());
}

#[test]
fn test_insert_and_show_tree() {
    let ws = Workspace::new();
    three_panes(&ws);
    let tree = ws.ok(&["show"]);
    assert!(tree.contains("horizontal 50%"));
    assert!(tree.contains("vertical 50%"));
    assert!(tree.contains('c'));
}

#[test]
fn test_insert_unknown_target_fails_with_code_2() {
    let ws = Workspace::new();
    ws.ok(&["insert", "a", "b"]);
    let output = ws.run(&["insert", "zzz", "b"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_str(&output).contains("Pane not found: zzz"));
}

#[test]
fn test_insert_duplicate_fails() {
    let ws = Workspace::new();
    three_panes(&ws);
    let output = ws.run(&["insert", "a", "c"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_str(&output).contains("already in layout"));
}

#[test]
fn test_invalid_pane_id_rejected_by_parser() {
    let ws = Workspace::new();
    let output = ws.run(&["insert", "a:left", "b"]);
    assert!(!output.status.success());
}

#[test]
fn test_split_prints_and_focuses_new_pane() {
    let ws = Workspace::new();
    ws.ok(&["insert", "a", "a"]);
    let new_id = ws.ok(&["split", "a", "--axis", "vertical"]);
    let new_id = new_id.trim();
    assert!(new_id.starts_with("split-"));
    assert_eq!(ws.ok(&["focus"]).trim(), new_id);
}

#[test]
fn test_remove_and_clear() {
    let ws = Workspace::new();
    three_panes(&ws);
    ws.ok(&["remove", "b"]);
    assert_eq!(ws.run(&["remove", "b"]).status.code(), Some(2));

    assert!(ws.ok(&["clear"]).contains("Removed 2 pane(s)"));
    assert!(ws.ok(&["show"]).contains("(empty layout)"));
}

#[test]
fn test_replace_and_resize() {
    let ws = Workspace::new();
    three_panes(&ws);
    ws.ok(&["replace", "c", "d"]);
    ws.ok(&["resize", "d", "25"]);

    let json = ws.ok(&["show", "--format", "json"]);
    assert!(json.contains("\"d\""));
    assert!(json.contains("25.0"));
    assert_eq!(ws.run(&["resize", "d", "140"]).status.code(), Some(1));
}

// ============================================================================
// Navigation and Drag Tests
// ============================================================================

#[test]
fn test_navigate() {
    let ws = Workspace::new();
    three_panes(&ws);
    assert_eq!(ws.ok(&["navigate", "a", "right"]).trim(), "b");
    assert_eq!(ws.ok(&["navigate", "b", "down"]).trim(), "c");
    assert_eq!(ws.ok(&["navigate", "c", "left"]).trim(), "a");

    let output = ws.run(&["navigate", "a", "left"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_drag_center_swaps() {
    let ws = Workspace::new();
    three_panes(&ws);
    assert!(ws.ok(&["drag", "a", "c:center"]).contains("Layout updated"));
    let json = ws.ok(&["show", "--format", "json"]);
    let root: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(root["before"], "b");
    assert_eq!(root["after"], "a");
}

#[test]
fn test_drag_self_is_noop() {
    let ws = Workspace::new();
    three_panes(&ws);
    assert!(ws.ok(&["drag", "a", "a:left"]).contains("No change"));
}

#[test]
fn test_rects_json() {
    let ws = Workspace::new();
    three_panes(&ws);
    let json = ws.ok(&["rects", "--format", "json"]);
    let rects: serde_json::Value = serde_json::from_str(&json).unwrap();
    let rects = rects.as_array().unwrap();
    assert_eq!(rects.len(), 3);
    assert_eq!(rects[2]["id"], "c");
    assert_eq!(rects[2]["y"], 0.5);
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_state_file_from_settings() {
    let ws = Workspace::new();
    let custom = ws.dir.path().join("custom.json");
    std::fs::create_dir_all(ws.config_dir()).unwrap();
    std::fs::write(
        ws.config_dir().join("settings.toml"),
        format!("[state]\nfile = {:?}\n", custom.display().to_string()),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_splitpane"))
        .arg("--config")
        .arg(ws.config_dir())
        .env_remove("SPLITPANE_STATE")
        .args(["insert", "a", "b"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr_str(&output));
    assert!(custom.exists());
}

#[test]
fn test_logging_file_from_settings() {
    let ws = Workspace::new();
    let log = ws.dir.path().join("splitpane.log");
    std::fs::create_dir_all(ws.config_dir()).unwrap();
    std::fs::write(
        ws.config_dir().join("settings.toml"),
        format!(
            "[logging]\nlevel = \"debug\"\nfile = {:?}\n",
            log.display().to_string()
        ),
    )
    .unwrap();

    let output = ws.run(&["insert", "a", "b"]);
    assert!(output.status.success(), "{}", stderr_str(&output));
    let written = std::fs::read_to_string(&log).unwrap();
    assert!(written.contains("Tracing initialized"));
    assert!(!stderr_str(&output).contains("Tracing initialized"));
}

#[test]
fn test_negative_tolerance_fails() {
    let ws = Workspace::new();
    std::fs::create_dir_all(ws.config_dir()).unwrap();
    std::fs::write(
        ws.config_dir().join("settings.toml"),
        "[navigation]\ntolerance = -0.5\n",
    )
    .unwrap();
    let output = ws.run(&["navigate", "a", "right"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_str(&output).contains("invalid navigation tolerance"));
}

#[test]
fn test_invalid_settings_fail() {
    let ws = Workspace::new();
    std::fs::create_dir_all(ws.config_dir()).unwrap();
    std::fs::write(ws.config_dir().join("settings.toml"), "navigation = 3").unwrap();
    let output = ws.run(&["show"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_str(&output).contains("Configuration error"));
}
