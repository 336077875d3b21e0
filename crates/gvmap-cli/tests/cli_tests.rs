//! End-to-end tests running the `gvmap` binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test context with an isolated working directory for `gvmap.toml`
struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        Self { temp_dir }
    }

    fn with_config(contents: &str) -> Self {
        let ctx = Self::new();
        std::fs::write(ctx.dir().join("gvmap.toml"), contents).expect("failed to write config");
        ctx
    }

    fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    fn gvmap_cmd(&self) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_gvmap");
        let mut cmd = Command::new(bin_path);
        cmd.current_dir(self.dir());
        cmd.env_remove("GVMAP_CONFIG");
        cmd.env_remove("GVMAP_BASE_PATH");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.gvmap_cmd()
            .args(args)
            .output()
            .expect("failed to run gvmap")
    }
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(ToString::to_string)
        .collect()
}

const CONFIG: &str = r#"
base_path = "example.com/pkg/apis"
inputs = ["rbac/v1alpha1", "api/", "apps/v1beta1", "apps/v1"]

[generator]
output_package = "example.com/pkg/generated/openapi"
"#;

#[test]
fn test_help_command() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_version_command() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn test_paths_use_default_inputs_without_config() {
    let ctx = TestContext::new();
    let output = ctx.run(&["paths"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "k8s.io/kubernetes/pkg/api");
    assert_eq!(lines[1], "k8s.io/kubernetes/pkg/apis/authentication");
    assert_eq!(lines[10], "k8s.io/kubernetes/pkg/apis/policy");
}

#[test]
fn test_paths_follow_config_order() {
    let ctx = TestContext::with_config(CONFIG);
    let output = ctx.run(&["paths"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "example.com/pkg/apis/rbac/v1alpha1",
            "example.com/pkg/api",
            "example.com/pkg/apis/apps/v1beta1",
            "example.com/pkg/apis/apps/v1",
        ]
    );
}

#[test]
fn test_command_line_specs_replace_inputs() {
    let ctx = TestContext::with_config(CONFIG);
    let output = ctx.run(&["paths", "a/b/batch/v1", "apps/api/v1"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["example.com/pkg/apis/a/b/batch/v1", "example.com/pkg/api/v1"]
    );
}

#[test]
fn test_base_path_override() {
    let ctx = TestContext::with_config(CONFIG);
    let output = ctx.run(&["paths", "--base-path", "/src/apis", "apps/v1"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["/src/apis/apps/v1"]);
}

#[test]
fn test_legacy_group_override() {
    let ctx = TestContext::with_config(CONFIG);
    let output = ctx.run(&["paths", "--legacy-group", "core", "core/v1", "api/v1"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["example.com/pkg/core/v1", "example.com/pkg/apis/api/v1"]
    );
}

#[test]
fn test_config_from_env() {
    let ctx = TestContext::new();
    std::fs::write(
        ctx.dir().join("custom.toml"),
        "base_path = \"/srv/apis\"\ninputs = [\"batch/v1\"]\n",
    )
    .expect("failed to write config");

    let output = ctx
        .gvmap_cmd()
        .env("GVMAP_CONFIG", "custom.toml")
        .arg("paths")
        .output()
        .expect("failed to run gvmap");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["/srv/apis/batch/v1"]);
}

#[test]
fn test_resolve_json() {
    let ctx = TestContext::with_config(CONFIG);
    let output = ctx.run(&["resolve", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let groups: Vec<&str> = value["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["group"].as_str().unwrap())
        .collect();
    assert_eq!(groups, vec!["api", "apps", "rbac"]);
    assert_eq!(value["groups"][1]["versions"][0], "v1beta1");
    assert_eq!(value["groups"][1]["versions"][1], "v1");
    assert_eq!(value["paths"].as_array().unwrap().len(), 4);
    assert_eq!(
        value["generator"]["output_package"],
        "example.com/pkg/generated/openapi"
    );
}

#[test]
fn test_resolve_text() {
    let ctx = TestContext::with_config(CONFIG);
    let output = ctx.run(&["resolve"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("example.com/pkg/apis/apps/v1beta1"));
    assert!(stdout.contains("v1beta1, v1"));
}

#[test]
fn test_invalid_spec_fails_without_output() {
    let ctx = TestContext::with_config(CONFIG);
    let output = ctx.run(&["paths", "apps/v1", "Apps/v1"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Apps/v1"));
}

#[test]
fn test_explicit_missing_config_fails() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--config", "nope.toml", "paths"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.toml"));
}

#[test]
fn test_malformed_config_fails() {
    let ctx = TestContext::with_config("inputs = [\"api/\"]\nbogus = true\n");
    let output = ctx.run(&["paths"]);
    assert!(!output.status.success());
}

#[test]
fn test_completions() {
    let ctx = TestContext::new();
    let output = ctx.run(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("gvmap"));
}

#[test]
fn test_completions_ignore_config() {
    let ctx = TestContext::with_config("bogus = true\n");
    let output = ctx.run(&["completions", "zsh"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("#compdef gvmap"));
}
