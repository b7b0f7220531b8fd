//! End-to-end checks of the `ledger-registry` binary.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn registry_cmd(dir: &TempDir) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_ledger-registry"));
    command.env_clear().current_dir(dir.path());
    command
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone())
        .expect("utf-8 stdout")
        .trim_end()
        .to_owned()
}

#[test]
fn rpc_uses_hardcoded_default_without_overrides() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = registry_cmd(&dir)
        .args(["rpc", "gnosis"])
        .output()
        .expect("run");
    assert_eq!(stdout(&output), "https://rpc-gate.autonolas.tech/gnosis-rpc/");
}

#[test]
fn environment_override_changes_rpc() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = registry_cmd(&dir)
        .env("GNOSIS_RPC", "https://gnosis.override")
        .args(["rpc", "gnosis"])
        .output()
        .expect("run");
    assert_eq!(stdout(&output), "https://gnosis.override");
}

#[test]
fn dotenv_file_is_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(".env"), "BASE_PUBLIC_RPC=https://base.dotenv\n").expect("write");
    let output = registry_cmd(&dir)
        .args(["rpc", "base", "--public"])
        .output()
        .expect("run");
    assert_eq!(stdout(&output), "https://base.dotenv");
}

#[test]
fn config_file_wins_over_environment() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("registry.toml");
    fs::write(&path, "[rpc]\nsolana = \"$SOL_NODE\"\n").expect("write");
    let output = registry_cmd(&dir)
        .env("SOLANA_RPC", "https://solana.env")
        .env("SOL_NODE", "https://solana.file")
        .arg("--config")
        .arg(&path)
        .args(["rpc", "solana"])
        .output()
        .expect("run");
    assert_eq!(stdout(&output), "https://solana.file");
}

#[test]
fn denom_and_unknown_chain() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = registry_cmd(&dir)
        .args(["denom", "solana"])
        .output()
        .expect("run");
    assert_eq!(stdout(&output), "Lamp");

    let output = registry_cmd(&dir)
        .args(["denom", "goerli"])
        .output()
        .expect("run");
    assert_eq!(stdout(&output), "Wei");

    let output = registry_cmd(&dir)
        .args(["denom", "polygon"])
        .output()
        .expect("run");
    assert!(!output.status.success());
}

#[test]
fn init_then_load_generated_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = registry_cmd(&dir).arg("init").output().expect("run");
    assert!(output.status.success());
    assert!(dir.path().join("ledger-registry.toml").exists());

    let output = registry_cmd(&dir).arg("init").output().expect("run");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));

    let output = registry_cmd(&dir)
        .args(["--config", "ledger-registry.toml", "rpc", "mode"])
        .output()
        .expect("run");
    assert_eq!(stdout(&output), "https://rpc.mode.network");
}

#[test]
fn list_tier_prints_configured_entries() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = registry_cmd(&dir)
        .env("BASE_PUBLIC_RPC", "https://base.public")
        .args(["list", "--tier", "public"])
        .output()
        .expect("run");
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(json["base"], "https://base.public");
    assert!(json.get("local").is_none());
}

#[test]
fn helper_reports_family_and_rpc() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = registry_cmd(&dir)
        .args(["helper", "solana", "--rpc", "http://127.0.0.1:8899"])
        .output()
        .expect("run");
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(json["ledger_type"], "solana");
    assert_eq!(json["rpc"], "http://127.0.0.1:8899");
}
