#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// a/b/c where b's newest release conflicts with the c that a 0.0.3 pins.
pub const INDEX: &str = r#"{
  "a": {
    "0.0.1": { "b": ["=0.0.1"] },
    "0.0.2": { "b": ["=0.0.1"] },
    "0.0.3": { "b": [">=0.0.1"], "c": ["=0.0.2"] }
  },
  "b": {
    "0.0.1": { "c": ["=0.0.2"] },
    "0.0.2": { "c": ["=0.0.1"] }
  },
  "c": {
    "0.0.1": {},
    "0.0.2": {}
  }
}"#;

pub fn versolve_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("versolve").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// A project directory with `versolve.toml` and `index.json`, plus an empty home.
pub fn project(packages: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("home")).unwrap();
    fs::create_dir_all(tmp.path().join("proj")).unwrap();
    fs::write(tmp.path().join("proj/index.json"), INDEX).unwrap();
    fs::write(
        tmp.path().join("proj/versolve.toml"),
        format!(
            "[project]\nname = \"analytics\"\nversion = \"1.0.0\"\n\n[index]\npath = \"index.json\"\n\n[packages]\n{packages}"
        ),
    )
    .unwrap();
    tmp
}
