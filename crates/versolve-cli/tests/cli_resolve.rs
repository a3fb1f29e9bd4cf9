mod common;

use predicates::prelude::*;
use std::fs;

use common::{project, versolve_cmd};

#[test]
fn test_resolve_prints_install_plan() {
    let tmp = project("a = []\n");

    versolve_cmd(&tmp.path().join("home"))
        .current_dir(tmp.path().join("proj"))
        .args(["resolve"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Installing a@0.0.3"))
        .stderr(predicate::str::contains("Installing b@0.0.1"))
        .stderr(predicate::str::contains("Installing c@0.0.2"))
        .stderr(predicate::str::contains("Resolved 3 packages for analytics"));
}

#[test]
fn test_resolve_json_document() {
    let tmp = project("a = []\n");

    let output = versolve_cmd(&tmp.path().join("home"))
        .current_dir(tmp.path().join("proj"))
        .args(["resolve", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["install"]["a"], "0.0.3");
    assert_eq!(doc["install"]["b"], "0.0.1");
    assert_eq!(doc["install"]["c"], "0.0.2");
    assert_eq!(doc["tree"]["a"]["dependencies"]["b"]["version"], "0.0.1");
    assert_eq!(
        doc["tree"]["a"]["dependencies"]["b"]["dependencies"]["c"]["version"],
        "0.0.2"
    );
    assert_eq!(doc["tree"]["a"]["satisfies"][0], "a");
}

#[test]
fn test_resolve_respects_root_constraints() {
    let tmp = project("a = \"<0.0.3\"\n");

    let output = versolve_cmd(&tmp.path().join("home"))
        .current_dir(tmp.path().join("proj"))
        .args(["resolve", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["install"]["a"], "0.0.2");
    assert_eq!(doc["install"]["b"], "0.0.1");
    assert_eq!(doc["install"]["c"], "0.0.2");
}

#[test]
fn test_resolve_incompatible_root_constraints_fail() {
    let tmp = project("a = [\">0.0.2\", \"0.0.1\"]\n");

    versolve_cmd(&tmp.path().join("home"))
        .current_dir(tmp.path().join("proj"))
        .args(["resolve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("satisfactory"));
}

#[test]
fn test_resolve_unknown_package_fails() {
    let tmp = project("ghost = []\n");

    versolve_cmd(&tmp.path().join("home"))
        .current_dir(tmp.path().join("proj"))
        .args(["resolve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost"));
}

#[test]
fn test_resolve_shows_rejections_when_configured() {
    let tmp = project("a = []\nc = \"=0.0.1\"\n");
    let home = tmp.path().join("home");
    fs::create_dir_all(home.join(".versolve")).unwrap();
    fs::write(
        home.join(".versolve/config.toml"),
        "[resolve]\nshow-rejections = true\n",
    )
    .unwrap();

    versolve_cmd(&home)
        .current_dir(tmp.path().join("proj"))
        .args(["resolve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rejected candidates"))
        .stderr(predicate::str::contains("a@0.0.3"));
}

#[test]
fn test_resolve_index_flag_overrides_manifest() {
    let tmp = project("a = []\n");
    let other = tmp.path().join("other.json");
    fs::write(&other, r#"{"a": {"9.0.0": {}}}"#).unwrap();

    versolve_cmd(&tmp.path().join("home"))
        .current_dir(tmp.path().join("proj"))
        .args(["resolve", "--index"])
        .arg(&other)
        .assert()
        .success()
        .stderr(predicate::str::contains("Installing a@9.0.0"));
}

#[test]
fn test_resolve_with_manifest_path_from_elsewhere() {
    let tmp = project("c = []\n");

    versolve_cmd(&tmp.path().join("home"))
        .current_dir(tmp.path())
        .args(["resolve", "--manifest-path"])
        .arg(tmp.path().join("proj/versolve.toml"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Installing c@0.0.2"));
}

#[test]
fn test_resolve_without_manifest_fails() {
    let tmp = tempfile::TempDir::new().unwrap();

    versolve_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["resolve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("versolve.toml"));
}
