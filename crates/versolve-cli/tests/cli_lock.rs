mod common;

use predicates::prelude::*;
use std::fs;

use common::{project, versolve_cmd};

#[test]
fn test_lock_writes_lockfile() {
    let tmp = project("a = []\n");
    let proj = tmp.path().join("proj");

    versolve_cmd(&tmp.path().join("home"))
        .current_dir(&proj)
        .args(["lock"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Locked 3 packages"));

    let content = fs::read_to_string(proj.join("versolve.lock")).unwrap();
    let lock: toml::Value = toml::from_str(&content).unwrap();
    let packages = lock["package"].as_array().unwrap();
    let names: Vec<&str> = packages
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(packages[0]["version"].as_str(), Some("0.0.3"));
    assert_eq!(packages[1]["version"].as_str(), Some("0.0.1"));
    let a_deps: Vec<&str> = packages[0]["dependencies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_str().unwrap())
        .collect();
    assert_eq!(a_deps, vec!["b", "c"]);
}

#[test]
fn test_lock_failure_leaves_no_lockfile() {
    let tmp = project("a = \">9.0.0\"\n");
    let proj = tmp.path().join("proj");

    versolve_cmd(&tmp.path().join("home"))
        .current_dir(&proj)
        .args(["lock"])
        .assert()
        .failure();

    assert!(!proj.join("versolve.lock").exists());
}
