mod common;

use predicates::prelude::*;

use common::{project, versolve_cmd};

#[test]
fn test_tree_prints_box_drawing() {
    let tmp = project("a = []\n");

    versolve_cmd(&tmp.path().join("home"))
        .current_dir(tmp.path().join("proj"))
        .args(["tree"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("analytics@1.0.0\n"))
        .stdout(predicate::str::contains("└── a@0.0.3"))
        .stdout(predicate::str::contains("├── b@0.0.1"))
        .stdout(predicate::str::contains("c@0.0.2"));
}

#[test]
fn test_tree_depth_limit() {
    let tmp = project("a = []\n");

    versolve_cmd(&tmp.path().join("home"))
        .current_dir(tmp.path().join("proj"))
        .args(["tree", "--depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a@0.0.3"))
        .stdout(predicate::str::contains("b@0.0.1").not());
}

#[test]
fn test_tree_why() {
    let tmp = project("a = []\n");

    versolve_cmd(&tmp.path().join("home"))
        .current_dir(tmp.path().join("proj"))
        .args(["tree", "--why", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path to b:"))
        .stdout(predicate::str::contains("analytics@1.0.0\n  a@0.0.3\n    b@0.0.1"));
}

#[test]
fn test_tree_why_unknown_package() {
    let tmp = project("a = []\n");

    versolve_cmd(&tmp.path().join("home"))
        .current_dir(tmp.path().join("proj"))
        .args(["tree", "--why", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Package 'zzz' not found"));
}

#[test]
fn test_tree_inverted() {
    let tmp = project("a = []\n");

    versolve_cmd(&tmp.path().join("home"))
        .current_dir(tmp.path().join("proj"))
        .args(["tree", "--inverted", "c"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("c@0.0.2\n"))
        .stdout(predicate::str::contains("b@0.0.1"))
        .stdout(predicate::str::contains("a@0.0.3"));
}
