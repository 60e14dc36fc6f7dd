//! On-disk scanning flows: directory selection, recursion, failure semantics.

use std::fs;
use std::path::Path;

use strhunter_core::{Category, Checker, Config, Error};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

fn checker(cfg: &Config) -> Checker {
    Checker::new(cfg).expect("valid config")
}

#[test]
fn recursive_walk_covers_subdirectories_in_stable_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "main.go", "package main\n\nconst Greeting = \"你好\"\n");
    let sub = dir.path().join("internal");
    fs::create_dir(&sub).unwrap();
    write(
        &sub,
        "util.go",
        "package internal\n\nfunc f(g func(string)) {\n\tg(\"内部！\")\n}\n",
    );
    write(dir.path(), "main_test.go", "package main\n\nconst T = \"测试\"\n");
    write(dir.path(), "README.md", "not go，ignored");

    let pattern = format!("{}/...", dir.path().display());
    let issues = checker(&Config::default()).check_path(&pattern).unwrap();

    // "internal" sorts before "main.go"; the test file never reaches the engine
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].value, "内部！");
    assert_eq!(issues[0].category, Category::CallArg);
    assert_eq!(issues[0].package, "internal");
    assert_eq!(issues[1].value, "你好");
    assert_eq!(issues[1].category, Category::ConstDecl);
    assert_eq!(issues[1].package, "main");
    assert_eq!(issues[0].index, 0);
    assert_eq!(issues[1].index, 1);
}

#[test]
fn single_directory_does_not_recurse() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "main.go", "package main\n\nconst Greeting = \"你好\"\n");
    let sub = dir.path().join("internal");
    fs::create_dir(&sub).unwrap();
    write(&sub, "util.go", "package internal\n\nconst Inner = \"内部\"\n");

    let issues = checker(&Config::default())
        .check_path(&dir.path().display().to_string())
        .unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].value, "你好");
}

#[test]
fn test_files_are_included_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "main_test.go", "package main\n\nconst T = \"测试\"\n");

    let mut cfg = Config::default();
    cfg.ignore_tests = false;
    let issues = checker(&cfg)
        .check_path(&dir.path().display().to_string())
        .unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].value, "测试");
}

#[test]
fn skip_file_pattern_excludes_matching_paths() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "main.go", "package main\n\nconst A = \"甲\"\n");
    write(dir.path(), "zz.pb.go", "package main\n\nconst B = \"乙\"\n");

    let mut cfg = Config::default();
    cfg.skip_file = Some("\\.pb\\.go$".to_string());
    let issues = checker(&cfg)
        .check_path(&dir.path().display().to_string())
        .unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].value, "甲");
}

#[test]
fn bad_skip_file_pattern_fails_before_traversal() {
    let mut cfg = Config::default();
    cfg.skip_file = Some("(unbalanced".to_string());
    assert!(matches!(Checker::new(&cfg), Err(Error::Pattern { .. })));
}

#[test]
fn single_directory_aborts_on_the_first_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    // "broken.go" sorts before "main.go", so it is hit first
    write(dir.path(), "broken.go", "package\n");
    write(dir.path(), "main.go", "package main\n\nconst A = \"甲\"\n");

    let err = checker(&Config::default())
        .check_path(&dir.path().display().to_string())
        .unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn recursive_walk_skips_files_that_fail_to_parse() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "broken.go", "package\n");
    write(dir.path(), "main.go", "package main\n\nconst A = \"甲\"\n");

    let pattern = format!("{}/...", dir.path().display());
    let issues = checker(&Config::default()).check_path(&pattern).unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].value, "甲");
}

#[test]
fn parallel_and_serial_runs_produce_the_same_sequence() {
    let dir = tempfile::tempdir().unwrap();
    for (name, text) in [
        ("a.go", "package demo\n\nconst A = \"一\"\n"),
        ("b.go", "package demo\n\nconst B = \"二\"\n"),
        ("c.go", "package demo\n\nconst C = \"三\"\n"),
        ("d.go", "package demo\n\nconst D = \"四\"\n"),
    ] {
        write(dir.path(), name, text);
    }

    let pattern = format!("{}/...", dir.path().display());
    let mut serial_cfg = Config::default();
    serial_cfg.threads = Some(1);
    let mut parallel_cfg = Config::default();
    parallel_cfg.threads = Some(4);

    let serial = checker(&serial_cfg).check_path(&pattern).unwrap();
    let parallel = checker(&parallel_cfg).check_path(&pattern).unwrap();
    assert_eq!(serial, parallel);
    assert_eq!(serial.len(), 4);
    assert_eq!(serial[0].value, "一");
    assert_eq!(serial[3].value, "四");
}
