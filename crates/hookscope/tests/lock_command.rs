#![cfg(unix)]

mod common;

use common::{fake_bin, init_repo, install_tool, logging_tool, read_log, write_package};
use predicates::str::contains;

macro_rules! hookscope {
    () => {
        assert_cmd::cargo::cargo_bin_cmd!("hookscope")
    };
}

#[test]
fn poetry_check_runs_for_each_changed_package() {
    let repo = init_repo();
    write_package(repo.path(), "pkg-a");

    let bin = fake_bin();
    install_tool(bin.path(), "poetry", &logging_tool("poetry"));
    let log = bin.path().join("invocations.log");

    hookscope!()
        .args(["lock", "check", "pkg-a/src/mod.py"])
        .arg("--cwd")
        .arg(repo.path())
        .env("PATH", bin.path())
        .env("HOOKSCOPE_TEST_LOG", &log)
        .assert()
        .success();

    let lines = read_log(&log);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("poetry -C"));
    assert!(lines[0].contains("pkg-a"));
    assert!(lines[0].ends_with("check"));
}

#[test]
fn uv_backend_verifies_the_lock_file() {
    let repo = init_repo();
    write_package(repo.path(), "pkg-a");

    let bin = fake_bin();
    install_tool(bin.path(), "uv", &logging_tool("uv"));
    let log = bin.path().join("invocations.log");

    hookscope!()
        .args(["lock", "check", "--backend", "uv", "pkg-a/src/mod.py"])
        .arg("--cwd")
        .arg(repo.path())
        .env("PATH", bin.path())
        .env("HOOKSCOPE_TEST_LOG", &log)
        .assert()
        .success();

    let lines = read_log(&log);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("uv --project"));
    assert!(lines[0].ends_with("lock --check"));
}

#[test]
fn uv_backend_rewrites_the_lock_file() {
    let repo = init_repo();
    write_package(repo.path(), "pkg-a");

    let bin = fake_bin();
    install_tool(bin.path(), "uv", &logging_tool("uv"));
    let log = bin.path().join("invocations.log");

    hookscope!()
        .args(["lock", "lock", "--backend", "uv", "pkg-a/src/mod.py"])
        .arg("--cwd")
        .arg(repo.path())
        .env("PATH", bin.path())
        .env("HOOKSCOPE_TEST_LOG", &log)
        .assert()
        .success();

    let lines = read_log(&log);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("lock"));
    assert!(!lines[0].contains("--check"));
}

#[test]
fn auto_backend_prefers_poetry_when_both_are_present() {
    let repo = init_repo();
    write_package(repo.path(), "pkg-a");

    let bin = fake_bin();
    install_tool(bin.path(), "poetry", &logging_tool("poetry"));
    install_tool(bin.path(), "uv", &logging_tool("uv"));
    let log = bin.path().join("invocations.log");

    hookscope!()
        .args(["lock", "check", "pkg-a/src/mod.py"])
        .arg("--cwd")
        .arg(repo.path())
        .env("PATH", bin.path())
        .env("HOOKSCOPE_TEST_LOG", &log)
        .assert()
        .success();

    let lines = read_log(&log);
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|line| line.starts_with("poetry")));
}

#[test]
fn forwards_extra_arguments_to_the_backend() {
    let repo = init_repo();
    write_package(repo.path(), "pkg-a");

    let bin = fake_bin();
    install_tool(bin.path(), "poetry", &logging_tool("poetry"));
    let log = bin.path().join("invocations.log");

    hookscope!()
        .args(["lock", "lock", "pkg-a/src/mod.py"])
        .arg("--cwd")
        .arg(repo.path())
        .args(["--", "--no-update"])
        .env("PATH", bin.path())
        .env("HOOKSCOPE_TEST_LOG", &log)
        .assert()
        .success();

    let lines = read_log(&log);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("lock --no-update"));
}

#[test]
fn reports_missing_requested_backend() {
    let repo = init_repo();
    let bin = fake_bin();

    hookscope!()
        .args(["lock", "check", "--backend", "poetry"])
        .arg("--cwd")
        .arg(repo.path())
        .env("PATH", bin.path())
        .assert()
        .failure()
        .stderr(contains("unable to locate poetry"));
}
