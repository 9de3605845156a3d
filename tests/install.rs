mod repos;

use assert_cmd::Command;
use predicates::str::contains;
use repos::test_repo::TestRepo;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

const ALL_HOOKS: [&str; 3] = ["commit-msg", "pre-commit", "pre-push"];

fn is_executable(path: &Path) -> bool {
    fs::metadata(path).unwrap().permissions().mode() & 0o111 == 0o111
}

#[test]
fn installs_all_hooks_by_default() {
    let repo = TestRepo::new();

    repo.dev_hooks(&["install"])
        .success()
        .stdout(contains("Installed hooks:"))
        .stdout(contains("Git hooks installed successfully!"));

    for name in ALL_HOOKS {
        let hook = repo.hooks_dir().join(name);
        assert!(hook.exists(), "{name} should be installed");
        assert!(is_executable(&hook), "{name} should be executable");
    }
}

#[test]
fn installs_only_the_requested_hooks() {
    let repo = TestRepo::new();

    repo.dev_hooks(&["install", "--hooks", "commit-msg,pre-push"])
        .success()
        .stdout(contains("Installed hooks:"));

    assert!(repo.hooks_dir().join("commit-msg").exists());
    assert!(repo.hooks_dir().join("pre-push").exists());
    assert!(!repo.hooks_dir().join("pre-commit").exists());
    assert!(is_executable(&repo.hooks_dir().join("commit-msg")));
}

#[test]
fn second_install_skips_existing_hooks() {
    let repo = TestRepo::new();

    repo.dev_hooks(&["install"]).success();
    repo.dev_hooks(&["install"])
        .success()
        .stdout(contains("Skipped (already exist, use --force to overwrite):"))
        .stdout(contains("No hooks were installed."));
}

#[test]
fn force_overwrites_an_edited_hook() {
    let repo = TestRepo::new();
    repo.dev_hooks(&["install"]).success();

    let hook = repo.hooks_dir().join("commit-msg");
    fs::write(&hook, "#!/bin/sh\nexit 1\n").unwrap();

    // Without --force the edited hook survives.
    repo.dev_hooks(&["install"]).success();
    assert_eq!(fs::read_to_string(&hook).unwrap(), "#!/bin/sh\nexit 1\n");

    repo.dev_hooks(&["install", "--force"])
        .success()
        .stdout(contains("Installed hooks:"));
    assert_ne!(fs::read_to_string(&hook).unwrap(), "#!/bin/sh\nexit 1\n");
    assert!(is_executable(&hook));
}

#[test]
fn unknown_hook_name_fails_the_install() {
    let repo = TestRepo::new();

    repo.dev_hooks(&["install", "--hooks", "foo"])
        .code(1)
        .stdout(contains("Errors:"))
        .stdout(contains("foo (unknown hook)"));

    assert!(!repo.hooks_dir().join("foo").exists());
}

#[test]
fn missing_template_is_a_per_hook_error() {
    let repo = TestRepo::new();
    let empty_templates = TempDir::new().unwrap();

    repo.dev_hooks_with_env(
        &["install"],
        "DEV_HOOKS_TEMPLATES",
        empty_templates.path().to_str().unwrap(),
    )
    .code(1)
    .stdout(contains("commit-msg (source not found)"))
    .stdout(contains("pre-commit (source not found)"))
    .stdout(contains("pre-push (source not found)"));
}

#[test]
fn install_outside_a_repository_fails() {
    let dir = TestRepo::without_git();

    dir.dev_hooks(&["install"])
        .code(1)
        .stdout(contains("Error: Not a git repository"));
}

#[test]
fn path_flag_targets_another_repository() {
    let repo = TestRepo::new();
    let elsewhere = TestRepo::without_git();

    Command::cargo_bin("dev-hooks")
        .unwrap()
        .args(["--path", repo.path().to_str().unwrap(), "install"])
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(contains("Git hooks installed successfully!"));

    assert!(repo.hooks_dir().join("commit-msg").exists());
    assert!(!elsewhere.path().join(".git").exists());
}
