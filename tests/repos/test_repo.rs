use assert_cmd::Command;
use assert_cmd::assert::Assert;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch git repository for driving the compiled dev-hooks binary.
pub struct TestRepo {
    dir: TempDir,
}

#[allow(dead_code)] // not every test binary uses the whole harness
impl TestRepo {
    pub fn new() -> Self {
        let repo = Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        };
        repo.git(&["init", "--quiet"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo
    }

    /// A plain directory with no git metadata at all.
    pub fn without_git() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn hooks_dir(&self) -> PathBuf {
        self.dir.path().join(".git/hooks")
    }

    /// Run the dev-hooks binary inside the repository.
    pub fn dev_hooks(&self, args: &[&str]) -> Assert {
        self.command().args(args).assert()
    }

    /// Same, with an extra environment variable set for the run.
    pub fn dev_hooks_with_env(&self, args: &[&str], key: &str, value: &str) -> Assert {
        self.command().args(args).env(key, value).assert()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("dev-hooks").expect("dev-hooks binary not built");
        cmd.current_dir(self.path());
        cmd
    }

    fn git(&self, args: &[&str]) {
        let status = std::process::Command::new("git")
            .args(args)
            .current_dir(self.path())
            .status()
            .expect("failed to run git");
        assert!(status.success(), "git {:?} failed", args);
    }
}
