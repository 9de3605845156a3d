use crate::config::Config;
use crate::error::DevHooksError;
use crate::utils::debug_log;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Resolves a repository's git metadata directory for a given working
/// directory. The production implementation shells out to git; tests supply
/// a fake so no subprocess is spawned.
pub trait GitDirResolver {
    fn git_dir(&self, workdir: &Path) -> Result<PathBuf, DevHooksError>;
}

/// Resolver backed by the real git binary.
pub struct GitCli;

impl GitDirResolver for GitCli {
    fn git_dir(&self, workdir: &Path) -> Result<PathBuf, DevHooksError> {
        let output = Command::new(Config::get().git_cmd())
            .args(["rev-parse", "--git-dir"])
            .current_dir(workdir)
            .output()?;

        // Any non-zero exit means "not a repository"; stderr is not inspected.
        if !output.status.success() {
            return Err(DevHooksError::NotAGitRepository);
        }

        let stdout = String::from_utf8(output.stdout)?;
        Ok(PathBuf::from(stdout.trim()))
    }
}

/// Resolve the hooks directory for `repo_path`, or the current directory
/// when unset. The returned path is `<git-dir>/hooks`; the subdirectory
/// itself is not required to exist yet.
pub fn hooks_dir(repo_path: Option<&Path>) -> Result<PathBuf, DevHooksError> {
    hooks_dir_with(&GitCli, repo_path)
}

pub fn hooks_dir_with(
    resolver: &dyn GitDirResolver,
    repo_path: Option<&Path>,
) -> Result<PathBuf, DevHooksError> {
    let workdir = match repo_path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let git_dir = resolver.git_dir(&workdir)?;

    // rev-parse reports the git dir relative to the working directory when
    // invoked from inside the repository, commonly just ".git".
    let git_dir = if git_dir.is_absolute() {
        git_dir
    } else {
        workdir.join(git_dir)
    };

    debug_log(&format!("resolved git dir: {}", git_dir.display()));

    Ok(git_dir.join("hooks"))
}
