//! Hook reconciliation: compares the requested hook set against on-disk
//! state and installs, removes, or reports accordingly. Stateless; every
//! call re-reads the filesystem.

use crate::error::DevHooksError;
use std::fmt;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Hooks shipped with this package, in display order. Identity is exact
/// string match; there is no aliasing.
pub const AVAILABLE_HOOKS: [&str; 3] = ["commit-msg", "pre-commit", "pre-push"];

/// A per-hook failure collected during an install call. Rendered as
/// `<hook> (<reason>)` in reports.
#[derive(Debug)]
pub struct HookError {
    pub hook: String,
    pub reason: String,
}

impl HookError {
    fn new(hook: &str, reason: impl Into<String>) -> Self {
        HookError {
            hook: hook.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for HookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.hook, self.reason)
    }
}

/// Outcome of an install call. Each list preserves request order.
#[derive(Debug, Default)]
pub struct InstallOutcome {
    pub installed: Vec<String>,
    pub skipped: Vec<String>,
    pub errors: Vec<HookError>,
}

/// Outcome of an uninstall call. Each list preserves request order.
#[derive(Debug, Default)]
pub struct UninstallOutcome {
    pub removed: Vec<String>,
    pub not_found: Vec<String>,
}

/// Install hook templates from `template_dir` into `hooks_dir`.
///
/// `hooks` defaults to [`AVAILABLE_HOOKS`] when unset. Existing hooks are
/// skipped unless `force` is set. Per-hook failures are collected into the
/// outcome rather than aborting the call; only a failure to create
/// `hooks_dir` itself is fatal. Hooks copied before a later failure stay
/// installed.
pub fn install_hooks(
    hooks_dir: &Path,
    template_dir: &Path,
    hooks: Option<&[String]>,
    force: bool,
) -> Result<InstallOutcome, DevHooksError> {
    fs::create_dir_all(hooks_dir).map_err(DevHooksError::HooksDirCreate)?;

    let mut outcome = InstallOutcome::default();

    for name in requested_hooks(hooks) {
        if !AVAILABLE_HOOKS.contains(&name) {
            outcome.errors.push(HookError::new(name, "unknown hook"));
            continue;
        }

        let source = template_dir.join(name);
        let dest = hooks_dir.join(name);

        if !source.exists() {
            outcome.errors.push(HookError::new(name, "source not found"));
            continue;
        }

        // An existing hook is left untouched without --force, even when its
        // content differs from the template.
        if dest.exists() && !force {
            outcome.skipped.push(name.to_string());
            continue;
        }

        match copy_executable(&source, &dest) {
            Ok(()) => outcome.installed.push(name.to_string()),
            Err(e) => outcome.errors.push(HookError::new(name, e.to_string())),
        }
    }

    Ok(outcome)
}

/// Remove hooks from `hooks_dir`. `hooks` defaults to [`AVAILABLE_HOOKS`].
///
/// Names with no file on disk, including names outside the known set, are
/// reported as not found rather than errors.
pub fn uninstall_hooks(
    hooks_dir: &Path,
    hooks: Option<&[String]>,
) -> Result<UninstallOutcome, DevHooksError> {
    let mut outcome = UninstallOutcome::default();

    for name in requested_hooks(hooks) {
        let hook_file = hooks_dir.join(name);

        if hook_file.exists() {
            fs::remove_file(&hook_file)?;
            outcome.removed.push(name.to_string());
        } else {
            outcome.not_found.push(name.to_string());
        }
    }

    Ok(outcome)
}

/// Which of the known hooks currently exist in `hooks_dir`.
pub fn list_installed_hooks(hooks_dir: &Path) -> Vec<String> {
    AVAILABLE_HOOKS
        .iter()
        .copied()
        .filter(|name| hooks_dir.join(name).exists())
        .map(str::to_string)
        .collect()
}

fn requested_hooks(hooks: Option<&[String]>) -> Vec<&str> {
    match hooks {
        Some(names) => names.iter().map(String::as_str).collect(),
        None => AVAILABLE_HOOKS.to_vec(),
    }
}

/// Copy a template into place, then add the execute bits for owner, group
/// and other on top of whatever mode the copy produced. Never clears bits.
fn copy_executable(source: &Path, dest: &Path) -> std::io::Result<()> {
    fs::copy(source, dest)?;

    let mut perms = fs::metadata(dest)?.permissions();
    perms.set_mode(perms.mode() | 0o111);
    fs::set_permissions(dest, perms)
}
