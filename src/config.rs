use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Centralized configuration for the application
pub struct Config {
    git_path: String,
    template_dir: PathBuf,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    /// Initialize the global configuration exactly once.
    /// Safe to call multiple times; subsequent calls are no-ops.
    pub fn init() {
        let _ = CONFIG.get_or_init(|| Config {
            git_path: resolve_git_path(),
            template_dir: resolve_template_dir(),
        });
    }

    /// Access the global configuration. Panics if not initialized.
    pub fn get() -> &'static Config {
        CONFIG
            .get()
            .expect("Config not initialized. Call Config::init() early in main().")
    }

    /// Returns the command to invoke git.
    pub fn git_cmd(&self) -> &str {
        &self.git_path
    }

    /// Returns the directory holding the shipped hook templates.
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }
}

fn resolve_git_path() -> String {
    // 1) Environment override
    if let Ok(val) = env::var("DEV_HOOKS_GIT") {
        if !val.trim().is_empty() {
            return val;
        }
    }

    // 2) Probe common locations. No PATH walk here to keep startup fast; the
    // bare "git" fallback lets the OS resolve PATH itself.
    let candidates: &[&str] = &[
        "/opt/homebrew/bin/git",
        "/usr/local/bin/git",
        "/usr/bin/git",
        "/bin/git",
        "/usr/local/sbin/git",
        "/usr/sbin/git",
    ];

    if let Some(found) = candidates.iter().map(Path::new).find(|p| p.is_file()) {
        return found.to_string_lossy().to_string();
    }

    // 3) Fallback: rely on system PATH
    "git".to_string()
}

fn resolve_template_dir() -> PathBuf {
    // 1) Environment override
    if let Ok(val) = env::var("DEV_HOOKS_TEMPLATES") {
        if !val.trim().is_empty() {
            return PathBuf::from(val);
        }
    }

    // 2) `hooks/` shipped next to the installed binary
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            let shipped = dir.join("hooks");
            if shipped.is_dir() {
                return shipped;
            }
        }
    }

    // 3) Crate-local templates, for dev builds and tests
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/hooks"))
}
