pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod installer;
pub mod utils;

pub use error::DevHooksError;
pub use installer::{
    AVAILABLE_HOOKS, HookError, InstallOutcome, UninstallOutcome, install_hooks,
    list_installed_hooks, uninstall_hooks,
};
