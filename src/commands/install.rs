use crate::commands::{GREEN, NC, RED, YELLOW, print_banner};
use crate::config::Config;
use crate::error::DevHooksError;
use crate::git;
use crate::installer;
use std::path::Path;

/// Install hooks into the repository at `path` and print the categorized
/// report. Returns the process exit code: 1 when any per-hook error was
/// collected, 0 otherwise.
pub fn run(
    path: Option<&Path>,
    hooks: Option<&[String]>,
    force: bool,
) -> Result<i32, DevHooksError> {
    print_banner();

    let hooks_dir = git::hooks_dir(path)?;
    let outcome = installer::install_hooks(&hooks_dir, Config::get().template_dir(), hooks, force)?;

    if !outcome.installed.is_empty() {
        println!("{GREEN}Installed hooks:{NC}");
        for hook in &outcome.installed {
            println!("  {GREEN}+{NC} {hook}");
        }
        println!();
    }

    if !outcome.skipped.is_empty() {
        println!("{YELLOW}Skipped (already exist, use --force to overwrite):{NC}");
        for hook in &outcome.skipped {
            println!("  {YELLOW}-{NC} {hook}");
        }
        println!();
    }

    if !outcome.errors.is_empty() {
        println!("{RED}Errors:{NC}");
        for error in &outcome.errors {
            println!("  {RED}!{NC} {error}");
        }
        println!();
    }

    if !outcome.installed.is_empty() {
        println!("{GREEN}Git hooks installed successfully!{NC}");
    } else if outcome.errors.is_empty() {
        println!("{YELLOW}No hooks were installed.{NC}");
    }

    Ok(if outcome.errors.is_empty() { 0 } else { 1 })
}
