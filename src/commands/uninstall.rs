use crate::commands::{GREEN, NC, YELLOW, print_banner};
use crate::error::DevHooksError;
use crate::git;
use crate::installer;
use std::path::Path;

/// Remove hooks from the repository at `path` and print the report.
/// Always exits 0 once the hook directory resolved.
pub fn run(path: Option<&Path>, hooks: Option<&[String]>) -> Result<i32, DevHooksError> {
    print_banner();

    let hooks_dir = git::hooks_dir(path)?;
    let outcome = installer::uninstall_hooks(&hooks_dir, hooks)?;

    if !outcome.removed.is_empty() {
        println!("{GREEN}Removed hooks:{NC}");
        for hook in &outcome.removed {
            println!("  {GREEN}-{NC} {hook}");
        }
        println!();
    }

    if !outcome.not_found.is_empty() {
        println!("{YELLOW}Not found:{NC}");
        for hook in &outcome.not_found {
            println!("  {YELLOW}?{NC} {hook}");
        }
        println!();
    }

    if !outcome.removed.is_empty() {
        println!("{GREEN}Git hooks uninstalled successfully!{NC}");
    }

    Ok(0)
}
