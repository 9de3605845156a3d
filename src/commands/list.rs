use crate::commands::{BOLD, CYAN, GREEN, NC, YELLOW, print_banner};
use crate::error::DevHooksError;
use crate::git;
use crate::installer::{AVAILABLE_HOOKS, list_installed_hooks};
use std::path::Path;

const HOOK_DESCRIPTIONS: [(&str, &str); 3] = [
    ("commit-msg", "Validates Conventional Commits format"),
    ("pre-commit", "Runs PHPCS for Drupal/WordPress projects"),
    ("pre-push", "Validates branch naming conventions"),
];

/// Print install status for every known hook. A directory that is not a
/// repository lists as "nothing installed" rather than failing.
pub fn run(path: Option<&Path>) -> Result<i32, DevHooksError> {
    print_banner();

    let installed = match git::hooks_dir(path) {
        Ok(dir) => list_installed_hooks(&dir),
        Err(_) => Vec::new(),
    };

    println!("{CYAN}Available hooks:{NC}");
    for name in AVAILABLE_HOOKS {
        if installed.iter().any(|hook| hook == name) {
            println!("  {GREEN}[x]{NC} {name}");
        } else {
            println!("  {YELLOW}[ ]{NC} {name}");
        }
    }

    println!();
    println!("{CYAN}Hook descriptions:{NC}");
    for (name, description) in HOOK_DESCRIPTIONS {
        println!("  {BOLD}{name:<13}{NC}- {description}");
    }

    Ok(0)
}
