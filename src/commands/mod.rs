pub mod install;
pub mod list;
pub mod uninstall;

// ANSI palette shared by the report printers.
pub const RED: &str = "\x1b[0;31m";
pub const GREEN: &str = "\x1b[0;32m";
pub const YELLOW: &str = "\x1b[1;33m";
pub const BLUE: &str = "\x1b[0;34m";
pub const CYAN: &str = "\x1b[0;36m";
pub const BOLD: &str = "\x1b[1m";
pub const NC: &str = "\x1b[0m";

/// Banner printed at the top of every subcommand's output.
pub fn print_banner() {
    let rule = "=".repeat(60);
    println!("{BLUE}{rule}{NC}");
    println!("{BOLD}  Dev Tools Hooks v{}{NC}", env!("CARGO_PKG_VERSION"));
    println!("{BLUE}{rule}{NC}");
    println!();
}
