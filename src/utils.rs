/// Debug logging utility function
///
/// Prints debug messages with a colored prefix when debug assertions are
/// enabled. Release builds stay silent.
pub fn debug_log(msg: &str) {
    if cfg!(debug_assertions) {
        eprintln!("\x1b[1;33m[dev-hooks]\x1b[0m {}", msg);
    }
}
