use clap::{CommandFactory, Parser, Subcommand};
use dev_hooks::commands;
use dev_hooks::commands::{NC, RED};
use dev_hooks::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dev-hooks")]
#[command(about = "Git hooks for development workflow")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "Examples:
  dev-hooks install              Install all hooks
  dev-hooks install --force      Overwrite existing hooks
  dev-hooks install --hooks commit-msg,pre-push
  dev-hooks uninstall            Remove all hooks
  dev-hooks list                 Show hook status")]
struct Cli {
    /// Path to the git repository (default: current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install git hooks
    Install {
        /// Overwrite existing hooks
        #[arg(short, long)]
        force: bool,

        /// Comma-separated list of hooks to install
        #[arg(long, value_delimiter = ',')]
        hooks: Option<Vec<String>>,
    },
    /// Uninstall git hooks
    Uninstall {
        /// Comma-separated list of hooks to uninstall
        #[arg(long, value_delimiter = ',')]
        hooks: Option<Vec<String>>,
    },
    /// List available and installed hooks
    List,
}

fn main() {
    Config::init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help().ok();
        return;
    };

    let path = cli.path.as_deref();

    let result = match command {
        Commands::Install { force, hooks } => commands::install::run(path, hooks.as_deref(), force),
        Commands::Uninstall { hooks } => commands::uninstall::run(path, hooks.as_deref()),
        Commands::List => commands::list::run(path),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            println!("{RED}Error: {e}{NC}");
            std::process::exit(1);
        }
    }
}
