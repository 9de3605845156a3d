pub mod repository;
pub use repository::{GitCli, GitDirResolver, hooks_dir, hooks_dir_with};
