use std::fmt;

#[derive(Debug)]
pub enum DevHooksError {
    NotAGitRepository,
    HooksDirCreate(std::io::Error),
    IoError(std::io::Error),
    FromUtf8Error(std::string::FromUtf8Error),
    Generic(String),
}

impl fmt::Display for DevHooksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevHooksError::NotAGitRepository => write!(f, "Not a git repository"),
            DevHooksError::HooksDirCreate(e) => {
                write!(f, "Failed to create hooks directory: {}", e)
            }
            DevHooksError::IoError(e) => write!(f, "IO error: {}", e),
            DevHooksError::FromUtf8Error(e) => write!(f, "From UTF-8 error: {}", e),
            DevHooksError::Generic(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DevHooksError {}

impl From<std::io::Error> for DevHooksError {
    fn from(err: std::io::Error) -> Self {
        DevHooksError::IoError(err)
    }
}

impl From<std::string::FromUtf8Error> for DevHooksError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        DevHooksError::FromUtf8Error(err)
    }
}
