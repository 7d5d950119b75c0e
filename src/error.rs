use thiserror::Error;

/// Unified error type for scm-version operations
#[derive(Error, Debug)]
pub enum ScmVersionError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("No update found: {version}")]
    NoOp { version: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in scm-version
pub type Result<T> = std::result::Result<T, ScmVersionError>;

impl From<git2::Error> for ScmVersionError {
    fn from(err: git2::Error) -> Self {
        ScmVersionError::Repository(err.message().to_string())
    }
}

impl ScmVersionError {
    /// Create an invalid format error with context
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        ScmVersionError::InvalidFormat(msg.into())
    }

    /// Create an unsupported format error with context
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        ScmVersionError::UnsupportedFormat(msg.into())
    }

    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        ScmVersionError::Repository(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ScmVersionError::Config(msg.into())
    }

    /// Signal that a bump left the version unchanged
    pub fn no_op(version: impl ToString) -> Self {
        ScmVersionError::NoOp {
            version: version.to_string(),
        }
    }
}
