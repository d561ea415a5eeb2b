use std::fmt;

/// Result type for qshowcase CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the CLI layer
#[derive(Debug)]
pub enum Error {
    /// Content layer error (unknown topic)
    Content(qshowcase_content::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Interactive terminal not available
    Terminal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Content(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Terminal(msg) => write!(f, "Terminal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Content(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::Terminal(_) => None,
        }
    }
}

impl From<qshowcase_content::Error> for Error {
    fn from(err: qshowcase_content::Error) -> Self {
        Error::Content(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
