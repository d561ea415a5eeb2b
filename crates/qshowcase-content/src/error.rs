use std::fmt;

use crate::topic::Topic;

/// Result type for qshowcase-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the content layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input did not match any sidebar label or slug
    UnknownTopic { input: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownTopic { input } => {
                let expected: Vec<&str> = Topic::ALL.iter().map(|t| t.slug()).collect();
                write!(
                    f,
                    "unknown topic '{}' (expected a menu label or one of: {})",
                    input,
                    expected.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for Error {}
