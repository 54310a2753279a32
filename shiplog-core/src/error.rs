//! Error types for shiplog git operations

use thiserror::Error;

/// Result type alias for shiplog-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for shiplog-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Repository could not be opened (fatal setup error)
    #[error("not a git repository: {0}")]
    Repository(String),

    /// A revision spec did not resolve to a commit
    #[error("cannot resolve revision '{spec}': {source}")]
    Resolve {
        /// The spec string the user supplied
        spec: String,
        /// Underlying git error
        #[source]
        source: git2::Error,
    },

    /// The commit range could not be constructed or walked
    #[error("range resolution failed: {0}")]
    Range(#[source] git2::Error),

    /// The remote URL does not identify a repository
    #[error("{0}")]
    Remote(String),

    /// The remote URL could not be parsed at all
    #[error("invalid remote URL: {0}")]
    Url(#[from] url::ParseError),
}
