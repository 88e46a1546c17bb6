use thiserror::Error;

/// Result type for source construction.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while building a sync source descriptor.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SourceError {
    /// The descriptor holds no usable depot path pattern.
    #[error("source has no depot path patterns")]
    EmptyPaths,
}
