use thiserror::Error;

/// Result type for view compilation.
pub type ViewResult<T> = Result<T, ViewError>;

/// Errors produced while compiling a client view mapping.
///
/// Compilation fails fast: the first offending input aborts the whole call
/// and no partial mapping is ever returned.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ViewError {
    /// The path spec or the workspace name was empty or blank.
    #[error("invalid view spec: {0}")]
    InvalidSpec(String),
    /// A spec line does not begin with the `//` namespace root marker.
    #[error("malformed depot path '{0}': missing '//' root marker")]
    MalformedPath(String),
}

#[cfg(test)]
mod tests {
    use super::ViewError;

    #[test]
    fn invalid_spec_message_echoes_reason() {
        let err = ViewError::InvalidSpec("path spec is empty".to_owned());
        assert!(err.to_string().contains("invalid view spec"));
        assert!(err.to_string().contains("path spec is empty"));
    }

    #[test]
    fn malformed_path_message_echoes_line() {
        let err = ViewError::MalformedPath("depot/src".to_owned());
        assert!(err.to_string().contains("depot/src"));
        assert!(err.to_string().contains("root marker"));
    }
}
