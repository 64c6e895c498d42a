//! Error types for the view and mount layers

/// Rendering failure for a store document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// The document has no value for the named field (uninitialized store).
    #[error("missing field `{0}` in app state")]
    MissingField(&'static str),
}

/// Event id that names no `Event` variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    #[error("unknown event `{0}`")]
    UnknownEvent(String),
}

/// Startup failure before anything is rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("mount point element `#{0}` not found in the host document")]
    MissingMountPoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_missing_piece() {
        assert_eq!(
            ViewError::MissingField("name").to_string(),
            "missing field `name` in app state"
        );
        assert_eq!(
            MountError::MissingMountPoint("app".to_string()).to_string(),
            "mount point element `#app` not found in the host document"
        );
    }
}
