//! Application state document

use serde::{Deserialize, Serialize};

/// Name shown until something else replaces it.
pub const DEFAULT_NAME: &str = "re-frame";

/// The single document driving the view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub name: String,
}

impl AppState {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Store contents; `None` until the first `Initialize` event.
pub type Db = Option<AppState>;

/// Constant document the store is seeded with.
pub fn default_state() -> AppState {
    AppState::new(DEFAULT_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_constant() {
        assert_eq!(default_state(), AppState::new("re-frame"));
        assert_eq!(default_state(), default_state());
    }

    #[test]
    fn test_document_without_name_is_rejected() {
        let error = serde_json::from_str::<AppState>("{}").unwrap_err();
        assert!(error.to_string().contains("missing field `name`"));
    }

    #[test]
    fn test_document_roundtrips_through_json() {
        let json = serde_json::to_string(&default_state()).unwrap();
        assert_eq!(json, r#"{"name":"re-frame"}"#);
    }
}
