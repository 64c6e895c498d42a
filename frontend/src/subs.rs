//! Derived, read-only queries over the store document
//!
//! Queries are plain functions recomputed on every store change; pass them
//! to `Store::subscribe` to get a signal.

use crate::db::Db;
use crate::error::ViewError;

/// Current `name`, or `MissingField` when the store is uninitialized.
pub fn name(db: &Db) -> Result<String, ViewError> {
    db.as_ref()
        .map(|state| state.name.clone())
        .ok_or(ViewError::MissingField("name"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{AppState, default_state};

    #[test]
    fn test_name_reads_field() {
        assert_eq!(name(&Some(default_state())), Ok("re-frame".to_string()));
        assert_eq!(name(&Some(AppState::new(""))), Ok(String::new()));
    }

    #[test]
    fn test_name_missing_on_empty_db() {
        assert_eq!(name(&None), Err(ViewError::MissingField("name")));
    }
}
