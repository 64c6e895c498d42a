//! Events and their handlers
//!
//! Each `Event` variant maps to exactly one handler through `handler_for`,
//! so the dispatch table is checked at compile time.

use std::str::FromStr;

use crate::db::{AppState, Db, default_state};
use crate::error::EventError;

/// Named trigger for a state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Seed the store with the default document.
    Initialize,
}

impl FromStr for Event {
    type Err = EventError;

    /// Parse an event id as used by the dev tooling (`"initialize"`).
    fn from_str(id: &str) -> Result<Self, Self::Err> {
        match id {
            "initialize" => Ok(Event::Initialize),
            other => Err(EventError::UnknownEvent(other.to_owned())),
        }
    }
}

/// Pure transition from the current document to the next one.
pub type Handler = fn(&Db, &Event) -> AppState;

fn handler_for(event: &Event) -> Handler {
    match event {
        Event::Initialize => initialize,
    }
}

fn initialize(_db: &Db, _event: &Event) -> AppState {
    default_state()
}

/// Compute the document that replaces the store contents after `event`.
pub fn handle(db: &Db, event: &Event) -> AppState {
    handler_for(event)(db, event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_from_uninitialized() {
        assert_eq!(handle(&None, &Event::Initialize), default_state());
    }

    #[test]
    fn test_initialize_ignores_prior_state() {
        let corrupted = Some(AppState::new("\u{0}garbage\u{fffd}"));
        let custom = Some(AppState::new("World"));

        assert_eq!(handle(&corrupted, &Event::Initialize), default_state());
        assert_eq!(handle(&custom, &Event::Initialize), default_state());
    }

    #[test]
    fn test_event_ids_parse() {
        assert_eq!("initialize".parse::<Event>(), Ok(Event::Initialize));
        assert_eq!(
            "Initialize".parse::<Event>(),
            Err(EventError::UnknownEvent("Initialize".to_string()))
        );
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let once = handle(&None, &Event::Initialize);
        let twice = handle(&Some(once.clone()), &Event::Initialize);
        assert_eq!(once, twice);
    }
}
