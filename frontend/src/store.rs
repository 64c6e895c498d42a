//! Explicit state store
//!
//! `Store` owns the application document in a `Mutable<Db>` and is passed
//! around as a context object; clones share the same document. All writes go
//! through `dispatch_sync` or the queued `dispatch`, and all reads through
//! `subscribe` signals or `snapshot`.

use futures::StreamExt;
use futures::channel::mpsc::UnboundedReceiver;
use std::sync::{Arc, OnceLock};
use zoon::{Mutable, Signal, Task, TaskHandle};

use crate::dataflow::{Relay, relay};
use crate::db::Db;
use crate::events::{self, Event};

/// Application state store.
///
/// # Examples
///
/// ```rust
/// let store = Store::new();
/// store.dispatch_sync(Event::Initialize);
///
/// // Bind to UI reactively
/// El::new().child(Text::with_signal(
///     store.subscribe(subs::name).map(Result::unwrap_or_default),
/// ))
/// ```
#[derive(Clone)]
pub struct Store {
    db: Mutable<Db>,
    queue: Arc<OnceLock<EventQueue>>,
}

/// Sequential processor for queued events, started on first use.
struct EventQueue {
    event_queued_relay: Relay<Event>,
    _task_handle: TaskHandle,
}

impl EventQueue {
    fn start(db: Mutable<Db>) -> Self {
        let (event_queued_relay, event_queued_stream) = relay();

        let task_handle = Task::start_droppable(process(db, event_queued_stream));

        Self {
            event_queued_relay,
            _task_handle: task_handle,
        }
    }
}

/// Apply queued events one at a time, in arrival order, until every sender is gone.
async fn process(db: Mutable<Db>, mut event_queued_stream: UnboundedReceiver<Event>) {
    while let Some(event) = event_queued_stream.next().await {
        apply(&db, &event);
    }
}

fn apply(db: &Mutable<Db>, event: &Event) {
    let next = events::handle(&db.lock_ref(), event);
    db.set(Some(next));
}

impl Store {
    /// Uninitialized store; `Initialize` must be dispatched before rendering.
    pub fn new() -> Self {
        Self::with_db(None)
    }

    /// Store seeded with an arbitrary prior document.
    pub fn with_db(db: Db) -> Self {
        Self {
            db: Mutable::new(db),
            queue: Arc::new(OnceLock::new()),
        }
    }

    /// Apply `event` immediately. The new document is visible when this returns.
    pub fn dispatch_sync(&self, event: Event) {
        apply(&self.db, &event);
    }

    /// Queue `event` for the processor task; it is applied on a later tick.
    pub fn dispatch(&self, event: Event) {
        self.queue
            .get_or_init(|| EventQueue::start(self.db.clone()))
            .event_queued_relay
            .send(event);
    }

    /// Derived signal recomputing `query` on every document change.
    ///
    /// Dropping the signal ends the subscription.
    pub fn subscribe<U, F>(&self, query: F) -> impl Signal<Item = U> + use<U, F>
    where
        F: FnMut(&Db) -> U,
    {
        self.db.signal_ref(query)
    }

    /// Current document (for event handlers and tests).
    pub fn snapshot(&self) -> Db {
        self.db.get_cloned()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
