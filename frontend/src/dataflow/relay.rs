//! Event streaming Relay
//!
//! Relay carries events from call sites to the store's processor task
//! using an unbounded channel.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};

use crate::debug_utils::debug_critical;

/// Type-safe event streaming relay.
///
/// Relays follow the `{source}_{event}_relay` naming pattern, e.g.
/// `event_queued_relay` for events waiting in the store queue.
///
/// # Examples
///
/// ```rust
/// use crate::dataflow::relay;
///
/// let (event_queued_relay, mut event_queued_stream) = relay();
///
/// event_queued_relay.send(Event::Initialize);
///
/// while let Some(event) = event_queued_stream.next().await {
///     store.dispatch_sync(event);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
}

/// Error type for Relay operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// The receiver has been dropped
    #[error("relay channel closed; event dropped")]
    ChannelClosed,
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new Relay with its receiver stream.
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (Relay { sender }, receiver)
    }

    /// Send an event through the relay.
    ///
    /// If the receiver has been dropped, the event is discarded and the
    /// failure is logged.
    pub fn send(&self, value: T) {
        if let Err(error) = self.try_send(value) {
            debug_critical(&error.to_string());
        }
    }

    /// Send an event, failing when the receiver is gone.
    pub fn try_send(&self, value: T) -> Result<(), RelayError> {
        self.sender
            .unbounded_send(value)
            .map_err(|_| RelayError::ChannelClosed)
    }
}

/// Creates a new Relay with an associated receiver stream.
pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}
