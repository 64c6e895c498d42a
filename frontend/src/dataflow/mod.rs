//! Dataflow primitives for the store
//!
//! - **[`Relay`]** - event streaming into the store's processor task

pub mod relay;

pub use relay::{Relay, relay};
