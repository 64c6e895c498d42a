//! Greeting view

use zoon::*;

use crate::db::Db;
use crate::error::ViewError;
use crate::store::Store;
use crate::subs;

/// Text shown for `name`.
pub fn greeting(name: &str) -> String {
    format!("Hello from {name}")
}

/// Rendered greeting for the current document.
pub fn render(db: &Db) -> Result<String, ViewError> {
    subs::name(db).map(|name| greeting(&name))
}

/// Greeting element bound to the store.
///
/// The subscription lives as long as the returned element; unmounting the
/// element drops it.
pub fn root(store: &Store) -> impl Element + use<> {
    El::new()
        .s(Padding::all(16))
        .s(Font::new().size(24))
        .child_signal(store.subscribe(render).map(|rendered| match rendered {
            Ok(text) => Some(Text::new(text)),
            Err(error) => {
                zoon::eprintln!("Greeting not rendered: {error}");
                None
            }
        }))
}
