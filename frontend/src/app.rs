//! GrokListApp - store, configuration and mounting

use zoon::*;

use crate::config::AppConfig;
use crate::error::MountError;
use crate::events::Event;
use crate::store::Store;
use crate::view;

/// Self-contained application instance
#[derive(Clone)]
pub struct GrokListApp {
    /// Application state store
    pub store: Store,

    /// Startup configuration
    pub config: AppConfig,

    /// Bumped by `remount`; the root rebuilds its subtree on every change.
    mount_generation: Mutable<u64>,
}

impl GrokListApp {
    /// Create the app with an initialized store.
    ///
    /// `Initialize` is dispatched synchronously, so the store holds the
    /// default document before anything is mounted.
    pub fn new(config: AppConfig) -> Self {
        let store = Store::new();
        store.dispatch_sync(Event::Initialize);

        Self {
            store,
            config,
            mount_generation: Mutable::new(0),
        }
    }

    /// Root UI element
    pub fn root(&self) -> impl Element + use<> {
        let store = self.store.clone();
        El::new().child_signal(
            self.mount_generation
                .signal()
                .map(move |_| view::root(&store)),
        )
    }

    /// Attach the root element to the configured mount point.
    pub fn mount(&self) -> Result<(), MountError> {
        ensure_mount_point(self.config.mount_point_id)?;
        let root_element = self.root();
        start_app(self.config.mount_point_id, move || root_element);
        Ok(())
    }

    /// Hot-reload hook: drop the mounted view with its subscriptions and
    /// render it again from the current store.
    pub fn remount(&self) {
        *self.mount_generation.lock_mut() += 1;
    }

    pub fn mount_generation(&self) -> u64 {
        self.mount_generation.get()
    }
}

fn ensure_mount_point(id: &str) -> Result<(), MountError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .map(|_| ())
        .ok_or_else(|| MountError::MissingMountPoint(id.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::default_state;
    use futures::StreamExt;

    fn test_config() -> AppConfig {
        AppConfig {
            debug: false,
            mount_point_id: "app",
        }
    }

    #[test]
    fn test_new_app_is_initialized() {
        let app = GrokListApp::new(test_config());
        assert_eq!(app.store.snapshot(), Some(default_state()));
    }

    #[test]
    fn test_remount_keeps_state() {
        let app = GrokListApp::new(test_config());

        app.remount();
        app.remount();

        assert_eq!(app.mount_generation(), 2);
        assert_eq!(app.store.snapshot(), Some(default_state()));
    }

    #[tokio::test]
    async fn test_remount_renders_identical_output() {
        let app = GrokListApp::new(test_config());
        let expected = Ok("Hello from re-frame".to_string());

        let first_mount = app.store.subscribe(view::render).to_stream().next().await;
        app.remount();
        let second_mount = app.store.subscribe(view::render).to_stream().next().await;

        assert_eq!(first_mount, Some(expected.clone()));
        assert_eq!(second_mount, Some(expected));
    }

    #[test]
    fn test_apps_do_not_share_stores() {
        let first = GrokListApp::new(test_config());
        let second = GrokListApp::new(test_config());

        first.remount();

        assert_eq!(second.mount_generation(), 0);
        assert_eq!(second.store.snapshot(), Some(default_state()));
    }
}
