//! Startup configuration

/// Id of the host element the app is mounted into.
pub const MOUNT_POINT_ID: &str = "app";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Development build: emit diagnostics and expose the hot-reload hook.
    pub debug: bool,
    pub mount_point_id: &'static str,
}

impl AppConfig {
    /// Configuration fixed at compile time; read once in `main`.
    pub fn from_build() -> Self {
        Self {
            debug: cfg!(debug_assertions),
            mount_point_id: MOUNT_POINT_ID,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build()
    }
}
