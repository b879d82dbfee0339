use std::sync::Arc;
use platform_dirs::AppDirs;
use tokio::sync::Notify;

pub mod setup;
pub mod telemetry;
pub mod config;
pub mod api;

/// Name the service reports about itself in health checks and the API descriptor.
pub const SERVICE_NAME: &str = "VoiceFast";

/// Platform specific directories for VoiceFast, `None` if no home directory could be found.
pub fn get_app_dirs() -> Option<AppDirs> {
    platform_dirs::AppDirs::new(Some(SERVICE_NAME), false)
}

/// A notifier to be able to shut down all systems appropriately, and in time.
pub fn get_quit_notifier() -> Arc<Notify> {
    Arc::new(Notify::new())
}
