//! Launch settings for the root screen.
//!
//! `main` stores the settings once, before launching; the root component
//! reads them on mount.
//!
//! ## Usage
//!
//! ```ignore
//! // In main
//! set_launch_settings(LaunchSettings { content, assets_dir });
//!
//! // In the root component
//! let settings = launch_settings();
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

use jetbizcard_core::CardContent;

/// What the card shows and where its images come from.
#[derive(Clone, Debug)]
pub struct LaunchSettings {
    pub content: CardContent,
    pub assets_dir: PathBuf,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            content: CardContent::default(),
            assets_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets")),
        }
    }
}

static LAUNCH_SETTINGS: OnceLock<LaunchSettings> = OnceLock::new();

/// Store the launch settings. Later calls are ignored.
pub fn set_launch_settings(settings: LaunchSettings) {
    if LAUNCH_SETTINGS.set(settings).is_err() {
        tracing::warn!("Launch settings already set, ignoring");
    }
}

/// The launch settings, or the built-in card if none were set.
pub fn launch_settings() -> &'static LaunchSettings {
    LAUNCH_SETTINGS.get_or_init(LaunchSettings::default)
}
