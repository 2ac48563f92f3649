mod loader;
mod paths;
mod types;

pub use paths::{resolve_config_path, ConfigLocation, CONFIG_PATH_ENV};
pub use types::{Config, PlaylistSettings, ScreenFilter, SyncPolicy};
