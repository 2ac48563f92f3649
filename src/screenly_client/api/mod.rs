mod queries;
mod types;

pub use queries::{AssetsQuery, ScreensQuery, SCREEN_STATUS_FIELDS, SCREEN_VERSION_FIELDS};
pub use types::{AssetRecord, NewPlaylist, PlaylistAsset, PlaylistGroup, ScreenVersionRecord};
