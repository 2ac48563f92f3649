mod playlist;
mod versions;

pub use playlist::{pick_assets, PlaylistRotation};
pub use versions::{check_client_versions, VersionMismatch, VersionReport};
