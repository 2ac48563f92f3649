mod api;
mod client;
mod helpers;
mod models;

pub use api::{NewPlaylist, PlaylistAsset, PlaylistGroup};
pub use client::ScreenlyClient;
pub use helpers::{load_api_token, qa_playlist_title, API_TOKEN_ENV};
pub use models::{Playlist, Screen, ScreenVersion};
