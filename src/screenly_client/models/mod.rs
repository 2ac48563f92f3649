mod playlist;
mod screen;

pub use playlist::Playlist;
pub use screen::{Screen, ScreenVersion};
