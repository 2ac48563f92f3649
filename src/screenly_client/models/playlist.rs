use serde::{Deserialize, Serialize};

use crate::screenly_client::helpers::null_as_default;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

impl Playlist {
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.title.starts_with(prefix)
    }
}
