use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a QA run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Used when `SCREENLY_API_TOKEN` is not set.
    #[serde(default, skip_serializing)]
    pub api_token: Option<String>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub sync: SyncPolicy,

    #[serde(default)]
    pub playlist: PlaylistSettings,

    #[serde(default)]
    pub screens: ScreenFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
            request_timeout_secs: default_request_timeout_secs(),
            sync: SyncPolicy::default(),
            playlist: PlaylistSettings::default(),
            screens: ScreenFilter::default(),
        }
    }
}

/// How long to wait for screens to report in sync.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncPolicy {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl SyncPolicy {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for SyncPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            interval_secs: default_interval_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaylistSettings {
    /// Title prefix identifying playlists owned by the QA run.
    #[serde(default = "default_playlist_prefix")]
    pub prefix: String,

    #[serde(default = "default_asset_count")]
    pub asset_count: usize,

    #[serde(default = "default_asset_duration_secs")]
    pub asset_duration_secs: u32,

    #[serde(default = "default_group_id")]
    pub group_id: String,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            prefix: default_playlist_prefix(),
            asset_count: default_asset_count(),
            asset_duration_secs: default_asset_duration_secs(),
            group_id: default_group_id(),
        }
    }
}

/// Which screens a query should cover. Translated into API query
/// parameters by the client; the poller never filters on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScreenFilter {
    #[serde(default = "default_true")]
    pub enabled_only: bool,

    #[serde(default)]
    pub hardware_type: Option<String>,

    /// Only screens carrying this label.
    #[serde(default)]
    pub label: Option<String>,
}

impl Default for ScreenFilter {
    fn default() -> Self {
        Self {
            enabled_only: true,
            hardware_type: None,
            label: None,
        }
    }
}

fn default_api_url() -> String {
    "https://api.screenlyapp.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

// 6 minutes in total
fn default_max_attempts() -> u32 {
    10
}

fn default_interval_secs() -> u64 {
    36
}

fn default_playlist_prefix() -> String {
    "QC".to_string()
}

fn default_asset_count() -> usize {
    10
}

fn default_asset_duration_secs() -> u32 {
    10
}

fn default_group_id() -> String {
    "all-screens".to_string()
}

fn default_true() -> bool {
    true
}
