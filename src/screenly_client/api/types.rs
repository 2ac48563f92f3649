use serde::{Deserialize, Serialize};

use crate::screenly_client::helpers::null_as_default;

#[derive(Debug, Deserialize)]
pub struct AssetRecord {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ScreenVersionRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hostname: String,
    #[serde(default)]
    pub report: Option<ReportEmbed>,
}

/// The `screen_reports` embed arrives as an object for one-to-one
/// relations and as an array otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ReportEmbed {
    One(ScreenReport),
    Many(Vec<ScreenReport>),
}

impl ReportEmbed {
    pub fn client_version(&self) -> Option<&str> {
        match self {
            ReportEmbed::One(report) => report.client_version.as_deref(),
            ReportEmbed::Many(reports) => reports
                .iter()
                .find_map(|report| report.client_version.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScreenReport {
    #[serde(default)]
    pub client_version: Option<String>,
}

/// Request body for creating a playlist.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewPlaylist {
    pub title: String,
    pub groups: Vec<PlaylistGroup>,
    pub is_enabled: bool,
    pub assets: Vec<PlaylistAsset>,
    pub predicate: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlaylistGroup {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlaylistAsset {
    pub id: String,
    pub duration: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_embed_accepts_object_array_and_null() {
        let records: Vec<ScreenVersionRecord> = serde_json::from_str(
            r#"[
                {"id": "a", "name": "Lobby", "hostname": null, "report": {"client_version": "1.2.3"}},
                {"id": "b", "name": "Hall", "hostname": "hall", "report": [{"client_version": "1.2.4"}]},
                {"id": "c", "name": null, "report": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            records[0].report.as_ref().and_then(|r| r.client_version()),
            Some("1.2.3")
        );
        assert_eq!(records[0].hostname, "");
        assert_eq!(
            records[1].report.as_ref().and_then(|r| r.client_version()),
            Some("1.2.4")
        );
        assert!(records[2].report.is_none());
        assert_eq!(records[2].name, "");
    }
}
