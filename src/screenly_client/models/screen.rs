use serde::{Deserialize, Serialize};

use crate::screenly_client::api::ScreenVersionRecord;
use crate::screenly_client::helpers::null_as_default;

/// Snapshot of one screen as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Screen {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hostname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub in_sync: bool,
}

impl Screen {
    /// Name for log lines, falling back to the hostname and then the id.
    pub fn display_name(&self) -> &str {
        [&self.name, &self.hostname]
            .into_iter()
            .find(|value| !value.is_empty())
            .map(String::as_str)
            .unwrap_or(self.id.as_str())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScreenVersion {
    pub id: String,
    pub name: String,
    pub hostname: String,
    pub client_version: Option<String>,
}

impl From<ScreenVersionRecord> for ScreenVersion {
    fn from(record: ScreenVersionRecord) -> Self {
        let client_version = record
            .report
            .as_ref()
            .and_then(|report| report.client_version())
            .map(str::to_string);

        Self {
            id: record.id,
            name: record.name,
            hostname: record.hostname,
            client_version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_unsynced() {
        let screen: Screen = serde_json::from_str(r#"{"id": "s1", "status": null}"#).unwrap();
        assert!(!screen.in_sync);
        assert_eq!(screen.status, "");
        assert_eq!(screen.display_name(), "s1");
    }

    #[test]
    fn display_name_prefers_name_then_hostname() {
        let mut screen = Screen {
            id: "s1".to_string(),
            name: String::new(),
            hostname: "srly-lobby".to_string(),
            status: "Online".to_string(),
            in_sync: true,
        };
        assert_eq!(screen.display_name(), "srly-lobby");
        screen.name = "Lobby".to_string();
        assert_eq!(screen.display_name(), "Lobby");
    }
}
