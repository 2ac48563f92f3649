use serde::Serialize;

use crate::config::ScreenFilter;

pub const SCREEN_STATUS_FIELDS: &str = "id,name,hostname,status,in_sync";
pub const SCREEN_VERSION_FIELDS: &str = "id,name,hostname,report:screen_reports(client_version)";
const LABEL_EMBED: &str = "groups:labels!label_screen!inner(human_name)";

pub const PLAYABLE_ASSET_TYPES: &str = r#"in.("appweb","audio","edge-app","image","video","web")"#;
pub const READY_ASSET_STATUSES: &str = r#"in.("finished","processing")"#;

/// PostgREST query for the v4.1 screens endpoint.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ScreensQuery {
    pub select: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<&'static str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub hardware_type: Option<String>,
    #[serde(rename = "groups.human_name", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ScreensQuery {
    pub fn new(fields: &str, filter: &ScreenFilter) -> Self {
        // Filtering on a label needs the inner-joined label embed in the selection.
        let select = match filter.label {
            Some(_) => format!("{fields},{LABEL_EMBED}"),
            None => fields.to_string(),
        };

        Self {
            select,
            is_enabled: filter.enabled_only.then_some("eq.true"),
            hardware_type: filter.hardware_type.as_ref().map(|t| format!("eq.{t}")),
            label: filter.label.as_ref().map(|l| format!("eq.{l}")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssetsQuery {
    pub select: &'static str,
    #[serde(rename = "type")]
    pub asset_type: &'static str,
    pub status: &'static str,
}

impl Default for AssetsQuery {
    fn default() -> Self {
        Self {
            select: "id",
            asset_type: PLAYABLE_ASSET_TYPES,
            status: READY_ASSET_STATUSES,
        }
    }
}
