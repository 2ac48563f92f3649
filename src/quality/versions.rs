use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::config::ScreenFilter;
use crate::screenly_client::{ScreenVersion, ScreenlyClient};
use crate::types::QaError;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VersionMismatch {
    pub id: String,
    pub name: String,
    pub hostname: String,
    pub reported: Option<String>,
}

impl fmt::Display for VersionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Screen {} ({}) has version {}",
            self.id,
            self.name,
            self.reported.as_deref().unwrap_or("unknown")
        )
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VersionReport {
    pub expected: String,
    pub checked: usize,
    pub mismatches: Vec<VersionMismatch>,
}

impl VersionReport {
    /// Screens without a report count as mismatched.
    pub fn from_screens(expected: &str, screens: Vec<ScreenVersion>) -> Self {
        let checked = screens.len();
        let mismatches = screens
            .into_iter()
            .filter(|screen| screen.client_version.as_deref() != Some(expected))
            .map(|screen| VersionMismatch {
                id: screen.id,
                name: screen.name,
                hostname: screen.hostname,
                reported: screen.client_version,
            })
            .collect();

        Self {
            expected: expected.to_string(),
            checked,
            mismatches,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

pub async fn check_client_versions(
    client: &ScreenlyClient,
    filter: &ScreenFilter,
    expected: &str,
) -> Result<VersionReport, QaError> {
    let screens = client.list_screen_versions(filter).await?;
    let report = VersionReport::from_screens(expected, screens);
    info!(
        expected,
        checked = report.checked,
        mismatched = report.mismatches.len(),
        "Checked client versions"
    );
    Ok(report)
}
