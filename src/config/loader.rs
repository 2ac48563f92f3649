use tokio::fs;
use tracing::{info, warn};

use crate::types::QaError;

use super::paths::ConfigLocation;
use super::Config;

impl Config {
    /// Load configuration from the resolved location.
    /// A missing file falls back to defaults unless the user named it explicitly.
    pub async fn load(location: &ConfigLocation) -> Result<Self, QaError> {
        let path = &location.path;

        if !fs::try_exists(path).await.unwrap_or(false) {
            if location.explicit {
                return Err(QaError::Config(format!(
                    "Config file {} does not exist",
                    path.display()
                )));
            }
            warn!(path = %path.display(), "Config file not found, using defaults");
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path).await.map_err(|err| {
            QaError::Config(format!("Failed to read {}: {err}", path.display()))
        })?;
        let config = Self::from_json(&contents)?;

        info!(
            path = %path.display(),
            api = %config.api_url,
            max_attempts = config.sync.max_attempts,
            interval_secs = config.sync.interval_secs,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(contents: &str) -> Result<Self, QaError> {
        let config: Config = serde_json::from_str(contents)
            .map_err(|err| QaError::Config(format!("Failed to parse config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), QaError> {
        if self.api_url.trim().is_empty() {
            return Err(QaError::Config("api_url must not be empty".to_string()));
        }
        if self.sync.max_attempts == 0 {
            return Err(QaError::Config(
                "sync.max_attempts must be at least 1".to_string(),
            ));
        }
        // An empty prefix would match every playlist in the account.
        if self.playlist.prefix.trim().is_empty() {
            return Err(QaError::Config(
                "playlist.prefix must not be empty".to_string(),
            ));
        }
        if self.playlist.asset_count == 0 {
            return Err(QaError::Config(
                "playlist.asset_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let config = Config::from_json(r#"{ "sync": { "max_attempts": 20 } }"#).unwrap();
        assert_eq!(config.sync.max_attempts, 20);
        assert_eq!(config.sync.interval_secs, 36);
        assert_eq!(config.playlist.prefix, "QC");
        assert_eq!(config.api_url, "https://api.screenlyapp.com");
        assert!(config.screens.enabled_only);
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let err = Config::from_json(r#"{ "sync": { "max_attempts": 0 } }"#).unwrap_err();
        assert!(matches!(err, QaError::Config(_)));
    }

    #[test]
    fn empty_prefix_is_rejected() {
        let err = Config::from_json(r#"{ "playlist": { "prefix": " " } }"#).unwrap_err();
        assert!(err.to_string().contains("playlist.prefix"));
    }

    #[tokio::test]
    async fn missing_implicit_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let location = ConfigLocation {
            path: dir.path().join("config.json"),
            explicit: false,
        };
        let config = Config::load(&location).await.unwrap();
        assert_eq!(config.sync, Default::default());
    }

    #[tokio::test]
    async fn missing_explicit_file_is_an_error() {
        let location = ConfigLocation {
            path: PathBuf::from("/nonexistent/screenly-qa.json"),
            explicit: true,
        };
        assert!(Config::load(&location).await.is_err());
    }

    #[tokio::test]
    async fn loads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qa.json");
        std::fs::write(
            &path,
            r#"{ "api_url": "http://localhost:9000", "screens": { "label": "candidate" } }"#,
        )
        .unwrap();

        let config = Config::load(&ConfigLocation {
            path,
            explicit: true,
        })
        .await
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:9000");
        assert_eq!(config.screens.label.as_deref(), Some("candidate"));
    }
}
