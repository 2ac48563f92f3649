use std::env;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::config::Config;
use crate::types::QaError;

pub const API_TOKEN_ENV: &str = "SCREENLY_API_TOKEN";

/// Deserialize an explicit `null` as the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Resolve the API token: environment first, then the config file.
pub fn load_api_token(config: &Config) -> Result<String, QaError> {
    pick_api_token(env::var(API_TOKEN_ENV).ok(), config.api_token.as_deref())
}

fn pick_api_token(from_env: Option<String>, from_config: Option<&str>) -> Result<String, QaError> {
    if let Some(value) = from_env {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    from_config
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(QaError::MissingApiToken)
}

pub fn qa_playlist_title(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{} {}", prefix, now.format("%Y-%m-%d @ %H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("env-token"), Some("file-token"), Some("env-token"))]
    #[case(Some("  "), Some("file-token"), Some("file-token"))]
    #[case(None, Some(" file-token "), Some("file-token"))]
    #[case(None, Some(""), None)]
    #[case(None, None, None)]
    fn token_precedence(
        #[case] from_env: Option<&str>,
        #[case] from_config: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let result = pick_api_token(from_env.map(str::to_string), from_config);
        match expected {
            Some(token) => assert_eq!(result.unwrap(), token),
            None => assert!(matches!(result, Err(QaError::MissingApiToken))),
        }
    }

    #[test]
    fn playlist_title_uses_utc_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(qa_playlist_title("QC", now), "QC 2024-03-09 @ 07:05:01");
    }
}
