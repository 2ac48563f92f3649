use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

pub const CONFIG_PATH_ENV: &str = "SCREENLY_QA_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Where the config file was found and whether the user asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub explicit: bool,
}

/// Resolve the config file location.
/// The `--config` flag wins, then `SCREENLY_QA_CONFIG`, then `config.json`
/// in the working directory.
pub fn resolve_config_path(flag: Option<&Path>) -> ConfigLocation {
    resolve_with_env(flag, env::var(CONFIG_PATH_ENV).ok())
}

pub(super) fn resolve_with_env(flag: Option<&Path>, env_value: Option<String>) -> ConfigLocation {
    if let Some(path) = flag {
        debug!(path = %path.display(), "Using config path from command line");
        return ConfigLocation {
            path: path.to_path_buf(),
            explicit: true,
        };
    }

    if let Some(value) = env_value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            debug!(path = %trimmed, "Using config path from {CONFIG_PATH_ENV}");
            return ConfigLocation {
                path: PathBuf::from(trimmed),
                explicit: true,
            };
        }
    }

    ConfigLocation {
        path: PathBuf::from(DEFAULT_CONFIG_FILE),
        explicit: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_environment() {
        let location = resolve_with_env(
            Some(Path::new("/etc/qa.json")),
            Some("/tmp/other.json".to_string()),
        );
        assert_eq!(location.path, PathBuf::from("/etc/qa.json"));
        assert!(location.explicit);
    }

    #[test]
    fn blank_environment_falls_back_to_default() {
        let location = resolve_with_env(None, Some("  ".to_string()));
        assert_eq!(location.path, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert!(!location.explicit);
    }

    #[test]
    fn environment_path_is_explicit() {
        let location = resolve_with_env(None, Some("/srv/qa.json".to_string()));
        assert_eq!(location.path, PathBuf::from("/srv/qa.json"));
        assert!(location.explicit);
    }
}
