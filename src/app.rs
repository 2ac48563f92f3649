use thiserror::Error;
use tracing::{error, info};

use crate::cli::{Cli, Command, SyncArgs, VersionArgs};
use crate::config::{resolve_config_path, Config};
use crate::quality::{check_client_versions, PlaylistRotation, VersionReport};
use crate::screenly_client::{load_api_token, ScreenlyClient};
use crate::sync::{SyncError, SyncPoller};
use crate::types::QaError;

/// Why a command did not succeed.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Qa(#[from] QaError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(
        "{} of {} screen(s) are not running client version {}",
        .0.mismatches.len(),
        .0.checked,
        .0.expected
    )]
    VersionMismatch(VersionReport),
}

impl RunError {
    /// 1 when the command could not run, 2 when a check ran and failed.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Qa(_) | RunError::Sync(SyncError::FetchFailed { .. }) => 1,
            RunError::Sync(SyncError::Timeout(_)) | RunError::VersionMismatch(_) => 2,
        }
    }
}

pub async fn run(cli: Cli) -> Result<(), RunError> {
    let location = resolve_config_path(cli.config.as_deref());
    let mut config = Config::load(&location).await?;

    match cli.command {
        Command::Run(args) => {
            let client = prepare(&mut config, &args)?;
            info!("Creating new QC playlist...");
            PlaylistRotation::new(&client, &config.playlist)
                .rotate()
                .await?;
            wait_for_screens(&client, &config).await?;
            info!("Automated QC completed successfully! :)");
        }
        Command::WaitSync(args) => {
            let client = prepare(&mut config, &args)?;
            wait_for_screens(&client, &config).await?;
        }
        Command::CheckVersions(args) => check_versions(&config, &args).await?,
    }

    Ok(())
}

fn prepare(config: &mut Config, args: &SyncArgs) -> Result<ScreenlyClient, QaError> {
    args.apply(config);
    config.validate()?;
    let token = load_api_token(config)?;
    ScreenlyClient::new(config, token)
}

async fn wait_for_screens(client: &ScreenlyClient, config: &Config) -> Result<(), SyncError> {
    info!(
        max_attempts = config.sync.max_attempts,
        interval_secs = config.sync.interval_secs,
        "Waiting for screens to sync..."
    );
    let poller = SyncPoller::new(client, config.screens.clone());
    poller.wait_with_policy(&config.sync).await.inspect_err(|err| {
        if let SyncError::Timeout(timeout) = err {
            for screen in &timeout.pending {
                error!(
                    screen = %screen.name,
                    id = %screen.id,
                    status = %screen.status,
                    "Screen never reached sync"
                );
            }
        }
    })
}

async fn check_versions(config: &Config, args: &VersionArgs) -> Result<(), RunError> {
    let token = load_api_token(config)?;
    let client = ScreenlyClient::new(config, token)?;
    let report = check_client_versions(&client, &args.filter(), &args.client_version).await?;

    if report.is_clean() {
        info!(
            version = %report.expected,
            screens = report.checked,
            "All screens run the expected client version"
        );
        return Ok(());
    }

    for mismatch in &report.mismatches {
        error!("{mismatch}");
    }
    Err(RunError::VersionMismatch(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::SyncTimeout;

    #[test]
    fn exit_codes_separate_errors_from_failed_checks() {
        assert_eq!(RunError::from(QaError::MissingApiToken).exit_code(), 1);
        assert_eq!(
            RunError::from(SyncError::FetchFailed {
                attempt: 1,
                source: QaError::NoAssets,
            })
            .exit_code(),
            1
        );
        assert_eq!(
            RunError::from(SyncError::from(SyncTimeout {
                attempts: 10,
                pending: Vec::new(),
            }))
            .exit_code(),
            2
        );
        assert_eq!(
            RunError::VersionMismatch(VersionReport::from_screens("1.0", Vec::new())).exit_code(),
            2
        );
    }
}
