use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, ScreenFilter};

#[derive(Debug, Parser)]
#[command(
    name = "screenly-qa",
    version,
    about = "Quality control for Screenly screens"
)]
pub struct Cli {
    /// Path to a JSON config file (defaults to $SCREENLY_QA_CONFIG or ./config.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replace the QA playlist and wait for every screen to sync
    Run(SyncArgs),
    /// Only wait for every screen to sync
    WaitSync(SyncArgs),
    /// Compare deployed client versions against an expected version
    CheckVersions(VersionArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Number of polling rounds before giving up
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Seconds to wait between polling rounds
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,

    #[command(flatten)]
    pub screens: ScreenArgs,
}

impl SyncArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(max_attempts) = self.max_attempts {
            config.sync.max_attempts = max_attempts;
        }
        if let Some(interval) = self.interval {
            config.sync.interval_secs = interval;
        }
        self.screens.apply(&mut config.screens);
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ScreenArgs {
    /// Only include screens with this label
    #[arg(long)]
    pub label: Option<String>,

    /// Only include screens of this type (e.g. "hardware")
    #[arg(long)]
    pub hardware_type: Option<String>,

    /// Also include disabled screens
    #[arg(long)]
    pub include_disabled: bool,
}

impl ScreenArgs {
    pub fn apply(&self, filter: &mut ScreenFilter) {
        if let Some(label) = &self.label {
            filter.label = Some(label.clone());
        }
        if let Some(hardware_type) = &self.hardware_type {
            filter.hardware_type = Some(hardware_type.clone());
        }
        if self.include_disabled {
            filter.enabled_only = false;
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct VersionArgs {
    /// Version every selected screen is expected to run
    #[arg(long)]
    pub client_version: String,

    #[arg(long, default_value = "candidate")]
    pub label: String,

    #[arg(long, default_value = "hardware")]
    pub hardware_type: String,
}

impl VersionArgs {
    pub fn filter(&self) -> ScreenFilter {
        ScreenFilter {
            enabled_only: true,
            hardware_type: Some(self.hardware_type.clone()),
            label: Some(self.label.clone()),
        }
    }
}
