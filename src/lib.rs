//! screenly-qa - quality control for Screenly screens.
//!
//! Rotates a disposable QA playlist across every screen, waits for the
//! screens to report in sync and checks deployed client versions.

pub mod app;
pub mod cli;
pub mod config;
pub mod quality;
pub mod screenly_client;
pub mod sync;
pub mod types;

pub use types::QaError;
