//! Waiting for screens to apply the latest playlist.

mod outcome;
mod poller;
mod provider;

pub use outcome::{PendingScreen, PollOutcome, SyncError, SyncTimeout};
pub use poller::SyncPoller;
pub use provider::ScreenStatusProvider;
