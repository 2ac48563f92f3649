use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::screenly_client::Screen;
use crate::types::QaError;

/// A screen that has not reported in sync during the current session.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PendingScreen {
    pub id: String,
    pub name: String,
    pub hostname: String,
    pub status: String,
}

impl From<&Screen> for PendingScreen {
    fn from(screen: &Screen) -> Self {
        Self {
            id: screen.id.clone(),
            name: screen.display_name().to_string(),
            hostname: screen.hostname.clone(),
            status: screen.status.clone(),
        }
    }
}

/// Result of a single poll round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollOutcome {
    pub settled: usize,
    pub pending: Vec<PendingScreen>,
}

impl PollOutcome {
    /// Classify a snapshot. Screens reporting in sync are added to
    /// `settled`; screens already in `settled` are never pending again.
    pub fn evaluate(screens: &[Screen], settled: &mut HashSet<String>) -> Self {
        let mut outcome = Self::default();
        for screen in screens {
            if screen.in_sync {
                settled.insert(screen.id.clone());
            }
            if settled.contains(&screen.id) {
                outcome.settled += 1;
            } else {
                outcome.pending.push(PendingScreen::from(screen));
            }
        }
        outcome
    }

    pub fn is_settled(&self) -> bool {
        self.pending.is_empty()
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{} screen(s) still out of sync after {attempts} attempt(s)", .pending.len())]
pub struct SyncTimeout {
    pub attempts: u32,
    pub pending: Vec<PendingScreen>,
}

#[derive(Debug, Error)]
pub enum SyncError {
    /// The status query failed; never retried.
    #[error("unable to fetch screens (attempt {attempt}): {source}")]
    FetchFailed {
        attempt: u32,
        #[source]
        source: QaError,
    },

    #[error(transparent)]
    Timeout(#[from] SyncTimeout),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(id: &str, in_sync: bool) -> Screen {
        Screen {
            id: id.to_string(),
            name: format!("Screen {id}"),
            hostname: format!("srly-{id}"),
            status: if in_sync { "Online" } else { "Offline" }.to_string(),
            in_sync,
        }
    }

    #[test]
    fn splits_snapshot_into_settled_and_pending() {
        let mut settled = HashSet::new();
        let outcome = PollOutcome::evaluate(
            &[screen("a", true), screen("b", false), screen("c", false)],
            &mut settled,
        );

        assert_eq!(outcome.settled, 1);
        let pending: Vec<_> = outcome.pending.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(pending, ["b", "c"]);
        assert_eq!(outcome.pending[0].status, "Offline");
        assert!(!outcome.is_settled());
    }

    #[test]
    fn settled_screens_stay_settled_for_the_session() {
        let mut settled = HashSet::new();
        PollOutcome::evaluate(&[screen("a", true), screen("b", false)], &mut settled);

        let outcome =
            PollOutcome::evaluate(&[screen("a", false), screen("b", true)], &mut settled);
        assert!(outcome.is_settled());
        assert_eq!(outcome.settled, 2);
    }

    #[test]
    fn empty_snapshot_is_settled() {
        let outcome = PollOutcome::evaluate(&[], &mut HashSet::new());
        assert!(outcome.is_settled());
    }

    #[test]
    fn timeout_message_counts_pending() {
        let timeout = SyncTimeout {
            attempts: 3,
            pending: vec![PendingScreen::from(&screen("a", false))],
        };
        assert_eq!(
            timeout.to_string(),
            "1 screen(s) still out of sync after 3 attempt(s)"
        );
    }
}
