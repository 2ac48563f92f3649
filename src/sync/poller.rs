use std::collections::HashSet;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::{ScreenFilter, SyncPolicy};

use super::outcome::{PollOutcome, SyncError, SyncTimeout};
use super::provider::ScreenStatusProvider;

/// Waits until every screen selected by a filter reports in sync.
pub struct SyncPoller<P> {
    provider: P,
    filter: ScreenFilter,
}

impl<P> SyncPoller<P>
where
    P: ScreenStatusProvider,
{
    pub fn new(provider: P, filter: ScreenFilter) -> Self {
        Self { provider, filter }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn wait_with_policy(&self, policy: &SyncPolicy) -> Result<(), SyncError> {
        self.wait_for_sync(policy.max_attempts, policy.interval())
            .await
    }

    /// Poll up to `max_attempts` rounds, sleeping `interval` between them.
    ///
    /// A failed fetch ends the wait immediately with
    /// [`SyncError::FetchFailed`]; only out-of-sync screens are retried.
    /// `max_attempts` of zero is treated as a single round.
    pub async fn wait_for_sync(
        &self,
        max_attempts: u32,
        interval: Duration,
    ) -> Result<(), SyncError> {
        let max_attempts = max_attempts.max(1);
        let mut settled = HashSet::new();
        let mut attempt = 0;

        loop {
            attempt += 1;

            let screens = self
                .provider
                .fetch_screens(&self.filter)
                .await
                .map_err(|source| SyncError::FetchFailed { attempt, source })?;

            let outcome = PollOutcome::evaluate(&screens, &mut settled);
            info!(
                attempt,
                max_attempts,
                screens = screens.len(),
                pending = outcome.pending.len(),
                "...waiting for screen(s) to sync"
            );

            if outcome.is_settled() {
                info!(attempt, screens = screens.len(), "All screens in sync");
                return Ok(());
            }

            for screen in &outcome.pending {
                warn!(
                    attempt,
                    screen = %screen.name,
                    id = %screen.id,
                    status = %screen.status,
                    "Screen not in sync"
                );
            }

            if attempt >= max_attempts {
                return Err(SyncTimeout {
                    attempts: attempt,
                    pending: outcome.pending,
                }
                .into());
            }

            sleep(interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::screenly_client::Screen;
    use crate::types::QaError;

    struct AlwaysPending {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ScreenStatusProvider for AlwaysPending {
        async fn fetch_screens(&self, _filter: &ScreenFilter) -> Result<Vec<Screen>, QaError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Screen {
                id: "s1".to_string(),
                name: "Lobby".to_string(),
                hostname: String::new(),
                status: "Offline".to_string(),
                in_sync: false,
            }])
        }
    }

    #[tokio::test(start_paused = true)]
    async fn zero_attempts_runs_a_single_round() {
        let poller = SyncPoller::new(
            AlwaysPending {
                calls: AtomicUsize::new(0),
            },
            ScreenFilter::default(),
        );

        let err = poller
            .wait_for_sync(0, Duration::from_secs(5))
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::Timeout(SyncTimeout { attempts: 1, .. })));
        assert_eq!(poller.provider().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn offline_screens_are_pending() {
        let poller = SyncPoller::new(
            AlwaysPending {
                calls: AtomicUsize::new(0),
            },
            ScreenFilter::default(),
        );

        match poller.wait_for_sync(2, Duration::from_secs(1)).await {
            Err(SyncError::Timeout(timeout)) => {
                assert_eq!(timeout.pending.len(), 1);
                assert_eq!(timeout.pending[0].status, "Offline");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
