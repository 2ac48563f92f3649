use async_trait::async_trait;

use crate::config::ScreenFilter;
use crate::screenly_client::{Screen, ScreenlyClient};
use crate::types::QaError;

/// Source of screen sync state.
///
/// Every call must return a fresh snapshot. An `Err` means the query
/// itself failed, as opposed to screens that are merely not in sync yet.
#[async_trait]
pub trait ScreenStatusProvider: Send + Sync {
    async fn fetch_screens(&self, filter: &ScreenFilter) -> Result<Vec<Screen>, QaError>;
}

#[async_trait]
impl ScreenStatusProvider for ScreenlyClient {
    async fn fetch_screens(&self, filter: &ScreenFilter) -> Result<Vec<Screen>, QaError> {
        self.list_screens(filter).await
    }
}

#[async_trait]
impl<T> ScreenStatusProvider for &T
where
    T: ScreenStatusProvider + ?Sized,
{
    async fn fetch_screens(&self, filter: &ScreenFilter) -> Result<Vec<Screen>, QaError> {
        (**self).fetch_screens(filter).await
    }
}
