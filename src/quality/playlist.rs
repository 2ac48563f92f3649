//! QA playlist rotation.
//!
//! Every run replaces the previous QA playlists with a new one built from
//! random assets, which forces every screen to pull fresh content.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{error, info, warn};

use crate::config::PlaylistSettings;
use crate::screenly_client::{
    qa_playlist_title, NewPlaylist, PlaylistAsset, PlaylistGroup, ScreenlyClient,
};
use crate::types::QaError;

pub struct PlaylistRotation<'a> {
    client: &'a ScreenlyClient,
    settings: &'a PlaylistSettings,
}

impl<'a> PlaylistRotation<'a> {
    pub fn new(client: &'a ScreenlyClient, settings: &'a PlaylistSettings) -> Self {
        Self { client, settings }
    }

    /// Delete the old QA playlists and publish a new one.
    /// Returns the title of the created playlist.
    pub async fn rotate(&self) -> Result<String, QaError> {
        let removed = self.remove_previous().await?;
        info!(removed, "Cleaned up old QC playlists");

        let asset_ids = self
            .client
            .list_asset_ids()
            .await
            .inspect_err(|err| error!(error = %err, "Unable to fetch assets"))?;
        let assets = pick_assets(
            &asset_ids,
            self.settings.asset_count,
            self.settings.asset_duration_secs,
            &mut rand::thread_rng(),
        )?;

        let playlist = self.new_playlist(assets, Utc::now());
        info!(
            title = %playlist.title,
            assets = playlist.assets.len(),
            "Creating new QC playlist"
        );
        self.client
            .create_playlist(&playlist)
            .await
            .inspect_err(|err| error!(error = %err, "Unable to create playlist"))?;

        Ok(playlist.title)
    }

    /// Delete every playlist whose title carries the QA prefix.
    /// Failing to list playlists is fatal; a failed delete is only logged.
    pub async fn remove_previous(&self) -> Result<usize, QaError> {
        let playlists = self
            .client
            .list_playlists()
            .await
            .inspect_err(|err| error!(error = %err, "Unable to fetch playlists"))?;

        let mut removed = 0;
        for playlist in playlists
            .iter()
            .filter(|playlist| playlist.has_prefix(&self.settings.prefix))
        {
            match self.client.delete_playlist(&playlist.id).await {
                Ok(()) => {
                    info!(id = %playlist.id, title = %playlist.title, "Deleted QC playlist");
                    removed += 1;
                }
                Err(err) => {
                    warn!(
                        id = %playlist.id,
                        title = %playlist.title,
                        error = %err,
                        "Failed to delete QC playlist"
                    );
                }
            }
        }

        Ok(removed)
    }

    fn new_playlist(&self, assets: Vec<PlaylistAsset>, now: DateTime<Utc>) -> NewPlaylist {
        NewPlaylist {
            title: qa_playlist_title(&self.settings.prefix, now),
            groups: vec![PlaylistGroup {
                id: self.settings.group_id.clone(),
            }],
            is_enabled: true,
            assets,
            predicate: "TRUE".to_string(),
        }
    }
}

/// Draw `count` assets uniformly at random, with replacement.
pub fn pick_assets<R>(
    asset_ids: &[String],
    count: usize,
    duration: u32,
    rng: &mut R,
) -> Result<Vec<PlaylistAsset>, QaError>
where
    R: Rng + ?Sized,
{
    if asset_ids.is_empty() {
        return Err(QaError::NoAssets);
    }

    Ok((0..count)
        .filter_map(|_| asset_ids.choose(rng))
        .map(|id| PlaylistAsset {
            id: id.clone(),
            duration,
        })
        .collect())
}
