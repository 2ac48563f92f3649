use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::{Config, ScreenFilter};
use crate::types::QaError;

use super::api::{
    AssetRecord, AssetsQuery, NewPlaylist, ScreenVersionRecord, ScreensQuery,
    SCREEN_STATUS_FIELDS, SCREEN_VERSION_FIELDS,
};
use super::models::{Playlist, Screen, ScreenVersion};

const SCREENS_PATH: &str = "/api/v4.1/screens";
const ASSETS_PATH: &str = "/api/v4/assets";
const PLAYLISTS_PATH: &str = "/api/v3/playlists/";

#[derive(Clone)]
pub struct ScreenlyClient {
    api_token: String,
    http: Client,
    base_url: String,
}

impl ScreenlyClient {
    /// Prepare an HTTP client for the configured API endpoint.
    pub fn new(config: &Config, api_token: impl Into<String>) -> Result<Self, QaError> {
        let mut builder = Client::builder();
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }
        let http = builder.build()?;

        Ok(Self {
            api_token: api_token.into(),
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current sync state of every screen matching `filter`.
    pub async fn list_screens(&self, filter: &ScreenFilter) -> Result<Vec<Screen>, QaError> {
        let query = ScreensQuery::new(SCREEN_STATUS_FIELDS, filter);
        self.get_json_with_query(SCREENS_PATH, &query).await
    }

    /// Reported client software version of every screen matching `filter`.
    pub async fn list_screen_versions(
        &self,
        filter: &ScreenFilter,
    ) -> Result<Vec<ScreenVersion>, QaError> {
        let query = ScreensQuery::new(SCREEN_VERSION_FIELDS, filter);
        let records: Vec<ScreenVersionRecord> =
            self.get_json_with_query(SCREENS_PATH, &query).await?;
        Ok(records.into_iter().map(ScreenVersion::from).collect())
    }

    /// Ids of all assets that can be placed in a playlist.
    pub async fn list_asset_ids(&self) -> Result<Vec<String>, QaError> {
        let assets: Vec<AssetRecord> = self
            .get_json_with_query(ASSETS_PATH, &AssetsQuery::default())
            .await?;
        Ok(assets.into_iter().map(|asset| asset.id).collect())
    }

    pub async fn list_playlists(&self) -> Result<Vec<Playlist>, QaError> {
        self.get_json(PLAYLISTS_PATH).await
    }

    pub async fn create_playlist(&self, playlist: &NewPlaylist) -> Result<(), QaError> {
        let response = self
            .request(Method::POST, PLAYLISTS_PATH)
            .json(playlist)
            .send()
            .await?;
        ensure_success(PLAYLISTS_PATH, response).await?;
        Ok(())
    }

    pub async fn delete_playlist(&self, playlist_id: &str) -> Result<(), QaError> {
        let path = format!("{PLAYLISTS_PATH}{playlist_id}/");
        let response = self.request(Method::DELETE, &path).send().await?;
        ensure_success(&path, response).await?;
        Ok(())
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, QaError>
    where
        T: DeserializeOwned,
    {
        self.get_json_with_query(path, &()).await
    }

    async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, QaError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.request(Method::GET, path).query(query).send().await?;
        let response = ensure_success(path, response).await?;
        Ok(response.json::<T>().await?)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%method, %url, "Sending request");
        self.http
            .request(method, url)
            .header("Authorization", format!("Token {}", self.api_token))
            .header("Content-Type", "application/json")
    }
}

async fn ensure_success(path: &str, response: Response) -> Result<Response, QaError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(QaError::api(path, status.as_u16(), body.trim()))
}
