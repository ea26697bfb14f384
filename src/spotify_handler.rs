use crate::error::{AuthErrorResponse, Result, SpotifyErrorResponse, TrackError};
use crate::types::{TokenResponse, Track, TrackSearchResponse};
use crate::url_builder::{QueryParams, Url};

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub const API_URL: &str = "https://api.spotify.com";
pub const ACCOUNTS_URL: &str = "https://accounts.spotify.com";

/// Largest page the search endpoint serves.
pub const API_MAX_LIMIT: u32 = 50;

/// Tokens are refreshed this long before Spotify says they expire.
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    api_url: Url,
    accounts_url: Url,
    client_id: String,
    client_secret: String,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl SpotifyClient {
    /// Creates a client against the public Spotify endpoints.
    ///
    /// # Arguments
    /// * `client_id` - Application client id.
    /// * `client_secret` - Application client secret.
    #[must_use]
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self::with_base_urls(client_id, client_secret, API_URL, ACCOUNTS_URL)
    }

    /// Creates a client against custom endpoints (proxies, test servers).
    #[must_use]
    pub fn with_base_urls(
        client_id: &str,
        client_secret: &str,
        api_url: &str,
        accounts_url: &str,
    ) -> Self {
        SpotifyClient {
            http: reqwest::Client::new(),
            api_url: Url::new(api_url),
            accounts_url: Url::new(accounts_url),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// Search the catalog for tracks.
    ///
    /// # Arguments
    /// * `query` - Search query, field filters allowed (`artist:Adele`).
    /// * `limit` - Page size, clamped to `1..=API_MAX_LIMIT`.
    ///
    /// # Errors
    /// * `TrackError::Auth` - If the token request is rejected.
    /// * `TrackError::Api` - If the search request is rejected.
    /// * `TrackError::Http` - On network or decoding failures.
    pub async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        let limit = limit.clamp(1, API_MAX_LIMIT);
        let params: QueryParams = vec![
            ("q".to_string(), query.to_string()),
            ("type".to_string(), "track".to_string()),
            ("limit".to_string(), limit.to_string()),
        ];

        let response: TrackSearchResponse = self.fetch("v1/search", params).await?;
        debug!(query, found = response.tracks.items.len(), "search finished");

        Ok(response.tracks.items)
    }

    /// Search for tracks by a single artist.
    ///
    /// # Errors
    /// See [`SpotifyClient::search_tracks`].
    pub async fn search_artist_tracks(&self, artist: &str, limit: u32) -> Result<Vec<Track>> {
        self.search_tracks(&format!("artist:{artist}"), limit).await
    }

    /// Fetch data from the Web API with a bearer token.
    ///
    /// # Arguments
    /// * `path` - Endpoint path below the API root.
    /// * `params` - Query parameters.
    ///
    /// # Returns
    /// * `Result<T>` - The decoded response.
    async fn fetch<T: DeserializeOwned>(&self, path: &str, params: QueryParams) -> Result<T> {
        let token = self.access_token().await?;
        let url = self.api_url.clone().join(path).add_args(params).build();

        let response = self.http.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            let error: SpotifyErrorResponse = response.json().await?;
            return Err(TrackError::Api(error));
        }

        let parsed_response = response.json::<T>().await?;
        Ok(parsed_response)
    }

    /// Return a valid access token, requesting a new one when the cached
    /// token is missing or about to expire.
    ///
    /// # Errors
    /// * `TrackError::Auth` - If the accounts service rejects the credentials.
    pub async fn access_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Utc::now())) {
            return Ok(token.access_token.clone());
        }

        info!("requesting Spotify access token");
        let url = self.accounts_url.clone().join("api/token").build();
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            let error: AuthErrorResponse = response.json().await?;
            return Err(TrackError::Auth(error));
        }

        let token: TokenResponse = response.json().await?;
        let lifetime = (token.expires_in - TOKEN_EXPIRY_MARGIN_SECS).max(0);
        let access_token = token.access_token;
        *cached = Some(CachedToken {
            access_token: access_token.clone(),
            expires_at: Utc::now() + Duration::seconds(lifetime),
        });

        Ok(access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_freshness() {
        let now = Utc::now();
        let token = CachedToken {
            access_token: "abc".to_string(),
            expires_at: now + Duration::seconds(10),
        };
        assert!(token.is_fresh(now));
        assert!(!token.is_fresh(now + Duration::seconds(10)));
    }
}
