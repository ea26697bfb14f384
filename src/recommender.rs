use crate::error::{Result, TrackError};
use crate::genres;
use crate::spotify_handler::SpotifyClient;
use crate::types::Track;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Tracks returned per request unless configured otherwise.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// One recommended track, as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackResponse {
    pub artist: Option<String>,
    pub track: String,
    pub album_image_url: Option<String>,
    pub preview_url: Option<String>,
}

impl From<&Track> for TrackResponse {
    fn from(track: &Track) -> Self {
        TrackResponse {
            artist: track.artists.first().map(|a| a.name.clone()),
            track: track.name.clone(),
            album_image_url: track.album.images.first().map(|i| i.url.clone()),
            preview_url: track.preview_url.clone(),
        }
    }
}

/// Pick one artist for `genre` uniformly at random.
///
/// # Errors
/// Returns `TrackError::UnknownGenre` if the genre is not in the catalogue.
pub fn pick_artist<R: Rng + ?Sized>(genre: &str, rng: &mut R) -> Result<&'static str> {
    genres::artists_for(genre)
        .and_then(|artists| artists.choose(rng))
        .copied()
        .ok_or_else(|| TrackError::UnknownGenre(genre.to_string()))
}

/// Draw `k` tracks with replacement, keeping the order of the draws.
pub fn sample_tracks<'a, R: Rng + ?Sized>(
    items: &'a [Track],
    k: usize,
    rng: &mut R,
) -> Vec<&'a Track> {
    (0..k).filter_map(|_| items.choose(rng)).collect()
}

#[derive(Debug, Clone)]
pub struct TrackRecommender {
    client: SpotifyClient,
    search_limit: u32,
    sample_size: usize,
}

impl TrackRecommender {
    #[must_use]
    pub fn new(client: SpotifyClient, search_limit: u32, sample_size: usize) -> Self {
        TrackRecommender {
            client,
            search_limit,
            sample_size,
        }
    }

    /// Random tracks for a genre, seeded from the thread-local RNG.
    ///
    /// # Errors
    /// * `TrackError::UnknownGenre` - If the genre is not in the catalogue.
    /// * `TrackError::NoTracks` - If the artist search returned nothing.
    /// * Any error from [`SpotifyClient::search_artist_tracks`].
    pub async fn recommend(&self, genre: &str) -> Result<Vec<TrackResponse>> {
        // ThreadRng is not Send, so it must not live across the search.
        let mut rng = StdRng::from_rng(&mut rand::rng());
        self.recommend_with_rng(genre, &mut rng).await
    }

    /// Same as [`TrackRecommender::recommend`] with a caller-supplied RNG.
    ///
    /// # Errors
    /// See [`TrackRecommender::recommend`].
    pub async fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        genre: &str,
        rng: &mut R,
    ) -> Result<Vec<TrackResponse>> {
        let artist = pick_artist(genre, rng)?;
        let items = self.search(artist).await?;
        let sampled = sample_tracks(&items, self.sample_size, rng);

        Ok(sampled.into_iter().map(TrackResponse::from).collect())
    }

    async fn search(&self, artist: &str) -> Result<Vec<Track>> {
        info!(artist, limit = self.search_limit, "searching tracks");
        let items = self
            .client
            .search_artist_tracks(artist, self.search_limit)
            .await?;

        if items.is_empty() {
            return Err(TrackError::NoTracks(artist.to_string()));
        }
        Ok(items)
    }
}
