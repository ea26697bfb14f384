use crate::env_parser::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error body returned by the Spotify Web API: `{"error": {"status", "message"}}`.
#[derive(Debug, Deserialize, Serialize)]
pub struct SpotifyErrorResponse {
    pub error: SpotifyErrorDetail,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SpotifyErrorDetail {
    pub status: u16,
    pub message: String,
}

/// Error body returned by the accounts service token endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct AuthErrorResponse {
    pub error: String,
    pub error_description: Option<String>,
}

impl fmt::Display for SpotifyErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error.status, self.error.message)
    }
}

impl fmt::Display for AuthErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_description {
            Some(description) => write!(f, "{} ({description})", self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    /// Spotify Web API error with status and message
    #[error("Spotify API error {0}")]
    Api(SpotifyErrorResponse),
    /// Client-credentials token request rejected
    #[error("Spotify authentication error: {0}")]
    Auth(AuthErrorResponse),
    /// HTTP/network errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// JSON parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV rendering errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Invalid or missing configuration value
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigurationError),
    /// Missing required environment variables
    #[error(
        "Missing required environment variable: {0}\n\
         Please set it in your environment or .env file"
    )]
    MissingEnvVar(String),
    /// Genre absent from the catalogue
    #[error("Genre not found: {0}")]
    UnknownGenre(String),
    /// Search for an artist came back empty
    #[error("No tracks found for artist: {0}")]
    NoTracks(String),
    #[error("Error: {0}")]
    Other(String),
}

/// Helper type for Result with `TrackError`
pub type Result<T> = std::result::Result<T, TrackError>;
