use serde::{Deserialize, Serialize};

// AUTH SCHEMAS ===============================================================
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

// CATALOG SCHEMAS ============================================================
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimplifiedArtist {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimplifiedAlbum {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Track {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    pub preview_url: Option<String>,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    pub album: SimplifiedAlbum,
}

// SEARCH SCHEMAS =============================================================
#[derive(Serialize, Deserialize, Debug)]
pub struct Paging<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub total: u32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TrackSearchResponse {
    pub tracks: Paging<Track>,
}
