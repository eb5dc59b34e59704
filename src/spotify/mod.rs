//! # Spotify Integration Module
//!
//! Thin client for the handful of Spotify Web API endpoints the genre sorter
//! needs. All calls are bearer-authenticated with the token captured at login.
//!
//! ```text
//! Session Layer (loader, publisher)
//!          ↓
//! CatalogApi trait
//!          ↓
//! SpotifyClient (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Submodules
//!
//! - [`auth`] - implicit-grant login: authorize URL, redirect catcher, token storage
//! - [`tracks`] - `GET /me/tracks`, paginated through server supplied `next` links
//! - [`user`] - `GET /me` for the current user's id
//! - [`playlist`] - `POST /users/{id}/playlists` and `POST /playlists/{id}/tracks`
//!
//! ## Error Handling
//!
//! Every call maps failures onto [`ApiError`]. Nothing is retried: a failed
//! request is reported to the caller, which decides whether to abort or keep
//! going.
//!
//! The session layer only talks to [`CatalogApi`], so tests substitute an
//! in-memory fake for [`SpotifyClient`].

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::types::{
    AddTrackToPlaylistResponse, CreatePlaylistRequest, CreatePlaylistResponse, SavedTracksPage,
    UserProfile,
};

pub mod auth;
pub mod playlist;
pub mod tracks;
pub mod user;

/// Failure of a single Web API request.
#[derive(Debug)]
pub enum ApiError {
    /// Transport failure or an undecodable body.
    Request(reqwest::Error),
    /// The API answered with a non-success status.
    Status { status: u16, body: String },
}

impl ApiError {
    /// HTTP status of the failed request, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            ApiError::Status { status, .. } => Some(*status),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(e) => write!(f, "request failed: {}", e),
            ApiError::Status { status, body } if body.is_empty() => write!(f, "{}", status),
            ApiError::Status { status, body } => write!(f, "{} {}", status, body),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Request(err)
    }
}

/// The remote catalog operations used by the loader and the publisher.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetches one page of saved tracks. `None` requests the first page,
    /// `Some(url)` follows a `next` link from a previous page.
    async fn saved_tracks_page(&self, next: Option<&str>) -> Result<SavedTracksPage, ApiError>;

    /// Profile of the logged-in user; its id owns new playlists.
    async fn current_user(&self) -> Result<UserProfile, ApiError>;

    /// Creates a playlist owned by `user_id`.
    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse, ApiError>;

    /// Appends at most 100 `spotify:track:<id>` URIs to a playlist.
    async fn add_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<AddTrackToPlaylistResponse, ApiError>;
}

/// reqwest-backed [`CatalogApi`] bound to one access token.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    client: Client,
    base_url: String,
    token: String,
}

impl SpotifyClient {
    /// Client for the Web API at `base_url` authenticated with `token`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root such as `https://api.spotify.com/v1`; a
    ///   trailing slash is dropped
    /// * `token` - Bearer access token captured at login
    ///
    /// # Example
    ///
    /// ```
    /// let client = SpotifyClient::new(config::spotify_apiurl(), manager.access_token());
    /// let page = client.get_saved_tracks(None).await?;
    /// ```
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

/// Turns a non-success response into [`ApiError::Status`], keeping the body
/// text for diagnostics.
pub(crate) async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or_default().to_string());
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl CatalogApi for SpotifyClient {
    async fn saved_tracks_page(&self, next: Option<&str>) -> Result<SavedTracksPage, ApiError> {
        self.get_saved_tracks(next).await
    }

    async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get_current_user().await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse, ApiError> {
        self.create_user_playlist(user_id, request).await
    }

    async fn add_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<AddTrackToPlaylistResponse, ApiError> {
        self.add_playlist_tracks(playlist_id, uris).await
    }
}
