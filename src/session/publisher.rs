use std::fmt;

use async_trait::async_trait;

use crate::{
    spotify::{ApiError, CatalogApi},
    types::CreatePlaylistRequest,
    utils::{self, PLAYLIST_BATCH_SIZE},
};

use super::genre_map::GenreMap;

/// Asks the user to confirm an outward-facing action.
#[async_trait]
pub trait Confirm: Send {
    /// True when the user agreed to `prompt`.
    async fn confirm(&mut self, prompt: &str) -> bool;
}

/// Fixed answer, for `--yes` and tests.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl Confirm for AutoConfirm {
    async fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

/// Why no playlist was published.
#[derive(Debug)]
pub enum PublishError {
    /// Nobody is logged in.
    MissingToken,
    /// The genre has no tracks; refused before any request.
    EmptyGenre(String),
    /// The user declined the confirmation.
    Cancelled(String),
    /// `GET /me` failed.
    UserLookup(ApiError),
    /// Creating the playlist failed; no tracks were sent.
    CreatePlaylist { genre: String, source: ApiError },
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishError::MissingToken => write!(f, "No access token, please log in first."),
            PublishError::EmptyGenre(genre) => write!(f, "No songs found for {}", genre),
            PublishError::Cancelled(genre) => {
                write!(f, "Cancelled playlist creation for {}", genre)
            }
            PublishError::UserLookup(e) => write!(f, "Failed to resolve current user: {}", e),
            PublishError::CreatePlaylist { genre, .. } => {
                write!(f, "Failed to create playlist for {}", genre)
            }
        }
    }
}

impl std::error::Error for PublishError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PublishError::UserLookup(e) | PublishError::CreatePlaylist { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

/// Outcome of a published genre playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub genre: String,
    pub playlist_id: String,
    pub playlist_name: String,
    pub tracks: usize,
    pub batches: usize,
    /// Batches the API rejected. They are neither retried nor rolled back.
    pub failed_batches: usize,
}

impl PublishReport {
    pub fn status(&self) -> String {
        format!("Playlist created for {}! Check your Spotify.", self.genre)
    }
}

/// Private playlist named `<Genre> Playlist`.
pub fn playlist_request(genre: &str) -> CreatePlaylistRequest {
    CreatePlaylistRequest {
        name: format!("{} Playlist", genre),
        description: format!("Songs auto-organized into {}", genre),
        public: false,
    }
}

pub fn confirmation_prompt(genre: &str) -> String {
    format!("Are you sure you want to create a playlist for {}?", genre)
}

/// Creates a private `<Genre> Playlist` holding every track of `genre`.
///
/// Refuses without a client, refuses an empty genre before any request and
/// asks `confirm` before touching the account. Then resolves the user id,
/// creates the playlist and appends the tracks sequentially in batches of
/// at most [`PLAYLIST_BATCH_SIZE`] URIs.
///
/// # Arguments
///
/// * `api` - Catalog client, `None` when nobody is logged in
/// * `map` - Current genre map, source of the tracks
/// * `genre` - Genre to publish
/// * `confirm` - Asked once before anything is created
///
/// # Returns
///
/// A [`PublishReport`] once the playlist exists. Batches the API rejects are
/// counted in [`PublishReport::failed_batches`]; the remaining batches are
/// still sent.
///
/// # Errors
///
/// See [`PublishError`]. Each variant stops publishing at that step.
///
/// # Example
///
/// ```
/// let report = publish_genre(Some(&client), session.genre_map(), "Rock", &mut AutoConfirm(true)).await?;
/// println!("{}", report.status());
/// ```
pub async fn publish_genre<A, C>(
    api: Option<&A>,
    map: &GenreMap,
    genre: &str,
    confirm: &mut C,
) -> Result<PublishReport, PublishError>
where
    A: CatalogApi + ?Sized,
    C: Confirm + ?Sized,
{
    let Some(api) = api else {
        return Err(PublishError::MissingToken);
    };

    let tracks = map.get(genre).unwrap_or_default();
    if tracks.is_empty() {
        return Err(PublishError::EmptyGenre(genre.to_string()));
    }

    if !confirm.confirm(&confirmation_prompt(genre)).await {
        return Err(PublishError::Cancelled(genre.to_string()));
    }

    let user = api
        .current_user()
        .await
        .map_err(PublishError::UserLookup)?;

    let request = playlist_request(genre);
    let playlist = api
        .create_playlist(&user.id, &request)
        .await
        .map_err(|source| PublishError::CreatePlaylist {
            genre: genre.to_string(),
            source,
        })?;

    let uris: Vec<String> = tracks.iter().map(|t| utils::track_uri(&t.id)).collect();
    let mut batches = 0;
    let mut failed_batches = 0;
    for chunk in uris.chunks(PLAYLIST_BATCH_SIZE) {
        batches += 1;
        if api.add_tracks(&playlist.id, chunk).await.is_err() {
            failed_batches += 1;
        }
    }

    Ok(PublishReport {
        genre: genre.to_string(),
        playlist_id: playlist.id,
        playlist_name: request.name,
        tracks: uris.len(),
        batches,
        failed_batches,
    })
}
