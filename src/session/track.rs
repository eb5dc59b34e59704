use crate::types::ApiTrack;

use super::genre::UNASSIGNED;

/// A saved track under review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub name: String,
    /// Artist names joined by ", ".
    pub artist: String,
    pub album: String,
    /// First album image, empty when the album has none.
    pub cover: String,
    /// Current genre label, `Unassigned` until the user files the track.
    pub genre: String,
}

impl Track {
    /// Bare `Unassigned` track without artist, album or cover.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            artist: String::new(),
            album: String::new(),
            cover: String::new(),
            genre: UNASSIGNED.to_string(),
        }
    }

    /// Builds a track from the API shape. Tracks without an id (local files)
    /// cannot be persisted or added to playlists and are skipped.
    pub fn from_api(track: ApiTrack) -> Option<Self> {
        let id = track.id.filter(|id| !id.is_empty())?;
        let artist = track
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let (album, cover) = match track.album {
            Some(album) => {
                let cover = album
                    .images
                    .first()
                    .map(|i| i.url.clone())
                    .unwrap_or_default();
                (album.name, cover)
            }
            None => (String::new(), String::new()),
        };

        Some(Self {
            id,
            name: track.name,
            artist,
            album,
            cover,
            genre: UNASSIGNED.to_string(),
        })
    }

    /// True for the default label, including an empty one.
    pub fn is_unassigned(&self) -> bool {
        self.genre.is_empty() || self.genre == UNASSIGNED
    }
}
