#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use genresort::{
    session::{Track, UNASSIGNED},
    spotify::{ApiError, CatalogApi},
    types::{
        AddTrackToPlaylistResponse, ApiAlbum, ApiArtist, ApiTrack, CreatePlaylistRequest,
        CreatePlaylistResponse, Image, SavedTrackItem, SavedTracksPage, UserProfile,
    },
};

pub fn track(id: &str, genre: &str) -> Track {
    let mut t = Track::new(id, format!("Song {id}"));
    t.artist = format!("Artist {id}");
    t.genre = genre.to_string();
    t
}

pub fn unassigned(ids: &[&str]) -> Vec<Track> {
    ids.iter().map(|id| track(id, UNASSIGNED)).collect()
}

pub fn api_track(id: &str) -> ApiTrack {
    ApiTrack {
        id: Some(id.to_string()),
        name: format!("Song {id}"),
        artists: vec![
            ApiArtist {
                name: format!("Artist {id}"),
            },
            ApiArtist {
                name: "Guest".to_string(),
            },
        ],
        album: Some(ApiAlbum {
            name: format!("Album {id}"),
            images: vec![Image {
                url: format!("https://img.example/{id}.jpg"),
            }],
        }),
    }
}

/// One page of saved tracks per entry; `Err(status)` fails that request.
pub type PageScript = Vec<Result<Vec<Option<ApiTrack>>, u16>>;

/// In-memory catalog that records every call it receives.
pub struct FakeCatalog {
    pages: PageScript,
    pub create_status: Option<u16>,
    pub failing_batches: Vec<usize>,
    pub calls: Mutex<Vec<String>>,
    pub created: Mutex<Vec<(String, CreatePlaylistRequest)>>,
    pub added: Mutex<Vec<Vec<String>>>,
}

impl FakeCatalog {
    pub fn new(pages: PageScript) -> Self {
        Self {
            pages,
            create_status: None,
            failing_batches: Vec::new(),
            calls: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn saved_tracks_page(&self, next: Option<&str>) -> Result<SavedTracksPage, ApiError> {
        let index = match next {
            None => 0,
            Some(url) => url
                .trim_start_matches("page-")
                .parse::<usize>()
                .unwrap_or(usize::MAX),
        };
        self.record(format!("tracks:{index}"));

        match self.pages.get(index) {
            Some(Ok(items)) => Ok(SavedTracksPage {
                items: items
                    .iter()
                    .cloned()
                    .map(|track| SavedTrackItem { track })
                    .collect(),
                next: (index + 1 < self.pages.len()).then(|| format!("page-{}", index + 1)),
                total: None,
            }),
            Some(Err(status)) => Err(ApiError::Status {
                status: *status,
                body: String::new(),
            }),
            None => Err(ApiError::Status {
                status: 404,
                body: "no such page".to_string(),
            }),
        }
    }

    async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.record("me");
        Ok(UserProfile {
            id: "listener".to_string(),
            display_name: None,
        })
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse, ApiError> {
        self.record(format!("create:{user_id}"));
        if let Some(status) = self.create_status {
            return Err(ApiError::Status {
                status,
                body: String::new(),
            });
        }
        self.created
            .lock()
            .unwrap()
            .push((user_id.to_string(), request.clone()));
        Ok(CreatePlaylistResponse {
            id: "pl1".to_string(),
            name: request.name.clone(),
        })
    }

    async fn add_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<AddTrackToPlaylistResponse, ApiError> {
        let batch = {
            let mut added = self.added.lock().unwrap();
            added.push(uris.to_vec());
            added.len() - 1
        };
        self.record(format!("add:{playlist_id}:{}", uris.len()));
        if self.failing_batches.contains(&batch) {
            return Err(ApiError::Status {
                status: 500,
                body: String::new(),
            });
        }
        Ok(AddTrackToPlaylistResponse {
            snapshot_id: format!("snap{batch}"),
        })
    }
}
