mod common;

use common::{FakeCatalog, track, unassigned};
use genresort::{
    session::{AutoConfirm, Confirm, GenreMap, PublishError, Session, publish_genre},
    types::CreatePlaylistRequest,
};

struct RecordingConfirm {
    answer: bool,
    prompts: Vec<String>,
}

#[async_trait::async_trait]
impl Confirm for RecordingConfirm {
    async fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answer
    }
}

fn rock_tracks(n: usize) -> GenreMap {
    let tracks: Vec<_> = (0..n).map(|i| track(&format!("t{i}"), "Rock")).collect();
    GenreMap::build(&tracks)
}

#[tokio::test]
async fn test_empty_genre_is_refused_before_network() {
    let api = FakeCatalog::empty();
    let session = Session::with_tracks(unassigned(&["1", "2"]));

    let err = publish_genre(Some(&api), session.genre_map(), "Rock", &mut AutoConfirm(true))
        .await
        .unwrap_err();

    assert!(matches!(err, PublishError::EmptyGenre(ref g) if g == "Rock"));
    assert_eq!(err.to_string(), "No songs found for Rock");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_missing_token_is_refused() {
    let err = publish_genre::<FakeCatalog, _>(None, &rock_tracks(1), "Rock", &mut AutoConfirm(true))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "No access token, please log in first.");
}

#[tokio::test]
async fn test_declined_confirmation_cancels() {
    let api = FakeCatalog::empty();
    let mut confirm = RecordingConfirm {
        answer: false,
        prompts: Vec::new(),
    };

    let err = publish_genre(Some(&api), &rock_tracks(3), "Rock", &mut confirm)
        .await
        .unwrap_err();

    assert_eq!(
        confirm.prompts,
        vec!["Are you sure you want to create a playlist for Rock?"]
    );
    assert_eq!(err.to_string(), "Cancelled playlist creation for Rock");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_creates_private_playlist_and_batches_by_hundred() {
    let api = FakeCatalog::empty();

    let report = publish_genre(Some(&api), &rock_tracks(250), "Rock", &mut AutoConfirm(true))
        .await
        .unwrap();

    assert_eq!(
        api.calls(),
        vec!["me", "create:listener", "add:pl1:100", "add:pl1:100", "add:pl1:50"]
    );
    assert_eq!(
        api.created.lock().unwrap()[0],
        (
            "listener".to_string(),
            CreatePlaylistRequest {
                name: "Rock Playlist".to_string(),
                description: "Songs auto-organized into Rock".to_string(),
                public: false,
            }
        )
    );

    let added = api.added.lock().unwrap();
    assert_eq!(added[0][0], "spotify:track:t0");
    assert_eq!(added[2][49], "spotify:track:t249");

    assert_eq!(report.tracks, 250);
    assert_eq!(report.batches, 3);
    assert_eq!(report.failed_batches, 0);
    assert_eq!(report.playlist_name, "Rock Playlist");
    assert_eq!(report.status(), "Playlist created for Rock! Check your Spotify.");
}

#[tokio::test]
async fn test_creation_failure_aborts() {
    let mut api = FakeCatalog::empty();
    api.create_status = Some(403);

    let err = publish_genre(Some(&api), &rock_tracks(5), "Rock", &mut AutoConfirm(true))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to create playlist for Rock");
    assert!(!api.calls().iter().any(|c| c.starts_with("add:")));
}

#[tokio::test]
async fn test_failed_batch_does_not_stop_the_rest() {
    let mut api = FakeCatalog::empty();
    api.failing_batches = vec![0];

    let report = publish_genre(Some(&api), &rock_tracks(150), "Rock", &mut AutoConfirm(true))
        .await
        .unwrap();

    assert_eq!(report.batches, 2);
    assert_eq!(report.failed_batches, 1);
    assert_eq!(api.added.lock().unwrap().len(), 2);
}
