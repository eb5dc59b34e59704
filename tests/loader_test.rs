mod common;

use common::{FakeCatalog, api_track};
use genresort::{
    management::{CURSOR_KEY, KeyValueStore, MemoryStore, track_key},
    session::{Effect, Session, UNASSIGNED, effects::statuses, load_saved_tracks},
};

#[tokio::test]
async fn test_follows_next_links_until_exhausted() {
    let api = FakeCatalog::new(vec![
        Ok(vec![Some(api_track("a")), Some(api_track("b"))]),
        Ok(vec![Some(api_track("c"))]),
        Ok(vec![Some(api_track("d"))]),
    ]);
    let store = MemoryStore::new();
    let mut session = Session::new();
    let mut progress = Vec::new();

    let report = load_saved_tracks(&api, &store, &mut session, |n| progress.push(n)).await;

    assert_eq!(api.calls(), vec!["tracks:0", "tracks:1", "tracks:2"]);
    assert_eq!(progress, vec![2, 3, 4]);
    assert_eq!(report.pages, 3);
    assert_eq!(report.fetched, 4);
    assert!(!report.is_partial());

    let ids: Vec<&str> = session.tracks().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);
    assert_eq!(session.genre_map().counts(), vec![(UNASSIGNED, 4)]);
    assert_eq!(statuses(&report.effects).last(), Some(&"Fetched 4 songs"));
}

#[tokio::test]
async fn test_builds_tracks_from_api_shape() {
    let mut local = api_track("x");
    local.id = None;
    let api = FakeCatalog::new(vec![Ok(vec![Some(api_track("a")), None, Some(local)])]);
    let store = MemoryStore::new();
    let mut session = Session::new();

    load_saved_tracks(&api, &store, &mut session, |_| {}).await;

    assert_eq!(session.tracks().len(), 1);
    let track = &session.tracks()[0];
    assert_eq!(track.name, "Song a");
    assert_eq!(track.artist, "Artist a, Guest");
    assert_eq!(track.album, "Album a");
    assert_eq!(track.cover, "https://img.example/a.jpg");
    assert_eq!(track.genre, UNASSIGNED);
}

#[tokio::test]
async fn test_failed_page_keeps_partial_result() {
    let api = FakeCatalog::new(vec![
        Ok(vec![Some(api_track("a")), Some(api_track("b"))]),
        Err(401),
        Ok(vec![Some(api_track("c"))]),
    ]);
    let store = MemoryStore::new();
    let mut session = Session::new();

    let report = load_saved_tracks(&api, &store, &mut session, |_| {}).await;

    assert_eq!(api.calls(), vec!["tracks:0", "tracks:1"]);
    assert_eq!(report.failure.as_deref(), Some("401"));
    assert_eq!(session.tracks().len(), 2);
    assert!(statuses(&report.effects).contains(&"Failed fetching tracks: 401"));
    assert!(report.effects.contains(&Effect::RenderChart));
}

#[tokio::test]
async fn test_merges_persisted_genres_and_resumes() {
    let api = FakeCatalog::new(vec![Ok(vec![
        Some(api_track("a")),
        Some(api_track("b")),
        Some(api_track("c")),
    ])]);
    let mut store = MemoryStore::new();
    store.set(&track_key("a"), "Rock").await.unwrap();
    store.set(&track_key("c"), "Synthwave").await.unwrap();
    store.set(CURSOR_KEY, "2").await.unwrap();
    let mut session = Session::new();

    let report = load_saved_tracks(&api, &store, &mut session, |_| {}).await;

    assert_eq!(report.resumed_from, Some(2));
    assert_eq!(session.cursor(), 2);
    assert_eq!(
        session.genre_map().counts(),
        vec![("Rock", 1), (UNASSIGNED, 1), ("Synthwave", 1)]
    );
    assert!(session.genres().contains("Synthwave"));
    assert!(statuses(&report.effects).contains(&"Resuming from song 3 of 3"));
    assert!(report.effects.iter().any(|e| matches!(
        e,
        Effect::ShowTrack { index: 2, .. }
    )));
}

#[tokio::test]
async fn test_out_of_range_cursor_is_ignored() {
    let api = FakeCatalog::new(vec![Ok(vec![Some(api_track("a"))])]);
    let mut store = MemoryStore::new();
    store.set(CURSOR_KEY, "5").await.unwrap();
    let mut session = Session::new();

    let report = load_saved_tracks(&api, &store, &mut session, |_| {}).await;

    assert_eq!(report.resumed_from, None);
    assert_eq!(session.cursor(), 0);
}

#[tokio::test]
async fn test_empty_library_finishes_immediately() {
    let api = FakeCatalog::new(vec![Ok(Vec::new())]);
    let store = MemoryStore::new();
    let mut session = Session::new();

    let report = load_saved_tracks(&api, &store, &mut session, |_| {}).await;

    assert!(report.effects.contains(&Effect::Completed));
    assert!(session.is_done());
}
