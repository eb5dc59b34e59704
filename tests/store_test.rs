use genresort::{
    cli::reset_keys,
    management::{
        CURSOR_KEY, JsonFileStore, KeyValueStore, MemoryStore, TokenManager, is_track_key,
        track_key,
    },
    types::Token,
};
use tempfile::tempdir;

#[test]
fn test_track_keys() {
    assert_eq!(track_key("4uLU6hMCjMI75M1A2tKUQC"), "song-4uLU6hMCjMI75M1A2tKUQC");
    assert!(is_track_key(&track_key("abc")));
    assert!(!is_track_key(CURSOR_KEY));
}

#[tokio::test]
async fn test_memory_store_set_get_remove() {
    let mut store = MemoryStore::new();
    assert!(store.is_empty());

    store.set("song-1", "Rock").await.unwrap();
    store.set("song-1", "Jazz").await.unwrap();
    assert_eq!(store.get("song-1"), Some("Jazz".to_string()));
    assert_eq!(store.len(), 1);

    store.remove("song-1").await.unwrap();
    store.remove("song-1").await.unwrap();
    assert_eq!(store.get("song-1"), None);
}

#[tokio::test]
async fn test_json_store_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/store.json");

    let mut store = JsonFileStore::open(&path).await.unwrap();
    assert!(store.keys().is_empty());
    store.set(&track_key("1"), "Rock").await.unwrap();
    store.set(&track_key("2"), "Pop").await.unwrap();
    store.set(CURSOR_KEY, "2").await.unwrap();
    store.remove(&track_key("2")).await.unwrap();

    let reopened = JsonFileStore::open(&path).await.unwrap();
    assert_eq!(reopened.get(&track_key("1")), Some("Rock".to_string()));
    assert_eq!(reopened.get(&track_key("2")), None);
    assert_eq!(reopened.get(CURSOR_KEY), Some("2".to_string()));
    assert_eq!(reopened.keys().len(), 2);
}

#[tokio::test]
async fn test_json_store_rejects_corrupt_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(JsonFileStore::open(&path).await.is_err());
}

#[tokio::test]
async fn test_token_cache_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache/token.json");
    let token = Token {
        access_token: "BQC123".to_string(),
        token_type: "Bearer".to_string(),
        expires_in: 3600,
        obtained_at: 1_700_000_000,
    };

    TokenManager::with_path(token.clone(), &path)
        .persist()
        .await
        .unwrap();
    let loaded = TokenManager::load_from(&path).await.unwrap();

    assert_eq!(loaded.current_token(), &token);
    assert_eq!(loaded.access_token(), "BQC123");
}

#[tokio::test]
async fn test_missing_token_cache_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(TokenManager::load_from(dir.path().join("absent.json")).await.is_err());
}

#[tokio::test]
async fn test_remove_many_writes_once_and_counts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut store = JsonFileStore::open(&path).await.unwrap();
    for id in ["1", "2", "3"] {
        store.set(&track_key(id), "Rock").await.unwrap();
    }
    store.set(CURSOR_KEY, "3").await.unwrap();
    store.set("theme", "dark").await.unwrap();

    let keys = reset_keys(&store);
    assert_eq!(keys.len(), 4);
    assert_eq!(keys.last().map(String::as_str), Some(CURSOR_KEY));

    assert_eq!(store.remove_many(&keys).await.unwrap(), 4);
    assert_eq!(store.remove_many(&keys).await.unwrap(), 0);

    let reopened = JsonFileStore::open(&path).await.unwrap();
    assert_eq!(reopened.keys(), vec!["theme".to_string()]);
}

#[tokio::test]
async fn test_failed_remove_many_keeps_entries() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");

    let mut store = JsonFileStore::open(sub.join("store.json")).await.unwrap();
    store.set(&track_key("1"), "Pop").await.unwrap();
    std::fs::remove_dir_all(&sub).unwrap();
    std::fs::write(&sub, "").unwrap();

    assert!(store.remove_many(&[track_key("1")]).await.is_err());
    assert_eq!(store.get(&track_key("1")), Some("Pop".to_string()));
}

#[tokio::test]
async fn test_memory_store_remove_many() {
    let mut store = MemoryStore::new();
    store.set("song-1", "Rock").await.unwrap();
    store.set(CURSOR_KEY, "1").await.unwrap();

    let keys = reset_keys(&store);
    assert_eq!(store.remove_many(&keys).await.unwrap(), 2);
    assert!(store.is_empty());
}
