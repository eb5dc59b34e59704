use crate::{
    error,
    management::{CURSOR_KEY, KeyValueStore, is_track_key},
    success,
};

use super::workspace;

/// Keys `reset` deletes: every saved assignment plus the review cursor.
pub fn reset_keys<S: KeyValueStore + ?Sized>(store: &S) -> Vec<String> {
    let mut keys: Vec<String> = store
        .keys()
        .into_iter()
        .filter(|k| is_track_key(k))
        .collect();
    keys.push(CURSOR_KEY.to_string());
    keys
}

/// `genresort reset`: forgets the review cursor and every saved assignment
/// in a single store write.
pub async fn reset() {
    let mut store = workspace::open_store().await;
    let keys = reset_keys(&store);
    let assignments = keys.len() - 1;

    if let Err(e) = store.remove_many(&keys).await {
        error!("Failed to reset progress, nothing was removed: {}", e);
    }

    success!(
        "Cleared {} saved assignments and the review position.",
        assignments
    );
}
