use crate::{
    management::{CURSOR_KEY, KeyValueStore, track_key},
    spotify::CatalogApi,
};

use super::{effects::Effect, state::Session, track::Track};

/// Outcome of paging through the saved tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Items received, including null tracks that were skipped.
    pub fetched: usize,
    /// Pages that were received successfully.
    pub pages: usize,
    /// Status of the request that stopped paging early, if any.
    pub failure: Option<String>,
    /// Cursor restored from the store.
    pub resumed_from: Option<usize>,
    /// Status, chart and card effects to apply after loading.
    pub effects: Vec<Effect>,
}

impl LoadReport {
    pub fn is_partial(&self) -> bool {
        self.failure.is_some()
    }
}

/// Pages through the user's saved tracks and loads them into `session`.
///
/// Starts at the first page and follows the server supplied `next` links
/// until there are none. Items without a track (or without a track id) are
/// skipped. Every track starts `Unassigned` and picks up its persisted genre
/// from `store`.
///
/// # Arguments
///
/// * `api` - Catalog to page through
/// * `store` - Source of persisted genres and the saved cursor
/// * `session` - Receives the tracks; its history is cleared
/// * `on_page` - Called with the running number of fetched items after each
///   page, drives the progress text
///
/// # Returns
///
/// A [`LoadReport`]. Its effects hold, in order: failure diagnostics (if
/// any), `RenderChart`, the resume status when the saved cursor was in
/// range, the card at the cursor and `Fetched <n> songs`.
///
/// # Partial Failure
///
/// A failed page stops paging without retrying. Tracks collected so far are
/// kept and the failure status is recorded in [`LoadReport::failure`].
pub async fn load_saved_tracks<A, S, F>(
    api: &A,
    store: &S,
    session: &mut Session,
    mut on_page: F,
) -> LoadReport
where
    A: CatalogApi + ?Sized,
    S: KeyValueStore + ?Sized,
    F: FnMut(usize),
{
    let mut tracks: Vec<Track> = Vec::new();
    let mut effects = Vec::new();
    let mut fetched = 0;
    let mut pages = 0;
    let mut failure = None;
    let mut next: Option<String> = None;

    loop {
        let page = match api.saved_tracks_page(next.as_deref()).await {
            Ok(page) => page,
            Err(e) => {
                let status = e
                    .status()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| e.to_string());
                effects.push(Effect::Warning(format!("Spotify tracks fetch failed: {}", e)));
                effects.push(Effect::Status(format!("Failed fetching tracks: {}", status)));
                failure = Some(status);
                break;
            }
        };
        pages += 1;
        fetched += page.items.len();

        for item in page.items {
            let Some(mut track) = item.track.and_then(Track::from_api) else {
                continue;
            };
            if let Some(saved) = store.get(&track_key(&track.id)).filter(|g| !g.is_empty()) {
                track.genre = saved;
            }
            tracks.push(track);
        }

        on_page(fetched);

        match page.next {
            Some(url) if !url.is_empty() => next = Some(url),
            _ => break,
        }
    }

    session.set_tracks(tracks);
    effects.push(Effect::RenderChart);

    let resumed_from = session.restore_cursor(store.get(CURSOR_KEY).as_deref());
    if let Some(index) = resumed_from {
        effects.push(Effect::Status(format!(
            "Resuming from song {} of {}",
            index + 1,
            session.tracks().len()
        )));
    }
    effects.extend(session.show_current());
    effects.push(Effect::Status(format!(
        "Fetched {} songs",
        session.tracks().len()
    )));

    LoadReport {
        fetched,
        pages,
        failure,
        resumed_from,
        effects,
    }
}
