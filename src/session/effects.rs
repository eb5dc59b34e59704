use crate::management::{CURSOR_KEY, KeyValueStore, StoreError, track_key};

use super::{genre::Genre, track::Track};

/// Something a command handler wants done after it has mutated the session.
///
/// Handlers never touch storage or the terminal; they return effects and the
/// caller applies them in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Present the review card for the track at `index`.
    ShowTrack {
        index: usize,
        total: usize,
        track: Track,
        choices: Vec<Genre>,
    },
    /// The cursor reached the end; hide the card.
    Completed,
    /// Genre map changed; chart and genre sections must be redrawn.
    RenderChart,
    /// Store `genre` under `song-<track_id>`.
    PersistGenre {
        track_id: String,
        genre: String,
    },
    /// Delete `song-<track_id>`; the track is back to `Unassigned`.
    ClearGenre {
        track_id: String,
    },
    /// Store the review cursor under `currentIndex`.
    PersistCursor(usize),
    /// Status line, e.g. `Showing 3 / 120`.
    Status(String),
    /// Short-lived confirmation after an assignment.
    Toast(String),
    /// Diagnostic for a recoverable problem.
    Warning(String),
}

impl Effect {
    /// True for the effects [`apply_persistence`] handles.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            Effect::PersistGenre { .. } | Effect::ClearGenre { .. } | Effect::PersistCursor(_)
        )
    }
}

/// Writes every persistence effect to `store`, in order.
///
/// Effects that are not about persistence are ignored here.
///
/// # Arguments
///
/// * `store` - Destination of the `song-<id>` and `currentIndex` entries
/// * `effects` - Effects returned by a [`crate::session::Session`] handler
///
/// # Errors
///
/// Stops at the first failed write and returns its [`StoreError`]; earlier
/// writes stay applied.
///
/// # Example
///
/// ```
/// let effects = session.assign_current("Rock");
/// apply_persistence(&mut store, &effects).await?;
/// ```
pub async fn apply_persistence<S>(store: &mut S, effects: &[Effect]) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
{
    for effect in effects {
        match effect {
            Effect::PersistGenre { track_id, genre } => {
                store.set(&track_key(track_id), genre).await?
            }
            Effect::ClearGenre { track_id } => store.remove(&track_key(track_id)).await?,
            Effect::PersistCursor(cursor) => {
                store.set(CURSOR_KEY, &cursor.to_string()).await?
            }
            _ => {}
        }
    }
    Ok(())
}

/// Status lines contained in `effects`, handy for assertions and logs.
pub fn statuses(effects: &[Effect]) -> Vec<&str> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Status(s) => Some(s.as_str()),
            _ => None,
        })
        .collect()
}
