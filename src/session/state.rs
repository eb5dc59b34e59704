use super::{
    effects::Effect,
    genre::{GenreSet, UNASSIGNED},
    genre_map::GenreMap,
    track::Track,
};

/// One undoable assignment: the track's prior genre and where the review
/// cursor stood before the assignment moved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub track_id: String,
    pub previous: String,
    pub cursor: usize,
}

/// All mutable state of one review session.
///
/// Every command handler takes `&mut self`, mutates, rebuilds the genre map
/// when labels changed and returns the effects the caller has to apply.
///
/// Invariants:
/// - every track label is `Unassigned` or a member of `genres`
/// - `genre_map` is rebuilt after every label change
/// - `cursor <= tracks.len()`
#[derive(Debug, Clone, Default)]
pub struct Session {
    tracks: Vec<Track>,
    genres: GenreSet,
    genre_map: GenreMap,
    cursor: usize,
    history: Vec<HistoryEntry>,
}

impl Session {
    /// Empty session with the built-in genres, cursor 0 and no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session over `tracks`, see [`Session::set_tracks`].
    pub fn with_tracks(tracks: Vec<Track>) -> Self {
        let mut session = Self::new();
        session.set_tracks(tracks);
        session
    }

    /// Back to a fresh session: no tracks, built-in genres only, cursor 0,
    /// empty history.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replaces the track list.
    ///
    /// Labels are trimmed; a blank label becomes `Unassigned`. Labels that
    /// are not yet known (typically genres added in an earlier run and
    /// restored from the store) are registered as genres, so every track
    /// keeps a valid label. The cursor is clamped to the new track count
    /// and the undo history is dropped.
    ///
    /// # Arguments
    ///
    /// * `tracks` - The complete track list, in review order
    pub fn set_tracks(&mut self, mut tracks: Vec<Track>) {
        for track in &mut tracks {
            let label = track.genre.trim();
            track.genre = if label.is_empty() {
                UNASSIGNED.to_string()
            } else {
                label.to_string()
            };
            if !self.genres.is_valid_label(&track.genre) && self.genres.add(&track.genre).is_err() {
                track.genre = UNASSIGNED.to_string();
            }
        }
        self.tracks = tracks;
        self.cursor = self.cursor.min(self.tracks.len());
        self.history.clear();
        self.rebuild();
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Track at review position `index`.
    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn find_track(&self, track_id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == track_id)
    }

    pub fn genres(&self) -> &GenreSet {
        &self.genres
    }

    pub fn genre_map(&self) -> &GenreMap {
        &self.genre_map
    }

    /// Review position; equal to the track count once everything is sorted.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.tracks.len()
    }

    /// Restores a persisted cursor.
    ///
    /// # Arguments
    ///
    /// * `saved` - Raw value of the `currentIndex` entry, if any
    ///
    /// # Returns
    ///
    /// The restored position. `None` when nothing was saved, the value is
    /// not an integer, or it is not strictly below the track count; the
    /// cursor is left untouched in those cases.
    pub fn restore_cursor(&mut self, saved: Option<&str>) -> Option<usize> {
        let index = saved?.trim().parse::<usize>().ok()?;
        if index < self.tracks.len() {
            self.cursor = index;
            Some(index)
        } else {
            None
        }
    }

    /// Review card for `index`, or the finished state once `index` is past
    /// the last track.
    ///
    /// # Returns
    ///
    /// - `[ShowTrack, Status("Showing i / n")]` for an existing track, with
    ///   every choosable genre in offer order
    /// - `[Completed, Status("All songs processed")]` past the end; calling
    ///   it again keeps returning the finished state
    pub fn show_song(&self, index: usize) -> Vec<Effect> {
        let total = self.tracks.len();
        match self.tracks.get(index) {
            None => vec![
                Effect::Completed,
                Effect::Status("All songs processed".to_string()),
            ],
            Some(track) => vec![
                Effect::ShowTrack {
                    index,
                    total,
                    track: track.clone(),
                    choices: self.genres.iter().cloned().collect(),
                },
                Effect::Status(format!("Showing {} / {}", index + 1, total)),
            ],
        }
    }

    /// [`Session::show_song`] at the cursor.
    pub fn show_current(&self) -> Vec<Effect> {
        self.show_song(self.cursor)
    }

    /// Files `track_id` under `genre` and advances to the next track.
    ///
    /// The prior genre and the cursor are pushed on the undo history, the
    /// genre map is rebuilt and the cursor moves forward by one, stopping at
    /// the track count. The cursor advances no matter which track was
    /// assigned, so a reassignment from the genre lists also moves the
    /// review forward.
    ///
    /// # Arguments
    ///
    /// * `track_id` - Id of the track to file
    /// * `genre` - A genre of the set or `Unassigned`
    ///
    /// # Returns
    ///
    /// In order: the persistence effect for the track (`ClearGenre` when the
    /// new label is `Unassigned`), `RenderChart`, a confirmation toast,
    /// `PersistCursor` and the effects of showing the track at the new
    /// cursor. An unknown genre or track yields a single `Warning` and
    /// changes nothing.
    pub fn assign_genre(&mut self, track_id: &str, genre: &str) -> Vec<Effect> {
        if !self.genres.is_valid_label(genre) {
            return vec![Effect::Warning(format!("Unknown genre \"{}\"", genre))];
        }
        let Some(track) = self.tracks.iter_mut().find(|t| t.id == track_id) else {
            return vec![Effect::Warning(format!(
                "assign: song not found {}",
                track_id
            ))];
        };

        self.history.push(HistoryEntry {
            track_id: track.id.clone(),
            previous: track.genre.clone(),
            cursor: self.cursor,
        });
        track.genre = genre.to_string();

        let persist = Self::persist_effect(track);
        let toast = Effect::Toast(format!("\"{}\" → {}", track.name, genre));

        self.rebuild();
        self.cursor = (self.cursor + 1).min(self.tracks.len());

        let mut effects = vec![
            persist,
            Effect::RenderChart,
            toast,
            Effect::PersistCursor(self.cursor),
        ];
        effects.extend(self.show_current());
        effects
    }

    /// Assigns `genre` to the track at the cursor. Past the end it only
    /// re-shows the finished state.
    pub fn assign_current(&mut self, genre: &str) -> Vec<Effect> {
        match self.tracks.get(self.cursor) {
            Some(track) => {
                let id = track.id.clone();
                self.assign_genre(&id, genre)
            }
            None => self.show_current(),
        }
    }

    /// Adds a genre to the choices and redraws the current card.
    ///
    /// Does not assign anything. A rejected name (blank, `Unassigned` or a
    /// duplicate) leaves the set unchanged and only reports a status.
    pub fn add_genre(&mut self, name: &str) -> Vec<Effect> {
        match self.genres.add(name) {
            Ok(genre) => {
                let mut effects = vec![Effect::Status(format!("Genre \"{}\" added!", genre.name))];
                effects.extend(self.show_current());
                effects
            }
            Err(e) => vec![Effect::Status(e.to_string())],
        }
    }

    /// Adds `name` when it is new, then assigns it to `track_id`.
    ///
    /// Backs the "+ Add" entry of the genre song lists. A blank name is
    /// refused with a status and nothing changes.
    pub fn add_genre_and_assign(&mut self, track_id: &str, name: &str) -> Vec<Effect> {
        let name = name.trim();
        if name.is_empty() {
            return vec![Effect::Status("No genre name given".to_string())];
        }
        if !self.genres.is_valid_label(name) {
            if let Err(e) = self.genres.add(name) {
                return vec![Effect::Status(e.to_string())];
            }
        }
        self.assign_genre(track_id, name)
    }

    /// Reverts the most recent assignment.
    ///
    /// The track gets its prior genre back and the cursor returns to where
    /// it stood before that assignment, so undoing a reassignment made after
    /// the review finished stays finished. There is no redo.
    ///
    /// # Returns
    ///
    /// - `[Status("Nothing to undo")]` on an empty history, without any
    ///   other change
    /// - a single `Warning` when the recorded track no longer exists
    /// - otherwise the persistence fix for the track, `PersistCursor`,
    ///   `RenderChart`, the effects of showing the track at the cursor and
    ///   `Status("Undid last assignment: <title>")`
    pub fn undo(&mut self) -> Vec<Effect> {
        let Some(last) = self.history.pop() else {
            return vec![Effect::Status("Nothing to undo".to_string())];
        };
        let Some(track) = self.tracks.iter_mut().find(|t| t.id == last.track_id) else {
            return vec![Effect::Warning(format!(
                "undo: song not found {}",
                last.track_id
            ))];
        };

        track.genre = if last.previous.is_empty() {
            UNASSIGNED.to_string()
        } else {
            last.previous
        };
        let persist = Self::persist_effect(track);
        let status = Effect::Status(format!("Undid last assignment: {}", track.name));

        self.cursor = last.cursor.min(self.tracks.len());
        self.rebuild();

        let mut effects = vec![persist, Effect::PersistCursor(self.cursor), Effect::RenderChart];
        effects.extend(self.show_current());
        effects.push(status);
        effects
    }

    fn persist_effect(track: &Track) -> Effect {
        if track.is_unassigned() {
            Effect::ClearGenre {
                track_id: track.id.clone(),
            }
        } else {
            Effect::PersistGenre {
                track_id: track.id.clone(),
                genre: track.genre.clone(),
            }
        }
    }

    fn rebuild(&mut self) {
        self.genre_map = GenreMap::build(&self.tracks);
    }
}
