use std::collections::HashMap;

use super::{genre::UNASSIGNED, track::Track};

/// All tracks currently carrying one genre label, in track order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreGroup {
    pub genre: String,
    pub tracks: Vec<Track>,
}

/// Tracks grouped by their current genre label.
///
/// Always rebuilt from the full track list, never patched. Groups appear in
/// the order their genre is first seen while walking the list, so the order
/// follows track order rather than the genre set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreMap {
    groups: Vec<GenreGroup>,
}

impl GenreMap {
    /// Groups `tracks` by label in a single pass.
    ///
    /// An empty label counts as `Unassigned`. Every track lands in exactly
    /// one group.
    ///
    /// # Example
    ///
    /// ```
    /// let map = GenreMap::build(&tracks);
    /// for (genre, count) in map.counts() {
    ///     println!("{genre}: {count}");
    /// }
    /// ```
    pub fn build(tracks: &[Track]) -> Self {
        let mut groups: Vec<GenreGroup> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for track in tracks {
            let genre = if track.genre.is_empty() {
                UNASSIGNED
            } else {
                track.genre.as_str()
            };
            let slot = *index.entry(genre).or_insert_with(|| {
                groups.push(GenreGroup {
                    genre: genre.to_string(),
                    tracks: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].tracks.push(track.clone());
        }

        Self { groups }
    }

    /// Tracks filed under `genre`, `None` when no track carries it.
    pub fn get(&self, genre: &str) -> Option<&[Track]> {
        self.groups
            .iter()
            .find(|g| g.genre == genre)
            .map(|g| g.tracks.as_slice())
    }

    pub fn groups(&self) -> &[GenreGroup] {
        &self.groups
    }

    /// Group labels in first-seen order.
    pub fn genres(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.genre.as_str()).collect()
    }

    /// `(genre, track count)` per group, in group order.
    pub fn counts(&self) -> Vec<(&str, usize)> {
        self.groups
            .iter()
            .map(|g| (g.genre.as_str(), g.tracks.len()))
            .collect()
    }

    pub fn total_tracks(&self) -> usize {
        self.groups.iter().map(|g| g.tracks.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
