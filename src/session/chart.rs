use std::collections::HashMap;

use super::{genre::UNASSIGNED, genre_map::GenreMap, state::Session};

pub const CHART_LABEL: &str = "Songs per Genre";
pub const CHART_COLOR: &str = "#1DB954";

/// One genre and its track count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub genre: String,
    pub count: usize,
}

/// One bar per genre, in genre map order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    pub label: String,
    pub color: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Chart labelled "Songs per Genre" with one bar per group of `map`.
    pub fn from_map(map: &GenreMap) -> Self {
        Self {
            label: CHART_LABEL.to_string(),
            color: CHART_COLOR.to_string(),
            bars: map
                .counts()
                .into_iter()
                .map(|(genre, count)| Bar {
                    genre: genre.to_string(),
                    count,
                })
                .collect(),
        }
    }

    pub fn max_count(&self) -> usize {
        self.bars.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Horizontal bars scaled so the largest count spans `width` cells.
    ///
    /// # Arguments
    ///
    /// * `width` - Terminal cells available for the longest bar
    ///
    /// # Returns
    ///
    /// One length per bar, in bar order. The scale starts at zero: a zero
    /// count gets no cells, any other count at least one.
    pub fn bar_lengths(&self, width: usize) -> Vec<usize> {
        let max = self.max_count();
        self.bars
            .iter()
            .map(|b| {
                if max == 0 || b.count == 0 {
                    0
                } else {
                    (b.count * width / max).max(1)
                }
            })
            .collect()
    }
}

/// One line of a genre section: a track and its reassignment choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRow {
    /// Position in the session's track list.
    pub index: usize,
    pub track_id: String,
    pub label: String,
    /// Genres offered for one-click reassignment: every genre but the
    /// track's current one.
    pub choices: Vec<String>,
}

/// Playlist control plus collapsible song list for one genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreSection {
    pub genre: String,
    pub expanded: bool,
    pub rows: Vec<SongRow>,
}

impl GenreSection {
    pub fn playlist_label(&self) -> String {
        format!("Create {} Playlist", self.genre)
    }

    pub fn toggle_label(&self) -> String {
        if self.expanded {
            format!("Hide {} Songs", self.genre)
        } else {
            format!("Show {} Songs", self.genre)
        }
    }
}

/// Holds the rendered chart and genre sections between refreshes.
#[derive(Debug, Default)]
pub struct Dashboard {
    chart: Option<BarChart>,
    sections: Vec<GenreSection>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the previous chart, then rebuilds chart and sections from the
    /// session.
    ///
    /// Called after every change of the genre map. Sections come back
    /// collapsed and `Unassigned` never gets a section; its tracks are only
    /// counted in the chart.
    pub fn refresh(&mut self, session: &Session) {
        drop(self.chart.take());
        self.chart = Some(BarChart::from_map(session.genre_map()));
        self.sections = build_sections(session);
    }

    pub fn chart(&self) -> Option<&BarChart> {
        self.chart.as_ref()
    }

    pub fn sections(&self) -> &[GenreSection] {
        &self.sections
    }

    pub fn section(&self, genre: &str) -> Option<&GenreSection> {
        self.sections.iter().find(|s| s.genre == genre)
    }

    /// Flips the song list of `genre`.
    ///
    /// # Returns
    ///
    /// The new expanded state, or `None` when `genre` has no section.
    pub fn toggle(&mut self, genre: &str) -> Option<bool> {
        let section = self.sections.iter_mut().find(|s| s.genre == genre)?;
        section.expanded = !section.expanded;
        Some(section.expanded)
    }
}

fn build_sections(session: &Session) -> Vec<GenreSection> {
    let positions: HashMap<&str, usize> = session
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id.as_str(), i))
        .collect();

    session
        .genre_map()
        .groups()
        .iter()
        .filter(|group| group.genre != UNASSIGNED)
        .map(|group| GenreSection {
            genre: group.genre.clone(),
            expanded: false,
            rows: group
                .tracks
                .iter()
                .map(|track| SongRow {
                    index: positions.get(track.id.as_str()).copied().unwrap_or_default(),
                    track_id: track.id.clone(),
                    label: format!("{} — {}", track.name, track.artist),
                    choices: session
                        .genres()
                        .iter()
                        .filter(|g| g.name != track.genre)
                        .map(|g| g.name.clone())
                        .collect(),
                })
                .collect(),
        })
        .collect()
}
