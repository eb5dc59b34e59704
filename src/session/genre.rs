use std::fmt;

use crate::utils;

/// Label every track carries until the user files it somewhere.
pub const UNASSIGNED: &str = "Unassigned";
pub const UNASSIGNED_COLOR: &str = "#444444";

/// Built-in genres in the order they are offered.
pub const BUILTIN_GENRES: [(&str, &str); 7] = [
    ("Rap", "#e74c3c"),
    ("Rock", "#3498db"),
    ("Pop", "#f39c12"),
    ("Jazz", "#9b59b6"),
    ("Electronic", "#1abc9c"),
    ("Indie", "#2ecc71"),
    ("Classical", "#95a5a6"),
];

/// A choosable genre and the color its button is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub name: String,
    pub color: String,
}

/// Why a genre name was not added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddGenreError {
    /// Blank after trimming.
    Empty,
    /// Already in the set, or the reserved `Unassigned` label.
    Duplicate(String),
}

impl fmt::Display for AddGenreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddGenreError::Empty => write!(f, "Genre name cannot be empty"),
            AddGenreError::Duplicate(name) => write!(f, "Genre \"{}\" already exists", name),
        }
    }
}

impl std::error::Error for AddGenreError {}

/// The genres a track can be assigned to, in offer order.
///
/// `Unassigned` is never part of the set; it is the implicit default.
/// Names compare case-sensitively, so `rock` and `Rock` are distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreSet {
    genres: Vec<Genre>,
}

impl Default for GenreSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GenreSet {
    /// The seven built-in genres, Rap first and Classical last.
    pub fn builtin() -> Self {
        Self {
            genres: BUILTIN_GENRES
                .iter()
                .map(|(name, color)| Genre {
                    name: name.to_string(),
                    color: color.to_string(),
                })
                .collect(),
        }
    }

    /// Appends a new genre with a random display color.
    ///
    /// See [`GenreSet::add_with_color`] for the validation rules.
    pub fn add(&mut self, name: &str) -> Result<&Genre, AddGenreError> {
        self.add_with_color(name, utils::random_color())
    }

    /// Appends `name` with a fixed display color.
    ///
    /// The name is trimmed first. New genres go to the end, after the
    /// built-ins and any earlier additions.
    ///
    /// # Arguments
    ///
    /// * `name` - Genre name as typed by the user
    /// * `color` - Display color, `#rrggbb`
    ///
    /// # Returns
    ///
    /// The stored genre on success.
    ///
    /// # Errors
    ///
    /// - [`AddGenreError::Empty`] for a blank name
    /// - [`AddGenreError::Duplicate`] for `Unassigned` or a name already in
    ///   the set (case sensitive)
    pub fn add_with_color(
        &mut self,
        name: &str,
        color: impl Into<String>,
    ) -> Result<&Genre, AddGenreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AddGenreError::Empty);
        }
        if name == UNASSIGNED || self.contains(name) {
            return Err(AddGenreError::Duplicate(name.to_string()));
        }

        self.genres.push(Genre {
            name: name.to_string(),
            color: color.into(),
        });
        Ok(&self.genres[self.genres.len() - 1])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.genres.iter().any(|g| g.name == name)
    }

    /// True for any label a track may carry: a genre in the set or the default.
    pub fn is_valid_label(&self, name: &str) -> bool {
        name == UNASSIGNED || self.contains(name)
    }

    pub fn get(&self, name: &str) -> Option<&Genre> {
        self.genres.iter().find(|g| g.name == name)
    }

    /// Display color of `name`; grey for `Unassigned` and unknown names.
    pub fn color_of(&self, name: &str) -> &str {
        self.get(name)
            .map(|g| g.color.as_str())
            .unwrap_or(UNASSIGNED_COLOR)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Genre> {
        self.genres.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_is_stable() {
        let set = GenreSet::builtin();
        assert_eq!(
            set.names(),
            vec!["Rap", "Rock", "Pop", "Jazz", "Electronic", "Indie", "Classical"]
        );
        assert_eq!(set.color_of("Rock"), "#3498db");
    }

    #[test]
    fn duplicate_is_case_sensitive() {
        let mut set = GenreSet::builtin();
        assert_eq!(
            set.add("Rock").unwrap_err(),
            AddGenreError::Duplicate("Rock".to_string())
        );
        assert!(set.add("rock").is_ok());
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn default_label_cannot_be_added() {
        let mut set = GenreSet::builtin();
        assert!(set.add(UNASSIGNED).is_err());
        assert!(set.add("   ").is_err());
        assert_eq!(set.len(), 7);
        assert!(set.is_valid_label(UNASSIGNED));
    }

    #[test]
    fn new_genre_gets_hex_color() {
        let mut set = GenreSet::builtin();
        let genre = set.add("Shoegaze").unwrap().clone();
        assert_eq!(genre.color.len(), 7);
        assert!(genre.color.starts_with('#'));
        assert_eq!(set.color_of("Shoegaze"), genre.color);
        assert_eq!(set.color_of("Nope"), UNASSIGNED_COLOR);
    }
}
