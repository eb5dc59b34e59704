//! # Review Session
//!
//! Everything between the Spotify client and the terminal: the tracks under
//! review, the genre choices, the derived genre map, the review cursor and
//! the undo history.
//!
//! ## Flow
//!
//! ```text
//! load_saved_tracks ──► Session ──► show_song / assign_genre / undo / add_genre
//!                          │                     │
//!                          ▼                     ▼
//!                       GenreMap             Vec<Effect> ──► store + terminal
//!                          │
//!               ┌──────────┴──────────┐
//!               ▼                     ▼
//!        Dashboard (chart)     publish_genre
//! ```
//!
//! Handlers are synchronous and deterministic. They mutate the [`Session`]
//! and describe the follow-up work as [`Effect`]s, so the workflow can be
//! tested against a [`crate::management::MemoryStore`] without a terminal.

pub mod chart;
pub mod effects;
pub mod genre;
pub mod genre_map;
pub mod loader;
pub mod publisher;
pub mod state;
pub mod track;

pub use chart::{BarChart, Dashboard, GenreSection, SongRow};
pub use effects::{Effect, apply_persistence};
pub use genre::{Genre, GenreSet, UNASSIGNED};
pub use genre_map::{GenreGroup, GenreMap};
pub use loader::{LoadReport, load_saved_tracks};
pub use publisher::{AutoConfirm, Confirm, PublishError, PublishReport, publish_genre};
pub use state::{HistoryEntry, Session};
pub use track::Track;
