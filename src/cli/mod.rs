//! # CLI Module
//!
//! User-facing commands of the genre sorter. Each command loads what it
//! needs (token, progress store, saved tracks), drives the
//! [`crate::session`] layer and renders the returned effects to the
//! terminal.
//!
//! ## Commands
//!
//! - [`auth`] - log in through the browser or from a pasted redirect URL
//! - [`review`] - interactive card-by-card genre assignment with undo
//! - [`chart`] - genre distribution, genre table and genre song lists
//! - [`playlist`] - create a private playlist for one genre
//! - [`reset`] - forget the review position and every saved assignment
//!
//! ## Layering
//!
//! ```text
//! CLI Layer (prompt, rendering)
//!     ↓
//! Session Layer (state, effects, loader, publisher)
//!     ↓
//! Management Layer (token cache, key-value store)
//!     ↓
//! Spotify Layer (HTTP requests)
//! ```
//!
//! ## Usage
//!
//! ```bash
//! genresort auth                      # Log in with Spotify
//! genresort review                    # Sort songs, resumes where you stopped
//! genresort chart                     # Songs per genre
//! genresort playlist --genre Rock     # Publish the Rock group
//! genresort reset                     # Start over
//! ```
//!
//! Missing login refuses the command with a hint to run `auth`. A failed
//! page while loading keeps the songs fetched so far.

mod auth;
mod chart;
mod playlist;
mod render;
mod reset;
mod review;
pub mod workspace;

pub use auth::auth;
pub use chart::chart;
pub use playlist::playlist;
pub use playlist::publish_and_report;
pub use reset::{reset, reset_keys};
pub use review::ReviewInput;
pub use review::Terminal;
pub use review::parse_input;
pub use review::review;
