//! # API Module
//!
//! Endpoints of the short-lived local server that catches the Spotify login
//! redirect.
//!
//! - [`callback`] - serves the redirect URI; forwards the URL fragment
//! - [`token`] - receives the forwarded fragment and stores the access token
//! - [`health`] - status, version and whether a token has arrived yet
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use genresort::api::{callback, health, token};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/token", get(token))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use callback::token;
pub use health::health;
