//! Genre Sorter CLI Library
//!
//! This library backs a terminal tool that walks through a user's saved tracks
//! on Spotify one at a time, lets the user file each track under a genre,
//! charts the resulting distribution and publishes one playlist per genre.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local redirect catcher used during login
//! - `cli` - Command implementations and terminal rendering
//! - `config` - Configuration management and environment variables
//! - `management` - Token cache and the key-value store used for progress
//! - `server` - Local HTTP server for the login redirect
//! - `session` - Review workflow state, aggregation, loading and publishing
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Wire structures and table rows
//! - `utils` - Small helpers shared across modules
//!
//! # Example
//!
//! ```
//! use genresort::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> genresort::Res<()> {
//!     config::load_env().await?;
//!     cli::chart().await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Boxed dynamic error with `Send + Sync` bounds so it can cross await points.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for status lines such as `Showing 3 / 120`.
///
/// # Example
///
/// ```
/// info!("Fetched {} songs", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Playlist created for {}!", genre);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for unrecoverable errors in the command layer. Library code returns
/// errors instead.
///
/// # Example
///
/// ```
/// error!("Failed to load token. Please run genresort auth");
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Console-level diagnostic for recoverable problems, e.g. a failed page
/// request or a history entry pointing at a track that no longer exists.
///
/// # Example
///
/// ```
/// warning!("Failed fetching tracks: {}", status);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a transient confirmation line, the terminal stand-in for a toast.
///
/// # Example
///
/// ```
/// toast!("\"{}\" → {}", title, genre);
/// ```
#[macro_export]
macro_rules! toast {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("  {} {}", "♪".magenta().bold(), std::format_args!($($arg)*).to_string().italic());
  })
}
