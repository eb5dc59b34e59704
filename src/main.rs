use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use genresort::{cli, config, error, types::Token};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightGreen.on_default())
        .placeholder(AnsiColor::BrightBlue.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in with Spotify
    Auth(AuthOptions),

    /// Sort saved songs into genres, one at a time
    Review,

    /// Show songs per genre
    Chart,

    #[clap(about = "Create a playlist for one genre")]
    Playlist(PlaylistOptions),

    /// Forget the review position and all saved genre assignments
    Reset,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Redirect URL copied from the browser, skips the local login server
    #[clap(long)]
    pub redirect_url: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Genre whose songs go into the playlist
    #[clap(long)]
    genre: String,

    /// Do not ask for confirmation
    #[clap(long, short)]
    yes: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => {
            let redirect_state: Arc<Mutex<Option<Token>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&redirect_state), opt.redirect_url).await;
        }
        Command::Review => cli::review().await,
        Command::Chart => cli::chart().await,
        Command::Playlist(opt) => cli::playlist(opt.genre, opt.yes).await,
        Command::Reset => cli::reset().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
