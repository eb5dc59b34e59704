use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, stdin, stdout};

use crate::{info, session::Confirm, warning};

use super::{playlist, render, workspace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewInput {
    /// Zero-based position in the genre choices.
    Choose(usize),
    AddGenre(Option<String>),
    Undo,
    Chart,
    Lists,
    Toggle(String),
    /// Zero-based track position plus target genre.
    Reassign { track: usize, genre: String },
    Publish(String),
    Help,
    Quit,
    Unknown(String),
}

fn rest(line: &str) -> Option<String> {
    let rest = line.get(1..)?.trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

pub fn parse_input(line: &str) -> ReviewInput {
    let line = line.trim();
    if let Ok(n) = line.parse::<usize>() {
        return match n {
            0 => ReviewInput::Unknown(line.to_string()),
            n => ReviewInput::Choose(n - 1),
        };
    }

    let command = line.split_whitespace().next().unwrap_or_default();
    match command {
        "a" => ReviewInput::AddGenre(rest(line)),
        "u" => ReviewInput::Undo,
        "c" => ReviewInput::Chart,
        "l" => ReviewInput::Lists,
        "h" | "?" => ReviewInput::Help,
        "q" => ReviewInput::Quit,
        "t" => rest(line)
            .map(ReviewInput::Toggle)
            .unwrap_or_else(|| ReviewInput::Unknown(line.to_string())),
        "p" => rest(line)
            .map(ReviewInput::Publish)
            .unwrap_or_else(|| ReviewInput::Unknown(line.to_string())),
        "r" => {
            let args = rest(line).unwrap_or_default();
            let mut parts = args.splitn(2, char::is_whitespace);
            let track = parts.next().and_then(|n| n.trim_start_matches('#').parse::<usize>().ok());
            let genre = parts.next().map(str::trim).filter(|g| !g.is_empty());
            match (track, genre) {
                (Some(track), Some(genre)) if track > 0 => ReviewInput::Reassign {
                    track: track - 1,
                    genre: genre.to_string(),
                },
                _ => ReviewInput::Unknown(line.to_string()),
            }
        }
        _ => ReviewInput::Unknown(line.to_string()),
    }
}

/// Line-oriented stdin used for the review prompt and confirmations.
pub struct Terminal {
    lines: Lines<BufReader<Stdin>>,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(stdin()).lines(),
        }
    }

    /// Prints `text` and reads one line. `None` on end of input.
    pub async fn prompt(&mut self, text: &str) -> Option<String> {
        let mut out = stdout();
        let _ = out.write_all(text.as_bytes()).await;
        let _ = out.flush().await;
        self.lines.next_line().await.ok().flatten()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Confirm for Terminal {
    async fn confirm(&mut self, prompt: &str) -> bool {
        match self.prompt(&format!("{} [y/N] ", prompt)).await {
            Some(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }
}

/// Interactive review: one card at a time until the user quits.
pub async fn review() {
    let client = workspace::require_client().await;
    info!("Logged in, fetching songs...");
    let (mut ws, report) = workspace::open(client).await;
    workspace::report_partial(&report);
    ws.apply(report.effects).await;

    let mut terminal = Terminal::new();
    info!("Type h for help.");

    loop {
        let Some(line) = terminal.prompt("> ").await else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let effects = match parse_input(&line) {
            ReviewInput::Choose(i) => {
                let genre = ws.session.genres().iter().nth(i).map(|g| g.name.clone());
                match genre {
                    Some(genre) => ws.session.assign_current(&genre),
                    None => {
                        warning!("No genre #{}", i + 1);
                        continue;
                    }
                }
            }
            ReviewInput::AddGenre(name) => {
                let name = match name {
                    Some(name) => name,
                    None => match terminal.prompt("Enter a new genre name: ").await {
                        Some(name) if !name.trim().is_empty() => name,
                        _ => continue,
                    },
                };
                ws.session.add_genre(&name)
            }
            ReviewInput::Undo => ws.session.undo(),
            ReviewInput::Chart => {
                render::chart(&ws.dashboard);
                continue;
            }
            ReviewInput::Lists => {
                render::sections(&ws.dashboard);
                continue;
            }
            ReviewInput::Toggle(genre) => {
                match ws.dashboard.toggle(&genre) {
                    Some(_) => render::sections(&ws.dashboard),
                    None => warning!("No songs filed under {}", genre),
                }
                continue;
            }
            ReviewInput::Reassign { track, genre } => {
                let Some(id) = ws.session.track(track).map(|t| t.id.clone()) else {
                    warning!("No song #{}", track + 1);
                    continue;
                };
                if ws.session.genres().is_valid_label(&genre) {
                    ws.session.assign_genre(&id, &genre)
                } else {
                    ws.session.add_genre_and_assign(&id, &genre)
                }
            }
            ReviewInput::Publish(genre) => {
                playlist::publish_and_report(
                    Some(&ws.client),
                    ws.session.genre_map(),
                    &genre,
                    &mut terminal,
                )
                .await;
                continue;
            }
            ReviewInput::Help => {
                render::help();
                continue;
            }
            ReviewInput::Quit => break,
            ReviewInput::Unknown(input) => {
                warning!("Unknown input \"{}\", type h for help.", input);
                continue;
            }
        };

        ws.apply(effects).await;
    }
}
