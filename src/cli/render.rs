use colored::Colorize;
use tabled::Table;

use crate::{
    info,
    session::{Dashboard, Genre, Session, Track},
    types::GenreTableRow,
    utils,
};

const CHART_WIDTH: usize = 40;

fn paint(text: &str, color: &str) -> String {
    match utils::parse_hex_color(color) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}

fn swatch(label: &str, color: &str) -> String {
    match utils::parse_hex_color(color) {
        Some((r, g, b)) => format!(" {} ", label)
            .on_truecolor(r, g, b)
            .white()
            .bold()
            .to_string(),
        None => format!("[{}]", label),
    }
}

/// The review card: cover, title, artist, album and numbered genre buttons.
pub fn card(index: usize, total: usize, track: &Track, choices: &[Genre]) {
    println!();
    println!(
        "{} {}",
        format!("#{}/{}", index + 1, total).dimmed(),
        track.name.bold()
    );
    if !track.artist.is_empty() {
        println!("    {}", track.artist);
    }
    if !track.album.is_empty() {
        println!("    {}", track.album.italic());
    }
    if !track.cover.is_empty() {
        println!("    {}", track.cover.dimmed());
    }
    println!("    current: {}", track.genre);

    let buttons: Vec<String> = choices
        .iter()
        .enumerate()
        .map(|(i, g)| format!("{}{}", (i + 1).to_string().bold(), swatch(&g.name, &g.color)))
        .collect();
    println!("    {}  {}", buttons.join(" "), "[a] + Add Genre".dimmed());
}

pub fn completed() {
    println!();
    println!("{}", "✅ All songs sorted!".green().bold());
}

pub fn chart(dashboard: &Dashboard) {
    let Some(chart) = dashboard.chart() else {
        info!("No chart yet.");
        return;
    };

    println!();
    println!("{}", chart.label.bold());
    let width = chart
        .bars
        .iter()
        .map(|b| b.genre.chars().count())
        .max()
        .unwrap_or(0);
    for (bar, len) in chart.bars.iter().zip(chart.bar_lengths(CHART_WIDTH)) {
        println!(
            "  {:>width$} │{} {}",
            bar.genre,
            paint(&"█".repeat(len), &chart.color),
            bar.count,
            width = width
        );
    }
}

/// Genre sections with their playlist and toggle controls. Rows are listed
/// only for expanded sections, prefixed with the track number used by `r`.
pub fn sections(dashboard: &Dashboard) {
    if dashboard.sections().is_empty() {
        info!("No songs have a genre yet.");
        return;
    }

    for section in dashboard.sections() {
        println!();
        println!(
            "{}  {}  {}",
            section.genre.bold(),
            format!("[p {}] {}", section.genre, section.playlist_label()).dimmed(),
            format!("[t {}] {}", section.genre, section.toggle_label()).dimmed()
        );
        if !section.expanded {
            continue;
        }
        for row in &section.rows {
            println!(
                "  {:>5}  {}  {}",
                format!("#{}", row.index + 1),
                row.label,
                format!("→ {} | + Add", row.choices.join(" | ")).dimmed()
            );
        }
    }
}

pub fn genre_table(session: &Session) -> Table {
    let rows: Vec<GenreTableRow> = session
        .genre_map()
        .counts()
        .into_iter()
        .map(|(genre, count)| GenreTableRow {
            genre: genre.to_string(),
            color: session.genres().color_of(genre).to_string(),
            tracks: count,
        })
        .collect();
    Table::new(rows)
}

pub fn help() {
    println!(
        "{}",
        "\
  1..N          assign the numbered genre to the current song
  a [name]      add a new genre
  u             undo the last assignment
  c             show the genre chart
  l             list genres with their songs
  t <genre>     show/hide the songs of a genre
  r <#> <genre> reassign song #, a new name is added first
  p <genre>     create a playlist for a genre
  h             this help
  q             quit"
            .dimmed()
    );
}
