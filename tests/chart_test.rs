mod common;

use common::track;
use genresort::session::{
    BarChart, Dashboard, GenreMap, Session, UNASSIGNED,
    chart::{CHART_COLOR, CHART_LABEL},
};

fn sample_session() -> Session {
    Session::with_tracks(vec![
        track("1", UNASSIGNED),
        track("2", "Rock"),
        track("3", "Jazz"),
        track("4", "Rock"),
    ])
}

#[test]
fn test_bars_follow_first_seen_order() {
    let session = sample_session();
    let chart = BarChart::from_map(session.genre_map());

    assert_eq!(chart.label, CHART_LABEL);
    assert_eq!(chart.color, CHART_COLOR);
    let bars: Vec<(&str, usize)> = chart
        .bars
        .iter()
        .map(|b| (b.genre.as_str(), b.count))
        .collect();
    assert_eq!(bars, vec![(UNASSIGNED, 1), ("Rock", 2), ("Jazz", 1)]);
    assert_eq!(chart.max_count(), 2);
}

#[test]
fn test_bar_lengths_scale_from_zero() {
    let tracks: Vec<_> = (0..40)
        .map(|i| track(&i.to_string(), if i == 0 { "Jazz" } else { "Rock" }))
        .collect();
    let chart = BarChart::from_map(&GenreMap::build(&tracks));

    assert_eq!(chart.bar_lengths(10), vec![1, 10]);
    assert_eq!(chart.bar_lengths(78), vec![2, 78]);

    let empty = BarChart::from_map(&GenreMap::default());
    assert!(empty.bar_lengths(10).is_empty());
    assert_eq!(empty.max_count(), 0);
}

#[test]
fn test_zero_width_gives_minimum_bars() {
    let chart = BarChart::from_map(sample_session().genre_map());
    assert_eq!(chart.bar_lengths(0), vec![1, 1, 1]);
}

#[test]
fn test_sections_skip_unassigned() {
    let session = sample_session();
    let mut dashboard = Dashboard::new();
    assert!(dashboard.chart().is_none());

    dashboard.refresh(&session);

    assert!(dashboard.chart().is_some());
    let genres: Vec<&str> = dashboard
        .sections()
        .iter()
        .map(|s| s.genre.as_str())
        .collect();
    assert_eq!(genres, vec!["Rock", "Jazz"]);
    assert!(dashboard.section(UNASSIGNED).is_none());
}

#[test]
fn test_rows_offer_every_other_genre() {
    let session = sample_session();
    let mut dashboard = Dashboard::new();
    dashboard.refresh(&session);

    let rock = dashboard.section("Rock").unwrap();
    let indices: Vec<usize> = rock.rows.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![1, 3]);
    assert_eq!(rock.rows[0].track_id, "2");
    assert_eq!(rock.rows[0].label, "Song 2 — Artist 2");

    let choices = &rock.rows[0].choices;
    assert!(!choices.contains(&"Rock".to_string()));
    assert!(!choices.contains(&UNASSIGNED.to_string()));
    assert_eq!(choices.len(), session.genres().len() - 1);
    assert_eq!(choices[0], "Rap");
}

#[test]
fn test_toggle_flips_and_refresh_collapses() {
    let mut session = sample_session();
    let mut dashboard = Dashboard::new();
    dashboard.refresh(&session);

    let rock = dashboard.section("Rock").unwrap();
    assert!(!rock.expanded);
    assert_eq!(rock.playlist_label(), "Create Rock Playlist");
    assert_eq!(rock.toggle_label(), "Show Rock Songs");

    assert_eq!(dashboard.toggle("Rock"), Some(true));
    assert_eq!(
        dashboard.section("Rock").unwrap().toggle_label(),
        "Hide Rock Songs"
    );
    assert_eq!(dashboard.toggle("Rock"), Some(false));
    assert_eq!(dashboard.toggle("Rock"), Some(true));
    assert_eq!(dashboard.toggle("Polka"), None);
    assert_eq!(dashboard.toggle(UNASSIGNED), None);

    session.assign_genre("1", "Pop");
    dashboard.refresh(&session);

    assert!(dashboard.sections().iter().all(|s| !s.expanded));
    assert!(dashboard.section("Pop").is_some());
    let chart = dashboard.chart().unwrap();
    assert!(chart.bars.iter().all(|b| b.genre != UNASSIGNED));
}
