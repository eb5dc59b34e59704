use crate::info;

use super::{render, workspace};

/// `genresort chart`: loads the library and prints the genre chart, the
/// genre table and the genre sections.
pub async fn chart() {
    let client = workspace::require_client().await;
    let (ws, report) = workspace::open(client).await;
    workspace::report_partial(&report);

    render::chart(&ws.dashboard);
    println!();
    println!("{}", render::genre_table(&ws.session));
    render::sections(&ws.dashboard);

    let unassigned = ws
        .session
        .tracks()
        .iter()
        .filter(|t| t.is_unassigned())
        .count();
    info!(
        "{} of {} songs still {}",
        unassigned,
        ws.session.tracks().len(),
        "Unassigned".bold()
    );
}
