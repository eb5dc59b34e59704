use crate::{
    info,
    session::{AutoConfirm, Confirm, GenreMap, PublishError, publish_genre},
    spotify::SpotifyClient,
    success, warning,
};

use super::{review::Terminal, workspace};

/// Publishes `genre` and prints the outcome. Refusals and failures are
/// reported, never fatal.
pub async fn publish_and_report<C>(
    client: Option<&SpotifyClient>,
    map: &GenreMap,
    genre: &str,
    confirm: &mut C,
) where
    C: Confirm + ?Sized,
{
    match publish_genre(client, map, genre, confirm).await {
        Ok(report) => {
            if report.failed_batches > 0 {
                warning!(
                    "{} of {} track batches were rejected by Spotify.",
                    report.failed_batches,
                    report.batches
                );
            }
            success!("{}", report.status());
        }
        Err(e @ PublishError::Cancelled(_)) | Err(e @ PublishError::EmptyGenre(_)) => {
            info!("{}", e)
        }
        Err(e) => {
            if let Some(source) = std::error::Error::source(&e) {
                warning!("{}: {}", e, source);
            } else {
                warning!("{}", e);
            }
        }
    }
}

/// `genresort playlist --genre <G>`: loads the library, then publishes one
/// genre. `yes` skips the confirmation prompt.
pub async fn playlist(genre: String, yes: bool) {
    let Some(client) = workspace::load_client().await else {
        warning!("{}", PublishError::MissingToken);
        return;
    };

    let (ws, report) = workspace::open(client).await;
    workspace::report_partial(&report);

    if yes {
        publish_and_report(
            Some(&ws.client),
            ws.session.genre_map(),
            &genre,
            &mut AutoConfirm(true),
        )
        .await;
    } else {
        publish_and_report(
            Some(&ws.client),
            ws.session.genre_map(),
            &genre,
            &mut Terminal::new(),
        )
        .await;
    }
}
