use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, error, info,
    management::{JsonFileStore, TokenManager},
    session::{Dashboard, Effect, LoadReport, Session, apply_persistence, load_saved_tracks},
    spotify::SpotifyClient,
    success, toast, warning,
};

use super::render;

/// Everything a command needs once the saved tracks are loaded.
pub struct Workspace {
    pub client: SpotifyClient,
    pub store: JsonFileStore,
    pub session: Session,
    pub dashboard: Dashboard,
}

/// Client for the cached token, or `None` when nobody has logged in.
pub async fn load_client() -> Option<SpotifyClient> {
    match TokenManager::load().await {
        Ok(manager) => Some(SpotifyClient::new(
            config::spotify_apiurl(),
            manager.access_token(),
        )),
        Err(_) => None,
    }
}

pub async fn open_store() -> JsonFileStore {
    match JsonFileStore::open_default().await {
        Ok(store) => store,
        Err(e) => error!("Failed to open progress store: {}", e),
    }
}

/// Opens the store and loads all saved tracks through `client`.
pub async fn open(client: SpotifyClient) -> (Workspace, LoadReport) {
    let store = open_store().await;
    let mut session = Session::new();

    let pb = ProgressBar::new_spinner();
    pb.set_message("Loading your songs...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let report = load_saved_tracks(&client, &store, &mut session, |fetched| {
        pb.set_message(format!("Loading your songs... {} fetched", fetched))
    })
    .await;
    pb.finish_and_clear();

    let mut dashboard = Dashboard::new();
    dashboard.refresh(&session);

    (
        Workspace {
            client,
            store,
            session,
            dashboard,
        },
        report,
    )
}

pub async fn require_client() -> SpotifyClient {
    match load_client().await {
        Some(client) => client,
        None => error!("Not logged in. Run genresort auth to start."),
    }
}

impl Workspace {
    /// Persists, then renders `effects` in order.
    pub async fn apply(&mut self, effects: Vec<Effect>) {
        if let Err(e) = apply_persistence(&mut self.store, &effects).await {
            warning!("Failed to save progress: {}", e);
        }
        for effect in effects.into_iter().filter(|e| !e.is_persistence()) {
            render_one(&mut self.dashboard, &self.session, effect);
        }
    }
}

pub fn render_one(dashboard: &mut Dashboard, session: &Session, effect: Effect) {
    match effect {
        Effect::ShowTrack {
            index,
            total,
            track,
            choices,
        } => render::card(index, total, &track, &choices),
        Effect::Completed => render::completed(),
        Effect::RenderChart => dashboard.refresh(session),
        Effect::Status(message) => info!("{}", message),
        Effect::Toast(message) => toast!("{}", message),
        Effect::Warning(message) => warning!("{}", message),
        Effect::PersistGenre { .. } | Effect::ClearGenre { .. } | Effect::PersistCursor(_) => {}
    }
}

pub fn report_partial(report: &LoadReport) {
    match &report.failure {
        Some(status) => warning!(
            "Loading stopped early ({}); continuing with {} songs.",
            status,
            report.fetched
        ),
        None => success!("Loaded {} pages.", report.pages),
    }
}
