use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

use crate::{
    Res, config, management::TokenManager, server::start_api_server, types::Token, utils, warning,
};

/// How long `auth` waits for the browser to come back with a token.
const LOGIN_WAIT: Duration = Duration::from_secs(120);

/// Authorize URL for the configured client, redirect URI and scope.
pub fn authorize_url() -> Result<String, String> {
    utils::build_authorize_url(
        &config::spotify_apiauth_url(),
        &config::spotify_client_id()?,
        &config::spotify_redirect_uri(),
        &config::spotify_scope(),
    )
}

/// Runs the implicit-grant login: starts the redirect catcher, opens the
/// browser and waits for the token to arrive, then caches it.
///
/// # Arguments
///
/// * `shared_state` - Slot the `/token` route fills once the browser
///   forwards the redirect fragment
///
/// # Returns
///
/// The captured token, already written to the token cache.
///
/// # Errors
///
/// - the client id is not configured
/// - no token arrived within two minutes
/// - the token cache cannot be written
///
/// # Example
///
/// ```
/// let state = Arc::new(Mutex::new(None));
/// let token = auth(state).await?;
/// ```
pub async fn auth(shared_state: Arc<Mutex<Option<Token>>>) -> Res<Token> {
    let auth_url = authorize_url()?;

    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Login server stopped: {}", e);
        }
    });

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let Some(token) = wait_for_token(shared_state).await else {
        return Err("Authentication failed or timed out.".into());
    };

    TokenManager::new(token.clone())
        .persist()
        .await
        .map_err(|e| format!("Failed to save token to cache: {}", e))?;
    Ok(token)
}

/// Takes the token from a redirect URL the user pasted, for setups where
/// the local server cannot receive the redirect.
///
/// # Errors
///
/// Fails when the URL carries no `access_token` or the cache cannot be
/// written.
pub async fn auth_from_redirect(redirect_url: &str) -> Res<Token> {
    let token = utils::token_from_fragment(redirect_url)
        .ok_or("No access_token found in the redirect URL fragment.")?;

    TokenManager::new(token.clone())
        .persist()
        .await
        .map_err(|e| format!("Failed to save token to cache: {}", e))?;
    Ok(token)
}

async fn wait_for_token(shared_state: Arc<Mutex<Option<Token>>>) -> Option<Token> {
    let start = Instant::now();

    while start.elapsed() < LOGIN_WAIT {
        if let Some(token) = shared_state.lock().await.as_ref() {
            return Some(token.clone());
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
