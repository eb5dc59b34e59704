use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{error, spotify, success, types::Token};

/// Logs in through the browser, or from a pasted redirect URL.
pub async fn auth(shared_state: Arc<Mutex<Option<Token>>>, redirect_url: Option<String>) {
    let result = match redirect_url {
        Some(url) => spotify::auth::auth_from_redirect(&url).await,
        None => spotify::auth::auth(shared_state).await,
    };

    match result {
        Ok(_) => success!("Authentication successful!"),
        Err(e) => error!("{}", e),
    }
}
