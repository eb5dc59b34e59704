use std::sync::Arc;

use axum::{Extension, extract::RawQuery, response::Html};
use tokio::sync::Mutex;

use crate::{types::Token, utils, warning};

/// Page served at the redirect URI.
///
/// The token arrives in the URL fragment, which browsers never send to the
/// server. The script strips the fragment from history and forwards its
/// content to `/token` as a query string.
const FORWARD_FRAGMENT_PAGE: &str = r#"<!doctype html>
<html>
  <head><title>genresort login</title></head>
  <body>
    <p>Finishing login...</p>
    <script>
      const fragment = window.location.hash.substring(1);
      history.replaceState(null, document.title, window.location.pathname);
      window.location.replace("/token?" + fragment);
    </script>
  </body>
</html>"#;

pub async fn callback() -> Html<&'static str> {
    Html(FORWARD_FRAGMENT_PAGE)
}

pub async fn token(
    RawQuery(query): RawQuery,
    Extension(shared_state): Extension<Arc<Mutex<Option<Token>>>>,
) -> Html<&'static str> {
    let Some(token) = query.as_deref().and_then(utils::token_from_fragment) else {
        warning!("Login redirect did not carry an access token.");
        return Html("<h4>Login failed: no access token in redirect.</h4>");
    };

    let mut state = shared_state.lock().await;
    *state = Some(token);
    Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
}
