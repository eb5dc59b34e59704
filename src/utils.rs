use chrono::Utc;
use rand::Rng;
use url::{Url, form_urlencoded};

use crate::types::Token;

/// Maximum number of track URIs Spotify accepts per add-tracks call.
pub const PLAYLIST_BATCH_SIZE: usize = 100;

/// Extracts the bearer token from an implicit-grant redirect.
///
/// Accepts a full redirect URL (`http://host/callback#access_token=...`), a
/// bare fragment (`#access_token=...` or `access_token=...`) or an already
/// decoded query string. Returns `None` when no non-empty `access_token` is
/// present.
pub fn token_from_fragment(input: &str) -> Option<Token> {
    let input = input.trim();
    let fragment = match Url::parse(input) {
        Ok(url) => url.fragment().map(str::to_string)?,
        Err(_) => input.trim_start_matches('#').to_string(),
    };

    let mut access_token = None;
    let mut token_type = String::from("Bearer");
    let mut expires_in = 3600;

    for (key, value) in form_urlencoded::parse(fragment.as_bytes()) {
        match key.as_ref() {
            "access_token" if !value.is_empty() => access_token = Some(value.into_owned()),
            "token_type" => token_type = value.into_owned(),
            "expires_in" => expires_in = value.parse().unwrap_or(expires_in),
            _ => {}
        }
    }

    access_token.map(|access_token| Token {
        access_token,
        token_type,
        expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

/// Builds the implicit-grant authorize URL.
///
/// `show_dialog=true` forces the consent screen so a different account can be
/// picked on every login.
pub fn build_authorize_url(
    auth_url: &str,
    client_id: &str,
    redirect_uri: &str,
    scope: &str,
) -> Result<String, String> {
    let mut url = Url::parse(auth_url).map_err(|e| format!("Invalid auth url {auth_url}: {e}"))?;
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("response_type", "token")
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("scope", scope)
        .append_pair("show_dialog", "true");
    Ok(url.to_string())
}

/// Random `#rrggbb` display color for a user-added genre.
pub fn random_color() -> String {
    let value: u32 = rand::rng().random_range(0..=0xFF_FFFF);
    format!("#{value:06x}")
}

/// Spotify URI for a track id.
pub fn track_uri(track_id: &str) -> String {
    format!("spotify:track:{track_id}")
}

/// Splits a `#rrggbb` color into its components. Short `#rgb` forms are
/// expanded; anything unparsable yields `None`.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let value = u32::from_str_radix(&expanded, 16).ok()?;
    Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
}
