use genresort::utils::*;

#[test]
fn test_token_from_full_redirect_url() {
    let token = token_from_fragment(
        "http://127.0.0.1:8888/callback#access_token=BQC%2Fabc&token_type=Bearer&expires_in=1800",
    )
    .unwrap();

    assert_eq!(token.access_token, "BQC/abc");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 1800);
    assert!(token.obtained_at > 0);
}

#[test]
fn test_token_from_bare_fragment() {
    assert_eq!(
        token_from_fragment("#access_token=xyz").unwrap().access_token,
        "xyz"
    );
    assert_eq!(
        token_from_fragment("access_token=xyz&state=1")
            .unwrap()
            .access_token,
        "xyz"
    );
}

#[test]
fn test_token_missing_or_empty() {
    assert!(token_from_fragment("http://127.0.0.1:8888/callback").is_none());
    assert!(token_from_fragment("http://127.0.0.1:8888/callback#error=access_denied").is_none());
    assert!(token_from_fragment("#access_token=").is_none());
    assert!(token_from_fragment("").is_none());
}

#[test]
fn test_build_authorize_url() {
    let url = build_authorize_url(
        "https://accounts.spotify.com/authorize",
        "client123",
        "http://127.0.0.1:8888/callback",
        "user-library-read playlist-modify-private",
    )
    .unwrap();

    assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
    assert!(url.contains("client_id=client123"));
    assert!(url.contains("response_type=token"));
    assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A8888%2Fcallback"));
    assert!(url.contains("scope=user-library-read+playlist-modify-private"));
    assert!(url.contains("show_dialog=true"));

    assert!(build_authorize_url("not a url", "c", "r", "s").is_err());
}

#[test]
fn test_random_color() {
    for _ in 0..50 {
        let color = random_color();
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn test_track_uri() {
    assert_eq!(track_uri("6rqhFgbbKwnb9MLmUQDhG6"), "spotify:track:6rqhFgbbKwnb9MLmUQDhG6");
}

#[test]
fn test_parse_hex_color() {
    assert_eq!(parse_hex_color("#1DB954"), Some((0x1d, 0xb9, 0x54)));
    assert_eq!(parse_hex_color("#444"), Some((0x44, 0x44, 0x44)));
    assert_eq!(parse_hex_color("1DB954"), None);
    assert_eq!(parse_hex_color("#12345"), None);
}
