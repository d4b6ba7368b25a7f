//! Stream URL normalization for the add-source flow.

/// Placeholder value the add-source prompt is pre-filled with.
pub const EXAMPLE_SOURCE: &str = "http://example.org";

/// Prepend a scheme when the input has none. Anything already starting with
/// the literal `http` prefix passes through untouched; hosts are otherwise
/// not validated, the player is responsible for playback-time failures.
pub fn normalize_source_url(input: &str) -> String {
    if input.starts_with("http") {
        input.to_string()
    } else {
        format!("http://{input}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_on_http_prefixed_input() {
        assert_eq!(
            normalize_source_url("http://us2.ah.fm/192k/;stream/1"),
            "http://us2.ah.fm/192k/;stream/1"
        );
        assert_eq!(
            normalize_source_url("https://revolutionradio.ru:8443/live.mp3"),
            "https://revolutionradio.ru:8443/live.mp3"
        );
        // The prefix check is literal, not a scheme parse.
        assert_eq!(normalize_source_url("httpfoo"), "httpfoo");
    }

    #[test]
    fn prepends_scheme_otherwise() {
        assert_eq!(normalize_source_url("example.org"), "http://example.org");
        assert_eq!(normalize_source_url("ftp://x"), "http://ftp://x");
    }

    // An empty submission yields a bare "http://". Observed behavior of the
    // flow; kept on purpose rather than guarded against.
    #[test]
    fn empty_input_yields_bare_scheme() {
        assert_eq!(normalize_source_url(""), "http://");
    }
}
