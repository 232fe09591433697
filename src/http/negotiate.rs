//! `Accept` header negotiation.

use axum::http::{header, HeaderMap};

/// True when any `Accept` entry asks for `text/html` with a non-zero quality.
pub fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .any(is_html_range)
}

fn is_html_range(entry: &str) -> bool {
    let mut parts = entry.split(';').map(str::trim);
    let media = parts.next().unwrap_or_default();
    if !media.eq_ignore_ascii_case("text/html") {
        return false;
    }

    // q=0 means "not acceptable"
    !parts.any(|p| {
        p.strip_prefix("q=")
            .and_then(|q| q.parse::<f32>().ok())
            .is_some_and(|q| q <= 0.0)
    })
}
