//! Route handlers.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::greeting::GreetingKind;
use crate::http::error::ApiError;
use crate::http::negotiate::accepts_html;
use crate::http::server::AppState;
use crate::http::views::{ARTIST_SEARCH_VIEW, X_VIEW_NAME};

/// All values of `key` in a decoded query, joined with `","`.
///
/// `None` when the key does not occur at all.
pub fn query_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

/// `GET /`
pub async fn hello_world() -> &'static str {
    "Hello World"
}

/// `GET /SayHello?name=<name>`
pub async fn say_formal_hello(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, ApiError> {
    let name = query_value(&pairs, "name")
        .filter(|name| !name.is_empty())
        .ok_or(ApiError::MissingName)?;

    let greeting = state.dispatcher.dispatch(GreetingKind::Formal.key(), &name)?;
    tracing::debug!(kind = %GreetingKind::Formal, name = %name, "Greeted");
    Ok(greeting)
}

/// `GET /SayHello2/{name}`
///
/// Unlike `/SayHello` the name is not checked for emptiness.
pub async fn say_informal_hello(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<String, ApiError> {
    let greeting = state
        .dispatcher
        .dispatch(GreetingKind::Informal.key(), &name)?;
    tracing::debug!(kind = %GreetingKind::Informal, name = %name, "Greeted");
    Ok(greeting)
}

/// `GET /searchArtist/{artistName}`
///
/// HTML clients get the rendered artist view, everyone else the JSON model.
pub async fn search_artist(
    State(state): State<AppState>,
    Path(artist_name): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let model = state.artists.search(&artist_name);

    if accepts_html(&headers) {
        let html = state.views.render(ARTIST_SEARCH_VIEW, &model)?;
        return Ok((
            [(X_VIEW_NAME, HeaderValue::from_static(ARTIST_SEARCH_VIEW))],
            Html(html),
        )
            .into_response());
    }

    Ok(Json(model).into_response())
}
