//! Author list page

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::AppState;

/// Body sent when there is nothing to list
pub const NO_AUTHORS_FOUND: &str = "No authors found";

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Authors as \"<family>, <first> : <birth> - <death>\" by family name, or the text \"No authors found\"", body = Vec<String>)
    )
)]
pub async fn show_all_authors(State(state): State<AppState>) -> Response {
    let authors = state.services.authors.author_list().await;
    if authors.is_empty() {
        return NO_AUTHORS_FOUND.into_response();
    }
    send_or_fallback(&authors, NO_AUTHORS_FOUND)
}

/// Serialize `body` as JSON, sending `fallback` as text if that fails
pub fn send_or_fallback<T: Serialize>(body: &T, fallback: &'static str) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(e) => {
            tracing::error!("Failed to send response body: {}", e);
            fallback.into_response()
        }
    }
}
