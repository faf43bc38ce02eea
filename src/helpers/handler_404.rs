use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

pub async fn page_not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html("<!DOCTYPE html><html><body><p>Nothing to eat here.</p><a href=\"/\">Back to the restaurant</a></body></html>"),
    )
}
