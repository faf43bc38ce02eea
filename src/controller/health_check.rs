use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

pub fn router() -> Router {
    Router::new().route("/health", get(get_health_check))
}

/// Liveness of the page server only, the backend is not probed
async fn get_health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
