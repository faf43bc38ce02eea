use std::collections::HashMap;
use axum::{Extension, Form, Router};
use axum::extract::Query;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use crate::controller::AppState;
use crate::page::{render, Document, FormPost};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/restaurant", post(add_restaurant))
        .route("/reviews", get(search_restaurant_reviews))
        .route_layer(Extension(app_state))
}

pub async fn add_restaurant(
    Extension(app_state): Extension<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut event = FormPost::new();
    let document = Document::new();

    app_state
        .page_controller
        .submit_restaurant(&mut event, &form, &document.reservation_message)
        .await;

    Html(render::page(&document, ""))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchReviewsParam {
    pub restaurant_name: String,
}

pub async fn search_restaurant_reviews(
    Extension(app_state): Extension<AppState>,
    Query(query): Query<SearchReviewsParam>,
) -> impl IntoResponse {
    let document = Document::new();

    app_state
        .page_controller
        .search_reviews(&document.reviews, &query.restaurant_name)
        .await;

    Html(render::page(&document, &query.restaurant_name))
}
