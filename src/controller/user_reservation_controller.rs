use std::collections::HashMap;
use axum::{Extension, Form, Router};
use axum::extract::Query;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use futures::future::join;
use serde::{Deserialize, Serialize};
use crate::controller::page_controller::load_restaurant;
use crate::controller::AppState;
use crate::page::form::RESTAURANT_NAME;
use crate::page::{render, Document, FormPost, ReservationForm};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/reserve", post(make_reservation))
        .route("/reservations", get(get_reservation))
        .route_layer(Extension(app_state))
}

/// Reservation form submit. The restaurant regions are reloaded next to the
/// outcome message so the page looks the same as before the submit.
pub async fn make_reservation(
    Extension(app_state): Extension<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut event = FormPost::new();
    let document = Document::new();
    let restaurant_name = app_state.restaurant_for(Some(form.value(RESTAURANT_NAME)));

    join(
        app_state
            .page_controller
            .submit_reservation(&mut event, &form, &document.reservation_message),
        load_restaurant(&app_state, &document, restaurant_name.as_deref()),
    )
    .await;

    Html(render::page(&document, restaurant_name.as_deref().unwrap_or_default()))
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GetReservationQuery {
    pub user_name: String,
}

pub async fn get_reservation(
    Extension(app_state): Extension<AppState>,
    Query(query): Query<GetReservationQuery>,
) -> impl IntoResponse {
    let document = Document::new();

    app_state
        .page_controller
        .load_reservation(&document.reservations, &query.user_name)
        .await;

    Html(render::page(&document, ""))
}
