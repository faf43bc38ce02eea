use std::collections::HashMap;
use axum::{Extension, Form, Router};
use axum::response::{Html, IntoResponse};
use axum::routing::post;
use crate::controller::page_controller::load_restaurant;
use crate::controller::AppState;
use crate::page::form::RESTAURANT_NAME;
use crate::page::{render, Document, FormPost, ReservationForm};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/review", post(add_review))
        .route_layer(Extension(app_state))
}

pub async fn add_review(
    Extension(app_state): Extension<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut event = FormPost::new();
    let document = Document::new();
    let restaurant_name = app_state.restaurant_for(Some(form.value(RESTAURANT_NAME)));

    app_state
        .page_controller
        .submit_review(&mut event, &form, &document.reservation_message)
        .await;

    // reload after the post so the new review shows up
    load_restaurant(&app_state, &document, restaurant_name.as_deref()).await;

    Html(render::page(&document, restaurant_name.as_deref().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;
    use super::*;
    use crate::backend::http_backend::{GET_DETAIL, GET_REVIEW, POST_REVIEW};
    use crate::tests::utils::{body_text, config_for, spawn_backend};

    fn fake_backend() -> std::net::SocketAddr {
        spawn_backend(
            Router::new()
                .route(GET_DETAIL, get(|| async { r#"{"restaurant_name":"Cafe X"}"# }))
                .route(GET_REVIEW, get(|| async {
                    r#"{"user_name":"Alice","restaurant_name":"Cafe X","review":"lovely","rating":5}"#
                }))
                .route(POST_REVIEW, post(|| async { r#"{"status":true}"# })),
        )
    }

    #[tokio::test]
    async fn posted_review_shows_on_reloaded_page() {
        let app_state = AppState::new(&config_for(fake_backend(), "")).unwrap();

        let res = router(app_state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/review")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("user-name=Alice&restaurant-name=Cafe+X&review=lovely&rating=5"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let html = body_text(res).await;
        assert!(html.contains("Thanks Alice, your review of Cafe X was posted."));
        assert!(html.contains("<strong>Alice</strong> (5/5): lovely"));
    }
}
