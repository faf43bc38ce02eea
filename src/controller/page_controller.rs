use axum::{Extension, Router};
use axum::extract::Query;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use serde::{Deserialize, Serialize};
use crate::controller::AppState;
use crate::page::{render, DisplayRegion, Document};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(restaurant_page))
        .route("/popular", get(most_popular_page))
        .route_layer(Extension(app_state))
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct RestaurantPageQuery {
    pub restaurant_name: Option<String>,
}

/// Loads the page the way a browser's document ready would: details and
/// reviews at the same time, each into its own region.
pub async fn load_restaurant(app_state: &AppState, document: &Document, restaurant_name: Option<&str>) {
    match restaurant_name {
        Some(name) => app_state.page_controller.on_document_ready(document, name).await,
        None => document
            .restaurant_details
            .render(render::message("Pick a restaurant to see its details.")),
    }
}

pub async fn restaurant_page(
    Extension(app_state): Extension<AppState>,
    Query(query): Query<RestaurantPageQuery>,
) -> impl IntoResponse {
    let restaurant_name = app_state.restaurant_for(query.restaurant_name);
    let document = Document::new();

    load_restaurant(&app_state, &document, restaurant_name.as_deref()).await;

    Html(render::page(&document, restaurant_name.as_deref().unwrap_or_default()))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct MostPopularQuery {
    pub topk: u32,
}

pub async fn most_popular_page(
    Extension(app_state): Extension<AppState>,
    Query(query): Query<MostPopularQuery>,
) -> impl IntoResponse {
    let document = Document::new();

    app_state
        .page_controller
        .load_most_popular(&document.popular, query.topk)
        .await;

    Html(render::page(&document, ""))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get as get_route;
    use serde_json::json;
    use tower::ServiceExt;
    use super::*;
    use crate::backend::http_backend::{GET_DETAIL, GET_REVIEW, MOST_POPULAR};
    use crate::tests::utils::{body_text, closed_addr, config_for, config_with_timeout, spawn_backend};

    fn fake_backend() -> std::net::SocketAddr {
        spawn_backend(
            Router::new()
                .route(GET_DETAIL, get_route(|| async {
                    json!({ "restaurant_name": "Cafe X", "location": "Seattle", "style": "Cafe", "capacity": 20 }).to_string()
                }))
                .route(GET_REVIEW, get_route(|| async { "not json" }))
                .route(MOST_POPULAR, get_route(|| async { r#"{"top_k_restaurants":["Cafe X"]}"# })),
        )
    }

    async fn get_page(app_state: AppState, uri: &str) -> (StatusCode, String) {
        let res = router(app_state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        (res.status(), body_text(res).await)
    }

    #[tokio::test]
    async fn page_renders_details_even_when_reviews_are_malformed() {
        let app_state = AppState::new(&config_for(fake_backend(), "Cafe X")).unwrap();

        let (status, html) = get_page(app_state, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<dt>Location</dt><dd>Seattle</dd>"));
        assert!(html.contains("<div id=\"reviews\" class=\"error\">"));
    }

    #[tokio::test]
    async fn page_without_restaurant_asks_for_one() {
        let app_state = AppState::new(&config_for(closed_addr(), "")).unwrap();

        let (status, html) = get_page(app_state, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Pick a restaurant"));
        assert!(html.contains("<div id=\"reviews\"></div>"));
    }

    #[tokio::test]
    async fn unreachable_backend_shows_errors_in_both_regions() {
        let app_state = AppState::new(&config_for(closed_addr(), "Cafe X")).unwrap();

        let (_, html) = get_page(app_state, "/?restaurant_name=Diner").await;

        assert!(html.contains("<div id=\"restaurant-details\" class=\"error\">"));
        assert!(html.contains("<div id=\"reviews\" class=\"error\">"));
        assert!(html.contains("<title>Diner</title>"));
    }

    #[tokio::test]
    async fn popular_needs_a_number() {
        let app_state = AppState::new(&config_for(fake_backend(), "")).unwrap();

        let (status, _) = get_page(app_state.clone(), "/popular?topk=many").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, html) = get_page(app_state, "/popular?topk=1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<ol><li>Cafe X</li></ol>"));
    }

    #[tokio::test]
    async fn hung_details_still_deliver_reviews() {
        let addr = spawn_backend(
            Router::new()
                .route(GET_DETAIL, get_route(|| async {
                    tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
                    "{}"
                }))
                .route(GET_REVIEW, get_route(|| async {
                    r#"{"user_name":"bob","restaurant_name":"Cafe X","review":"cozy","rating":4}"#
                })),
        );
        let app_state = AppState::new(&config_with_timeout(addr, "Cafe X", 1)).unwrap();

        let (status, html) = tokio::time::timeout(std::time::Duration::from_secs(5), get_page(app_state, "/"))
            .await
            .expect("page never answered");

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<strong>bob</strong> (4/5): cozy"));
        assert!(html.contains("<div id=\"restaurant-details\" class=\"error\">"));
    }
}
