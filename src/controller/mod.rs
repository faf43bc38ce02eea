use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use crate::backend::HttpBackend;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::page::PageController;

pub mod health_check;
pub mod page_controller;
pub mod restaurant_controller;
pub mod user_reservation_controller;
pub mod user_review_controller;

#[derive(Clone)]
pub struct AppState {
    pub page_controller: Arc<PageController<HttpBackend>>,
    pub default_restaurant: String,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let backend = HttpBackend::new(config.clone())
            .context("Error building the backend http client")?;

        Ok(Self {
            page_controller: Arc::new(PageController::new(backend)),
            default_restaurant: config.restaurant_name.clone(),
        })
    }

    /// Restaurant named by the page url, else the configured one.
    pub fn restaurant_for(&self, requested: Option<String>) -> Option<String> {
        requested
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .or_else(|| {
                let name = self.default_restaurant.trim();
                (!name.is_empty()).then(|| name.to_string())
            })
    }
}

pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let app_state = AppState::new(config)?;

    let origins: Vec<HeaderValue> = config
        .origin_urls
        .split(',')
        .filter_map(|s| match s.trim().parse() {
            Ok(origin) => Some(origin),
            Err(e) => {
                warn!("Ignoring invalid origin url {} due to: {}", s, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::OPTIONS
                        ])
                        .allow_origin(origins)
                        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                )
                .layer(CompressionLayer::new())
        )
        .fallback(page_not_found_handler);

    let port = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(
        "Restaurant page listening on port: {} ({}), backend at {}",
        port, config.environment, config.backend_url
    );
    axum::Server::bind(&port)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the page server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .merge(page_controller::router(app_state.clone()))
        .merge(restaurant_controller::router(app_state.clone()))
        .merge(user_reservation_controller::router(app_state.clone()))
        .merge(user_review_controller::router(app_state))
}
