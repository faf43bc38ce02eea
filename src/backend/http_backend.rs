use std::time::Instant;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};
use crate::backend::Backend;
use crate::config::Config;
use crate::error::{PageError, Result};
use crate::models::reservation::{Reservation, ReservationRequest, ReservationResponse};
use crate::models::restaurant::{PopularRestaurants, PostDetailRequest, PostStatus, RestaurantDetails};
use crate::models::review::{PostReviewRequest, ReviewList};

pub const GET_DETAIL: &str = "/get-detail";
pub const POST_DETAIL: &str = "/post-detail";
pub const GET_REVIEW: &str = "/get-review";
pub const POST_REVIEW: &str = "/post-review";
pub const SEARCH_REVIEWS: &str = "/search-reviews";
pub const GET_RESERVATION: &str = "/get-reservation";
pub const MAKE_RESERVATION: &str = "/make-reservation";
pub const MOST_POPULAR: &str = "/most-popular";

#[derive(Serialize)]
struct RestaurantQuery<'a> {
    restaurant_name: &'a str,
}

#[derive(Serialize)]
struct UserQuery<'a> {
    user_name: &'a str,
}

#[derive(Serialize)]
struct TopKQuery {
    topk: u32,
}

/// Talks to the backend over http. Reads are GETs and writes are POSTs,
/// both carrying their parameters in the query string.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: Config,
}

impl HttpBackend {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut client_builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            client_builder = client_builder.timeout(timeout);
        }
        let client = client_builder.build()?;

        Ok(Self { client, config })
    }

    async fn request<Q, R>(
        &self,
        method: Method,
        endpoint: &str,
        query: &Q,
    ) -> Result<R>
    where
        Q: Serialize,
        R: DeserializeOwned,
    {
        let start = Instant::now();
        let input = serde_json::to_string(query).unwrap_or_default();

        let res = self.send::<Q, R>(method, endpoint, query).await;

        let duration_us = start.elapsed().as_micros() as u64;
        match &res {
            Ok(_) => info!(handler = endpoint, input = %input, error = "<nil>", duration_us),
            Err(e) => warn!(handler = endpoint, input = %input, error = %e, duration_us),
        }
        res
    }

    async fn send<Q, R>(
        &self,
        method: Method,
        endpoint: &str,
        query: &Q,
    ) -> Result<R>
    where
        Q: Serialize,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint_url(endpoint);

        let response = self
            .client
            .request(method, &url)
            .query(query)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PageError::rejected(endpoint, status.as_u16(), body.trim()));
        }

        serde_json::from_str::<R>(&body).map_err(|e| PageError::parse(endpoint, e))
    }
}

impl Backend for HttpBackend {
    async fn get_detail(&self, restaurant_name: &str) -> Result<RestaurantDetails> {
        self.request(Method::GET, GET_DETAIL, &RestaurantQuery { restaurant_name }).await
    }

    async fn get_review(&self, restaurant_name: &str) -> Result<ReviewList> {
        self.request(Method::GET, GET_REVIEW, &RestaurantQuery { restaurant_name }).await
    }

    async fn make_reservation(&self, request: &ReservationRequest) -> Result<ReservationResponse> {
        self.request(Method::POST, MAKE_RESERVATION, request).await
    }

    async fn post_detail(&self, request: &PostDetailRequest) -> Result<PostStatus> {
        self.request(Method::POST, POST_DETAIL, request).await
    }

    async fn search_reviews(&self, restaurant_name: &str) -> Result<ReviewList> {
        self.request(Method::GET, SEARCH_REVIEWS, &RestaurantQuery { restaurant_name }).await
    }

    async fn post_review(&self, request: &PostReviewRequest) -> Result<PostStatus> {
        self.request(Method::POST, POST_REVIEW, request).await
    }

    async fn get_reservation(&self, user_name: &str) -> Result<Reservation> {
        self.request(Method::GET, GET_RESERVATION, &UserQuery { user_name }).await
    }

    async fn most_popular(&self, top_k: u32) -> Result<PopularRestaurants> {
        self.request(Method::GET, MOST_POPULAR, &TopKQuery { topk: top_k }).await
    }
}
