use crate::error::Result;
use crate::models::reservation::{Reservation, ReservationRequest, ReservationResponse};
use crate::models::restaurant::{PopularRestaurants, PostDetailRequest, PostStatus, RestaurantDetails};
use crate::models::review::{PostReviewRequest, ReviewList};

pub mod http_backend;

pub use http_backend::HttpBackend;

/// Endpoints of the restaurant backend the page talks to.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn get_detail(&self, restaurant_name: &str) -> Result<RestaurantDetails>;

    /// Sends only `restaurant_name`, as the page always has. Backends that
    /// also require `user_name` on `/get-review` answer 400, which lands in
    /// the reviews region as `Rejected`; `search_reviews` needs no user.
    async fn get_review(&self, restaurant_name: &str) -> Result<ReviewList>;

    async fn make_reservation(&self, request: &ReservationRequest) -> Result<ReservationResponse>;

    async fn post_detail(&self, request: &PostDetailRequest) -> Result<PostStatus>;

    async fn search_reviews(&self, restaurant_name: &str) -> Result<ReviewList>;

    async fn post_review(&self, request: &PostReviewRequest) -> Result<PostStatus>;

    async fn get_reservation(&self, user_name: &str) -> Result<Reservation>;

    async fn most_popular(&self, top_k: u32) -> Result<PopularRestaurants>;
}
