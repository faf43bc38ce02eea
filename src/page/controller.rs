use futures::future::join;
use tracing::{debug, warn};
use crate::backend::Backend;
use crate::error::PageError;
use crate::models::reservation::ReservationRequest;
use crate::models::restaurant::PostDetailRequest;
use crate::models::review::PostReviewRequest;
use crate::page::document::{DisplayRegion, Document};
use crate::page::form::{ReservationForm, SubmitEvent};
use crate::page::render;

/// Bridges page events (document ready, form submit) and the backend.
/// Every operation writes exactly one display region, failures included.
pub struct PageController<B> {
    backend: B,
}

impl<B: Backend> PageController<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Both loads start together and neither waits on the other.
    pub async fn on_document_ready(&self, document: &Document, restaurant_name: &str) {
        debug!("Loading page for restaurant: {}", restaurant_name);
        join(
            self.load_restaurant_details(&document.restaurant_details, restaurant_name),
            self.load_reviews(&document.reviews, restaurant_name),
        )
        .await;
    }

    pub async fn load_restaurant_details(&self, region: &impl DisplayRegion, restaurant_name: &str) {
        match self.backend.get_detail(restaurant_name).await {
            Ok(details) => region.render(render::restaurant_details(&details)),
            Err(e) => show_failure(region, e),
        }
    }

    pub async fn load_reviews(&self, region: &impl DisplayRegion, restaurant_name: &str) {
        match self.backend.get_review(restaurant_name).await {
            Ok(reviews) => region.render(render::reviews(&reviews)),
            Err(e) => show_failure(region, e),
        }
    }

    /// Form values are read fresh on every submission and sent as one
    /// reservation request.
    pub async fn submit_reservation(
        &self,
        event: &mut impl SubmitEvent,
        form: &impl ReservationForm,
        region: &impl DisplayRegion,
    ) {
        event.prevent_default();

        let request = ReservationRequest::from_form(form);
        match self.backend.make_reservation(&request).await {
            Ok(response) => region.render(render::message(&response.outcome_message(&request))),
            Err(e) => show_failure(region, e),
        }
    }

    pub async fn submit_review(
        &self,
        event: &mut impl SubmitEvent,
        form: &impl ReservationForm,
        region: &impl DisplayRegion,
    ) {
        event.prevent_default();

        let request = match PostReviewRequest::from_form(form) {
            Ok(request) => request,
            Err(e) => return show_failure(region, e),
        };
        match self.backend.post_review(&request).await {
            Ok(status) if status.status => region.render(render::message(&format!(
                "Thanks {}, your review of {} was posted.",
                request.user_name, request.restaurant_name
            ))),
            Ok(_) => region.render(render::message("Review was not recorded, please try again.")),
            Err(e) => show_failure(region, e),
        }
    }

    /// Every review of the restaurant, not only the one `/get-review` picks.
    pub async fn search_reviews(&self, region: &impl DisplayRegion, restaurant_name: &str) {
        match self.backend.search_reviews(restaurant_name).await {
            Ok(reviews) => region.render(render::reviews(&reviews)),
            Err(e) => show_failure(region, e),
        }
    }

    pub async fn submit_restaurant(
        &self,
        event: &mut impl SubmitEvent,
        form: &impl ReservationForm,
        region: &impl DisplayRegion,
    ) {
        event.prevent_default();

        let request = match PostDetailRequest::from_form(form) {
            Ok(request) => request,
            Err(e) => return show_failure(region, e),
        };
        match self.backend.post_detail(&request).await {
            Ok(status) if status.status => region.render(render::message(&format!(
                "{} was saved.",
                request.restaurant_name
            ))),
            Ok(_) => region.render(render::message("Restaurant was not recorded, please try again.")),
            Err(e) => show_failure(region, e),
        }
    }

    pub async fn load_reservation(&self, region: &impl DisplayRegion, user_name: &str) {
        match self.backend.get_reservation(user_name).await {
            Ok(reservation) => region.render(render::reservation(&reservation)),
            Err(e) => show_failure(region, e),
        }
    }

    pub async fn load_most_popular(&self, region: &impl DisplayRegion, top_k: u32) {
        match self.backend.most_popular(top_k).await {
            Ok(popular) => region.render(render::popular(&popular)),
            Err(e) => show_failure(region, e),
        }
    }
}

fn show_failure(region: &impl DisplayRegion, e: PageError) {
    warn!("Failed to fill region {} due to: {}", region.id(), e);
    region.show_error(e.to_string());
}
