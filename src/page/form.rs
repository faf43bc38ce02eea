use std::collections::HashMap;
use crate::error::{PageError, Result};
use crate::models::reservation::ReservationRequest;
use crate::models::restaurant::PostDetailRequest;
use crate::models::review::PostReviewRequest;

pub const USER_NAME: &str = "user-name";
pub const RESTAURANT_NAME: &str = "restaurant-name";
pub const YEAR: &str = "year";
pub const MONTH: &str = "month";
pub const DAY: &str = "day";
pub const REVIEW: &str = "review";
pub const RATING: &str = "rating";
pub const LOCATION: &str = "location";
pub const STYLE: &str = "style";
pub const CAPACITY: &str = "capacity";

/// Form controls read at the moment of submission.
pub trait ReservationForm {
    /// Current value of the control, empty when the control is missing.
    fn value(&self, control: &str) -> String;
}

impl ReservationForm for HashMap<String, String> {
    fn value(&self, control: &str) -> String {
        self.get(control).cloned().unwrap_or_default()
    }
}

/// A submit event whose default action can be cancelled.
pub trait SubmitEvent {
    fn prevent_default(&mut self);
}

/// Form post received by the page service. Handlers answer it in place with
/// the updated page, so every submit operation cancels its default.
#[derive(Debug, Default)]
pub struct FormPost {
    prevented: usize,
}

impl FormPost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_count(&self) -> usize {
        self.prevented
    }
}

impl SubmitEvent for FormPost {
    fn prevent_default(&mut self) {
        self.prevented += 1;
    }
}

impl ReservationRequest {
    pub fn from_form(form: &impl ReservationForm) -> Self {
        Self {
            user_name: form.value(USER_NAME),
            restaurant_name: form.value(RESTAURANT_NAME),
            year: form.value(YEAR),
            month: form.value(MONTH),
            day: form.value(DAY),
        }
    }
}

impl PostReviewRequest {
    pub fn from_form(form: &impl ReservationForm) -> Result<Self> {
        let rating = form.value(RATING);
        let rating = rating
            .trim()
            .parse::<i32>()
            .map_err(|_| PageError::InvalidInput(format!("rating must be a number, got `{}`", rating)))?;

        Ok(Self {
            user_name: form.value(USER_NAME),
            restaurant_name: form.value(RESTAURANT_NAME),
            review: form.value(REVIEW),
            rating,
        })
    }
}

impl PostDetailRequest {
    pub fn from_form(form: &impl ReservationForm) -> Result<Self> {
        let capacity = form.value(CAPACITY);
        let capacity = capacity
            .trim()
            .parse::<i32>()
            .map_err(|_| PageError::InvalidInput(format!("capacity must be a number, got `{}`", capacity)))?;

        Ok(Self {
            restaurant_name: form.value(RESTAURANT_NAME),
            location: form.value(LOCATION),
            style: form.value(STYLE),
            capacity,
        })
    }
}
