use serde::{Deserialize, Serialize};

/// The five reservation form values, sent verbatim as query parameters.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ReservationRequest {
    pub user_name: String,
    pub restaurant_name: String,
    pub year: String,
    pub month: String,
    pub day: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ReservationResponse {
    pub status: bool,
}

impl ReservationResponse {
    pub fn outcome_message(&self, request: &ReservationRequest) -> String {
        if self.status {
            format!(
                "Reservation confirmed for {} at {} on {}-{}-{}",
                request.user_name, request.restaurant_name, request.year, request.month, request.day
            )
        } else {
            format!(
                "Reservation for {} at {} was not recorded, please try again.",
                request.user_name, request.restaurant_name
            )
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ReservationDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

/// A stored reservation as returned by `/get-reservation`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Reservation {
    pub user_name: String,
    pub restaurant_name: String,
    pub time: ReservationDate,
}
