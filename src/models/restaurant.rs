use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Restaurant details as returned by `/get-detail`. The backend drops empty
/// fields from its json, so every known field falls back to its default.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct RestaurantDetails {
    pub restaurant_name: String,
    pub location: String,
    pub style: String,
    pub capacity: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PostDetailRequest {
    pub restaurant_name: String,
    pub location: String,
    pub style: String,
    pub capacity: i32,
}

/// Answer of the write endpoints (`/post-detail`, `/post-review`,
/// `/make-reservation`). A missing `status` means false.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PostStatus {
    pub status: bool,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PopularRestaurants {
    pub top_k_restaurants: Vec<String>,
}
