use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Review {
    pub user_name: String,
    #[serde(default)]
    pub restaurant_name: String,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub rating: i32,
}

/// Ordered reviews of one restaurant.
#[derive(Clone, Deserialize, Debug, Default, PartialEq)]
#[serde(from = "ReviewListWire")]
pub struct ReviewList {
    pub reviews: Vec<Review>,
}

impl ReviewList {
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

/// Shapes the review endpoints answer with: `null` when nothing was found,
/// a single review from `/get-review`, the per user map from
/// `/search-reviews`, a plain array, or `{}` once the backend drops an empty
/// map from its json.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReviewListWire {
    Nothing(()),
    Many(Vec<Review>),
    Single(Review),
    Search {
        reviews_map: BTreeMap<String, Review>,
    },
    EmptyObject(EmptyObject),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EmptyObject {}

impl From<ReviewListWire> for ReviewList {
    fn from(wire: ReviewListWire) -> Self {
        let reviews = match wire {
            ReviewListWire::Nothing(()) => Vec::new(),
            ReviewListWire::Many(reviews) => reviews,
            ReviewListWire::Single(review) => vec![review],
            ReviewListWire::Search { reviews_map } => reviews_map.into_values().collect(),
            ReviewListWire::EmptyObject(_) => Vec::new(),
        };
        Self { reviews }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PostReviewRequest {
    pub user_name: String,
    pub restaurant_name: String,
    pub review: String,
    pub rating: i32,
}
