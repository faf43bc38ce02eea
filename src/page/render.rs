use std::fmt::Write;
use serde_json::Value;
use crate::models::reservation::Reservation;
use crate::models::restaurant::{PopularRestaurants, RestaurantDetails};
use crate::models::review::ReviewList;
use crate::page::document::{DisplayRegion, Document, MemoryRegion, RegionState};
use crate::page::form::{CAPACITY, DAY, LOCATION, MONTH, RATING, RESTAURANT_NAME, REVIEW, STYLE, USER_NAME, YEAR};

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn extra_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn restaurant_details(details: &RestaurantDetails) -> String {
    let mut html = String::new();
    let _ = write!(html, "<h2>{}</h2><dl>", escape_html(&details.restaurant_name));
    let _ = write!(html, "<dt>Location</dt><dd>{}</dd>", escape_html(&details.location));
    let _ = write!(html, "<dt>Style</dt><dd>{}</dd>", escape_html(&details.style));
    let _ = write!(html, "<dt>Capacity</dt><dd>{}</dd>", details.capacity);
    for (key, value) in &details.extra {
        let _ = write!(
            html,
            "<dt>{}</dt><dd>{}</dd>",
            escape_html(key),
            escape_html(&extra_value(value))
        );
    }
    html.push_str("</dl>");
    html
}

pub fn reviews(list: &ReviewList) -> String {
    if list.is_empty() {
        return "<p>No reviews yet.</p>".to_string();
    }

    let mut html = String::from("<ul>");
    for review in &list.reviews {
        let _ = write!(
            html,
            "<li><strong>{}</strong> ({}/5): {}</li>",
            escape_html(&review.user_name),
            review.rating,
            escape_html(&review.review)
        );
    }
    html.push_str("</ul>");
    html
}

pub fn message(text: &str) -> String {
    format!("<p>{}</p>", escape_html(text))
}

pub fn reservation(reservation: &Reservation) -> String {
    format!(
        "<p>{} has a table at {} on {}-{}-{}</p>",
        escape_html(&reservation.user_name),
        escape_html(&reservation.restaurant_name),
        reservation.time.year,
        reservation.time.month,
        reservation.time.day
    )
}

pub fn popular(popular: &PopularRestaurants) -> String {
    let mut html = String::from("<ol>");
    for name in &popular.top_k_restaurants {
        let _ = write!(html, "<li>{}</li>", escape_html(name));
    }
    html.push_str("</ol>");
    html
}

fn region(region: &MemoryRegion) -> String {
    let id = region.id();
    match region.state() {
        RegionState::Empty => format!("<div id=\"{}\"></div>", id),
        RegionState::Rendered(html) => format!("<div id=\"{}\">{}</div>", id, html),
        RegionState::Failed(message) => format!(
            "<div id=\"{}\" class=\"error\"><p>{}</p></div>",
            id,
            escape_html(&message)
        ),
    }
}

fn text_input(id: &str, name: &str, label: &str, value: &str) -> String {
    format!(
        "<label for=\"{id}\">{label}</label><input type=\"text\" id=\"{id}\" name=\"{name}\" value=\"{value}\">",
        id = id,
        name = name,
        label = label,
        value = escape_html(value)
    )
}

/// Full restaurant page with every display region and both forms.
pub fn page(document: &Document, restaurant_name: &str) -> String {
    let mut html = String::from("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>");
    html.push_str(&escape_html(restaurant_name));
    html.push_str("</title></head><body>");

    html.push_str(&region(&document.restaurant_details));
    html.push_str(&region(&document.reviews));

    html.push_str("<form id=\"reservation-form\" method=\"post\" action=\"/reserve\">");
    html.push_str(&text_input(USER_NAME, USER_NAME, "Name", ""));
    html.push_str(&text_input(RESTAURANT_NAME, RESTAURANT_NAME, "Restaurant", restaurant_name));
    html.push_str(&text_input(YEAR, YEAR, "Year", ""));
    html.push_str(&text_input(MONTH, MONTH, "Month", ""));
    html.push_str(&text_input(DAY, DAY, "Day", ""));
    html.push_str("<button type=\"submit\">Reserve</button></form>");
    html.push_str(&region(&document.reservation_message));

    html.push_str("<form id=\"review-form\" method=\"post\" action=\"/review\">");
    html.push_str(&text_input("review-user-name", USER_NAME, "Name", ""));
    html.push_str(&text_input("review-restaurant-name", RESTAURANT_NAME, "Restaurant", restaurant_name));
    html.push_str(&text_input("review-text", REVIEW, "Review", ""));
    html.push_str(&text_input("review-rating", RATING, "Rating", ""));
    html.push_str("<button type=\"submit\">Post review</button></form>");

    html.push_str("<form id=\"restaurant-form\" method=\"post\" action=\"/restaurant\">");
    html.push_str(&text_input("new-restaurant-name", RESTAURANT_NAME, "Restaurant", ""));
    html.push_str(&text_input("new-location", LOCATION, "Location", ""));
    html.push_str(&text_input("new-style", STYLE, "Style", ""));
    html.push_str(&text_input("new-capacity", CAPACITY, "Capacity", ""));
    html.push_str("<button type=\"submit\">Save restaurant</button></form>");

    html.push_str(&region(&document.reservations));
    html.push_str(&region(&document.popular));
    html.push_str("</body></html>");
    html
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;
    use crate::models::review::Review;

    #[test]
    fn escapes_backend_text() {
        assert_eq!(escape_html("<b>\"Tom & Jerry's\"</b>"), "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;");
    }

    #[test]
    fn details_include_extra_fields() {
        let details: RestaurantDetails = serde_json::from_value(json!({
            "restaurant_name": "Cafe X",
            "phone": "555-0100"
        }))
        .unwrap();

        let html = restaurant_details(&details);
        assert!(html.contains("<h2>Cafe X</h2>"));
        assert!(html.contains("<dt>phone</dt><dd>555-0100</dd>"));
    }

    #[test]
    fn empty_reviews_say_so() {
        assert_eq!(reviews(&ReviewList::default()), "<p>No reviews yet.</p>");
    }

    #[test]
    fn reviews_are_listed_in_order() {
        let list = ReviewList {
            reviews: vec![
                Review { user_name: "alice".into(), restaurant_name: "Cafe X".into(), review: "great".into(), rating: 5 },
                Review { user_name: "bob".into(), restaurant_name: "Cafe X".into(), review: "meh".into(), rating: 2 },
            ],
        };

        let html = reviews(&list);
        assert!(html.find("alice").unwrap() < html.find("bob").unwrap());
    }

    #[test]
    fn page_marks_failed_regions() {
        let document = Document::new();
        document.reviews.show_error("backend down".to_string());

        let html = page(&document, "Cafe X");
        assert!(html.contains("<div id=\"reviews\" class=\"error\"><p>backend down</p></div>"));
        assert!(html.contains("<div id=\"restaurant-details\"></div>"));
        assert!(html.contains("id=\"reservation-form\""));
    }
}
