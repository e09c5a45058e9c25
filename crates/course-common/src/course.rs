use serde::{Deserialize, Serialize};

/// A single course listing as returned by the search backend.
///
/// The backend owns validation; the client accepts whatever deserializes into
/// this shape and ignores unknown fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    /// Average rating, nominally 0.0 to 5.0.
    pub rating: f64,
    pub num_reviews: u64,
    pub is_paid: bool,
    pub url: String,
}
