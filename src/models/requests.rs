use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to change the search term
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub term: String,
}

/// Request to toggle a subject in the draft filters
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ToggleSubjectRequest {
    #[validate(length(min = 1, max = 100))]
    pub subject: String,
}

/// Request to set the draft minimum rating
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RatingRequest {
    #[validate(range(max = 5))]
    pub rating: u8,
}

/// Request to move one or both price thumbs. `min` is applied before `max`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRequest {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// Request to open a tutor's detail page
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SelectTutorRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "tutor_id", rename = "tutorId")]
    pub tutor_id: String,
}
