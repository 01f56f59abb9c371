use serde::Serialize;
use crate::core::range::TrackFill;
use crate::models::domain::{FilterCriteria, TutorRecord};

/// Everything the presentation layer renders for a discovery page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryView {
    pub tutors: Vec<TutorRecord>,
    pub loading: bool,
    pub is_filter_panel_open: bool,
    pub draft_filters: FilterCriteria,
    pub committed_filters: FilterCriteria,
    pub search_term: String,
    pub price_track: TrackFill,
    pub subject_options: Vec<String>,
    pub visible_count: usize,
    pub total_count: usize,
}

/// Response for session creation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreatedResponse {
    pub session_id: uuid::Uuid,
    pub view: DiscoveryView,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub active_sessions: u64,
}

/// Error response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
        }
    }
}
