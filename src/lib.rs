//! Tutor Discovery - filtering engine for the tutoring marketplace catalog
//!
//! This library lets a student narrow a tutor catalog by free-text search,
//! price range, subjects and minimum rating. Filter edits are drafted in a
//! side panel and only affect the visible list once applied.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{compute_visible, DiscoveryController, FilterDraft, PriceRange};
pub use crate::models::{DiscoveryView, FilterCriteria, NavigationIntent, TutorRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let catalog = vec![TutorRecord::new("1", "Ada")];
        let visible = compute_visible(&catalog, "", &FilterCriteria::unrestricted());
        assert_eq!(visible.len(), 1);
    }
}
