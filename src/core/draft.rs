use thiserror::Error;

use crate::core::range::RangeError;
use crate::models::{FilterCriteria, MAX_RATING};

/// Errors raised while editing draft filters. A failed edit leaves the draft unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("rating must be between 0 and 5, got {0}")]
    RatingOutOfRange(u8),
}

/// In-progress filter edits made while the filter panel is open.
///
/// Nothing here is consulted for matching; the controller copies the draft
/// into its committed criteria on apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterDraft {
    criteria: FilterCriteria,
}

impl FilterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_criteria(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Add the subject if absent, remove it if present.
    ///
    /// Returns whether the subject is selected afterwards. Blank names are ignored.
    pub fn toggle_subject(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        if self.criteria.subjects.remove(name) {
            false
        } else {
            self.criteria.subjects.insert(name.to_string());
            true
        }
    }

    /// Set the minimum star rating. Selecting the current value keeps it.
    pub fn set_rating(&mut self, stars: u8) -> Result<(), DraftError> {
        if stars > MAX_RATING {
            return Err(DraftError::RatingOutOfRange(stars));
        }
        self.criteria.min_rating = stars;
        Ok(())
    }

    pub fn set_price_min(&mut self, value: f64) -> Result<f64, DraftError> {
        Ok(self.criteria.price_range.set_min(value)?)
    }

    pub fn set_price_max(&mut self, value: f64) -> Result<f64, DraftError> {
        Ok(self.criteria.price_range.set_max(value)?)
    }

    /// Move both thumbs in one edit.
    ///
    /// The thumb moving away from the other is applied first, so a jump to a
    /// disjoint range such as `{5, 20}` to `{50, 60}` is not clamped by the
    /// old opposite bound. Non-finite input leaves the draft unchanged.
    pub fn set_price(&mut self, min: Option<f64>, max: Option<f64>) -> Result<(), DraftError> {
        if let Some(value) = min.into_iter().chain(max).find(|value| !value.is_finite()) {
            return Err(RangeError::NonFinite(value).into());
        }

        let range = &mut self.criteria.price_range;
        match (min, max) {
            (Some(min), Some(max)) if min >= range.max() => {
                range.set_max(max)?;
                range.set_min(min)?;
            }
            _ => {
                if let Some(min) = min {
                    range.set_min(min)?;
                }
                if let Some(max) = max {
                    range.set_max(max)?;
                }
            }
        }
        Ok(())
    }

    /// Restore the unrestricted sentinel
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::unrestricted();
    }
}
