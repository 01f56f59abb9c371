use std::collections::BTreeSet;

use crate::core::range::PriceRange;
use crate::models::{FieldError, FilterCriteria, TutorRecord};

/// Search input, trimmed and lower-cased once at construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Activity gate: is any search or filter narrowing the catalog?
#[inline]
pub fn is_filtering(term: &SearchTerm, committed: &FilterCriteria) -> bool {
    !term.is_empty() || committed.is_active()
}

/// Case-insensitive substring match on name, subjects and bio
pub fn matches_text(tutor: &TutorRecord, term: &SearchTerm) -> Result<bool, FieldError> {
    if term.is_empty() {
        return Ok(true);
    }
    let needle = term.as_str();

    if tutor.name()?.to_lowercase().contains(needle) {
        return Ok(true);
    }
    if tutor.all_subjects()?.join(" ").to_lowercase().contains(needle) {
        return Ok(true);
    }
    Ok(tutor.bio()?.to_lowercase().contains(needle))
}

#[inline]
pub fn matches_price(tutor: &TutorRecord, range: &PriceRange) -> Result<bool, FieldError> {
    Ok(range.contains(tutor.hourly_rate()?))
}

/// Any selected subject appearing inside any of the tutor's subjects.
///
/// Containment runs filter-in-tutor: "math" matches "Mathematics", not the reverse.
pub fn matches_subjects(
    tutor: &TutorRecord,
    selected: &BTreeSet<String>,
) -> Result<bool, FieldError> {
    if selected.is_empty() {
        return Ok(true);
    }

    let offered: Vec<String> = tutor
        .all_subjects()?
        .into_iter()
        .map(str::to_lowercase)
        .collect();

    Ok(selected.iter().any(|wanted| {
        let wanted = wanted.to_lowercase();
        offered.iter().any(|subject| subject.contains(&wanted))
    }))
}

#[inline]
pub fn matches_rating(tutor: &TutorRecord, min_rating: u8) -> Result<bool, FieldError> {
    Ok(tutor.rating()? >= f64::from(min_rating))
}

/// Run every sub-predicate in order, stopping at the first miss
pub fn evaluate(
    tutor: &TutorRecord,
    term: &SearchTerm,
    committed: &FilterCriteria,
) -> Result<bool, FieldError> {
    Ok(matches_text(tutor, term)?
        && matches_price(tutor, &committed.price_range)?
        && matches_subjects(tutor, &committed.subjects)?
        && matches_rating(tutor, committed.min_rating)?)
}

/// Decide whether a tutor is shown.
///
/// Records with unreadable fields are shown rather than hidden.
pub fn matches_tutor(tutor: &TutorRecord, term: &SearchTerm, committed: &FilterCriteria) -> bool {
    if !is_filtering(term, committed) {
        return true;
    }

    evaluate(tutor, term, committed).unwrap_or_else(|e| {
        tracing::warn!("Showing tutor {} despite unreadable record: {}", tutor.id, e);
        true
    })
}

/// Filter the catalog for the given search term and committed filters, keeping catalog order
pub fn compute_visible<'a>(
    catalog: &'a [TutorRecord],
    term: &str,
    committed: &FilterCriteria,
) -> Vec<&'a TutorRecord> {
    let term = SearchTerm::new(term);

    catalog
        .iter()
        .filter(|tutor| matches_tutor(tutor, &term, committed))
        .collect()
}
