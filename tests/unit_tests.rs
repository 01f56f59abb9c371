// Unit tests for Tutor Discovery

use std::collections::BTreeSet;
use tutor_discovery::core::{
    draft::FilterDraft,
    predicate::{compute_visible, is_filtering, matches_subjects, matches_tutor, SearchTerm},
    range::{PriceRange, PRICE_CEILING, PRICE_FLOOR},
};
use tutor_discovery::models::{FilterCriteria, TutorRecord};
use serde_json::json;

fn create_ada() -> TutorRecord {
    TutorRecord::new("ada", "Ada")
        .with_hourly_rate(40.0)
        .with_rating(4.2)
        .with_subjects_taught(["Physics"])
}

fn create_ben() -> TutorRecord {
    TutorRecord::new("ben", "Ben")
        .with_hourly_rate(90.0)
        .with_rating(3.0)
        .with_subjects_taught(["Mathematics"])
}

fn names<'a>(tutors: &[&'a TutorRecord]) -> Vec<&'a str> {
    tutors.iter().map(|t| t.name().unwrap()).collect()
}

#[test]
fn test_price_and_rating_scenario() {
    let catalog = vec![create_ada(), create_ben()];

    let mut draft = FilterDraft::new();
    draft.set_price_max(60.0).unwrap();
    draft.set_rating(4).unwrap();
    let committed = draft.criteria().clone();

    assert_eq!(committed.price_range, PriceRange::new(5.0, 60.0).unwrap());
    assert_eq!(names(&compute_visible(&catalog, "", &committed)), vec!["Ada"]);
}

#[test]
fn test_search_scenario() {
    let catalog = vec![create_ada(), create_ben()];

    let visible = compute_visible(&catalog, "math", &FilterCriteria::unrestricted());

    assert_eq!(names(&visible), vec!["Ben"]);
}

#[test]
fn test_subject_fuzzy_match() {
    let tutor = TutorRecord::new("1", "Cleo").with_subjects_taught(["Mathematics"]);
    let wanted: BTreeSet<String> = ["math".to_string()].into();
    let too_specific: BTreeSet<String> = ["mathematical logic".to_string()].into();

    assert!(matches_subjects(&tutor, &wanted).unwrap());
    assert!(!matches_subjects(&tutor, &too_specific).unwrap());
}

#[test]
fn test_unrestricted_shows_everything() {
    let catalog: Vec<TutorRecord> = vec![
        create_ada(),
        TutorRecord::new("empty", ""),
        serde_json::from_value(json!({"id": "broken", "subject": null, "teacherProfile": "n/a"}))
            .unwrap(),
        serde_json::from_value(json!({"id": "weird", "subject": [1, 2], "teacherProfile": {"rating": "five"}}))
            .unwrap(),
    ];
    let committed = FilterCriteria::unrestricted();

    assert!(!is_filtering(&SearchTerm::new(""), &committed));
    assert_eq!(compute_visible(&catalog, "", &committed).len(), catalog.len());
}

#[test]
fn test_whitespace_term_is_not_filtering() {
    assert!(!is_filtering(&SearchTerm::new("   "), &FilterCriteria::unrestricted()));
}

#[test]
fn test_bounds_dragged_back_match_untouched() {
    let mut draft = FilterDraft::new();
    draft.set_price_min(500.0).unwrap();
    draft.set_price_max(800.0).unwrap();
    draft.set_price_min(PRICE_FLOOR).unwrap();
    draft.set_price_max(PRICE_CEILING).unwrap();

    assert_eq!(draft.criteria(), &FilterCriteria::unrestricted());
    assert!(!is_filtering(&SearchTerm::new(""), draft.criteria()));
}

#[test]
fn test_unpriced_tutor_hidden_by_raised_floor() {
    let catalog = vec![TutorRecord::new("new", "Newcomer").with_rating(5.0), create_ada()];

    let mut draft = FilterDraft::new();
    draft.set_price_min(20.0).unwrap();

    assert_eq!(names(&compute_visible(&catalog, "", draft.criteria())), vec!["Ada"]);
}

#[test]
fn test_unpriced_tutor_found_by_search() {
    let catalog = vec![TutorRecord::new("new", "Newcomer")];

    assert_eq!(
        names(&compute_visible(&catalog, "newcomer", &FilterCriteria::unrestricted())),
        vec!["Newcomer"]
    );
}

#[test]
fn test_malformed_record_shown_while_filtering() {
    let broken: TutorRecord =
        serde_json::from_value(json!({"id": "x", "name": "Xan", "teacherProfile": {"hourlyRate": [40]}}))
            .unwrap();
    let mut committed = FilterCriteria::unrestricted();
    committed.min_rating = 5;

    assert!(matches_tutor(&broken, &SearchTerm::new(""), &committed));
}

#[test]
fn test_filters_combine_with_and() {
    let catalog = vec![
        create_ada(),
        create_ben(),
        TutorRecord::new("cleo", "Cleo")
            .with_hourly_rate(45.0)
            .with_rating(4.8)
            .with_subjects_taught(["Applied Mathematics"]),
    ];

    let mut draft = FilterDraft::new();
    draft.toggle_subject("Math");
    draft.set_price_max(50.0).unwrap();
    draft.set_rating(4).unwrap();

    assert_eq!(names(&compute_visible(&catalog, "", draft.criteria())), vec!["Cleo"]);
    assert_eq!(names(&compute_visible(&catalog, "ada", draft.criteria())), Vec::<&str>::new());
}
