// Property tests for the price range and filter draft

use proptest::prelude::*;
use tutor_discovery::core::range::{PriceRange, MIN_PRICE_GAP, PRICE_CEILING, PRICE_FLOOR};
use tutor_discovery::core::predicate::compute_visible;
use tutor_discovery::core::DiscoveryController;
use tutor_discovery::models::TutorRecord;

#[derive(Debug, Clone)]
enum Thumb {
    Min(f64),
    Max(f64),
}

fn price_input() -> impl Strategy<Value = f64> {
    prop_oneof![
        -50_000.0..50_000.0f64,
        0.0..20.0f64,
        9_990.0..10_010.0f64,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

fn thumb_moves() -> impl Strategy<Value = Vec<Thumb>> {
    proptest::collection::vec(
        prop_oneof![price_input().prop_map(Thumb::Min), price_input().prop_map(Thumb::Max)],
        0..64,
    )
}

fn assert_invariant(range: &PriceRange) -> Result<(), TestCaseError> {
    prop_assert!(range.min() >= PRICE_FLOOR, "min {} below floor", range.min());
    prop_assert!(range.max() <= PRICE_CEILING, "max {} above ceiling", range.max());
    prop_assert!(
        range.max() - range.min() >= MIN_PRICE_GAP,
        "gap {}..{} too narrow",
        range.min(),
        range.max()
    );
    Ok(())
}

proptest! {
    #[test]
    fn range_invariant_holds_after_every_move(moves in thumb_moves()) {
        let mut range = PriceRange::unrestricted();

        for thumb in moves {
            let before = range;
            let result = match thumb {
                Thumb::Min(value) => range.set_min(value),
                Thumb::Max(value) => range.set_max(value),
            };
            if result.is_err() {
                prop_assert_eq!(range, before);
            }
            assert_invariant(&range)?;
        }
    }

    #[test]
    fn track_fill_stays_within_domain(moves in thumb_moves()) {
        let mut range = PriceRange::unrestricted();
        for thumb in moves {
            let _ = match thumb {
                Thumb::Min(value) => range.set_min(value),
                Thumb::Max(value) => range.set_max(value),
            };
        }

        let fill = range.track();
        prop_assert!(fill.left_percent >= 0.0);
        prop_assert!(fill.width_percent > 0.0);
        prop_assert!(fill.left_percent + fill.width_percent <= 100.0 + 1e-9);
    }

    #[test]
    fn draft_edits_never_change_visible_list(
        rates in proptest::collection::vec(0.0..500.0f64, 1..20),
        max in 10.0..600.0f64,
        stars in 0u8..=5,
    ) {
        let catalog: Vec<TutorRecord> = rates
            .iter()
            .enumerate()
            .map(|(i, rate)| TutorRecord::new(i.to_string(), format!("Tutor {}", i)).with_hourly_rate(*rate))
            .collect();

        let mut controller = DiscoveryController::new();
        controller.begin_loading();
        controller.finish_loading(Ok(catalog.clone()));
        let before: Vec<String> = controller.visible().iter().map(|t| t.id.clone()).collect();

        controller.open_panel();
        controller.set_price_max(max).unwrap();
        controller.set_rating(stars).unwrap();
        controller.reset_draft();
        controller.set_price_max(max).unwrap();

        let after: Vec<String> = controller.visible().iter().map(|t| t.id.clone()).collect();
        prop_assert_eq!(&before, &after);

        controller.apply();
        let applied: Vec<String> = controller.visible().iter().map(|t| t.id.clone()).collect();
        let expected: Vec<String> = compute_visible(&catalog, "", controller.committed())
            .iter()
            .map(|t| t.id.clone())
            .collect();
        prop_assert_eq!(applied, expected);
    }
}
