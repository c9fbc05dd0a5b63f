//! Property-based tests for outcome histograms.

use gatelab_hal::Counts;
use proptest::prelude::*;

fn arb_outcomes() -> impl Strategy<Value = Vec<(String, u64)>> {
    prop::collection::vec(("[01]{1,2}", 0_u64..500), 0..20)
}

proptest! {
    #[test]
    fn total_is_sum_of_inserts(outcomes in arb_outcomes()) {
        let expected: u64 = outcomes.iter().map(|(_, c)| c).sum();
        let counts: Counts = outcomes.into_iter().collect();
        prop_assert_eq!(counts.total_shots(), expected);
    }

    #[test]
    fn sorted_is_non_increasing(outcomes in arb_outcomes()) {
        let counts: Counts = outcomes.into_iter().collect();
        let sorted = counts.sorted();
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
        prop_assert_eq!(sorted.len(), counts.len());
    }

    #[test]
    fn probabilities_sum_to_one(outcomes in arb_outcomes()) {
        let counts: Counts = outcomes.into_iter().collect();
        prop_assume!(counts.total_shots() > 0);
        let sum: f64 = counts.iter().map(|(k, _)| counts.probability(k)).sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn every_recorded_outcome_is_positive(outcomes in arb_outcomes()) {
        let nonzero = outcomes.iter().filter(|(_, c)| *c > 0).count();
        let counts: Counts = outcomes.into_iter().collect();
        prop_assert!(counts.iter().all(|(_, c)| *c > 0));
        prop_assert!(counts.len() <= nonzero);
    }
}
