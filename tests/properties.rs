// Property tests for the scoring invariants: permutation invariance and range
// of the balance ratio, and conservation through aggregation.

use geo::{LineString, MultiPolygon, Polygon};
use proptest::prelude::*;

use beatline::{Partition, Unit, UnitId, aggregate, score_balance};

fn square(x: f64, y: f64) -> MultiPolygon<f64> {
    MultiPolygon(vec![Polygon::new(
        LineString::from(vec![
            (x, y), (x + 1.0, y), (x + 1.0, y + 1.0), (x, y + 1.0), (x, y),
        ]),
        vec![],
    )])
}

proptest! {
    #[test]
    fn balance_is_permutation_invariant(counts in prop::collection::vec(0u32..1_000_000, 1..20)) {
        // Integer-valued totals (the real inputs are counts), so the sum is
        // exact in any order and the scores compare bit-for-bit.
        let totals = counts.iter().map(|&c| c as f64).collect::<Vec<_>>();
        let forward = score_balance(&totals);

        let mut reversed = totals.clone();
        reversed.reverse();
        prop_assert_eq!(forward, score_balance(&reversed));

        let mut rotated = totals.clone();
        rotated.rotate_left(totals.len() / 2);
        prop_assert_eq!(forward, score_balance(&rotated));
    }

    #[test]
    fn balance_stays_in_unit_interval(totals in prop::collection::vec(0.0f64..1e6, 0..20)) {
        let ratio = score_balance(&totals);
        prop_assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn balance_of_identical_totals_is_zero(total in 1.0f64..1e6, count in 1usize..10) {
        let totals = vec![total; count];
        prop_assert_eq!(score_balance(&totals), 0.0);
    }

    #[test]
    fn aggregation_conserves_counts(
        counts in prop::collection::vec((0u64..1000, 0u64..10_000), 1..40),
        district_count in 1u32..6,
    ) {
        let units = counts.iter().enumerate()
            .map(|(i, &(crimes, population))| {
                Unit::new(UnitId::new(format!("u{i}")), square(i as f64, 0.0), crimes, population)
            })
            .collect::<Vec<_>>();

        let labels = (0..units.len())
            .map(|i| i as u32 % district_count)
            .collect::<Vec<_>>();
        let partition = Partition::from_labels(&units, &labels);

        let districts = aggregate(&units, &partition).unwrap();

        let crimes: u64 = districts.values().map(|d| d.crimes()).sum();
        let population: u64 = districts.values().map(|d| d.population()).sum();

        prop_assert_eq!(crimes, counts.iter().map(|&(c, _)| c).sum::<u64>());
        prop_assert_eq!(population, counts.iter().map(|&(_, p)| p).sum::<u64>());
    }
}
