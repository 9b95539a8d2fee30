use proptest::prelude::*;

use mbti_model::{CountryRecord, MbtiType, Table};
use mbti_stats::{distribution, dominant_type_counts, global_averages, top_n_for_type, Extreme};

fn arb_record(name: String) -> impl Strategy<Value = CountryRecord> {
    proptest::collection::vec(proptest::option::of(0.0f64..100.0), MbtiType::COUNT).prop_map(
        move |shares| {
            let mut rec = CountryRecord::new(name.clone());
            for (t, share) in MbtiType::ALL.into_iter().zip(shares) {
                if let Some(v) = share {
                    rec.set_share(t, v);
                }
            }
            rec
        },
    )
}

fn arb_table() -> impl Strategy<Value = Table> {
    proptest::collection::vec(any::<u8>(), 1..12).prop_flat_map(|seeds| {
        let records: Vec<_> = seeds
            .iter()
            .enumerate()
            .map(|(i, _)| arb_record(format!("Country{i:02}")))
            .collect();
        records.prop_map(Table::new)
    })
}

proptest! {
    #[test]
    fn distribution_is_exhaustive_sorted_and_conserving(table in arb_table()) {
        for country in table.countries() {
            let dist = distribution(&table, country).unwrap();
            prop_assert_eq!(dist.len(), 16);

            // Present entries precede missing ones and are non-increasing;
            // exact ties keep the enumeration-earlier type first.
            let mut seen_missing = false;
            for pair in dist.windows(2) {
                match (pair[0].share, pair[1].share) {
                    (Some(a), Some(b)) => {
                        prop_assert!(!seen_missing);
                        prop_assert!(a >= b);
                        if a == b {
                            prop_assert!(pair[0].mbti.index() < pair[1].mbti.index());
                        }
                    }
                    (None, Some(_)) => prop_assert!(false, "missing before present"),
                    _ => seen_missing |= pair[1].share.is_none(),
                }
            }

            let total: f64 = dist.iter().filter_map(|e| e.share).sum();
            let raw = table.get(country).unwrap().present_sum();
            prop_assert!((total - raw).abs() < 1e-9);
        }
    }

    #[test]
    fn counts_total_matches_countries_with_data(table in arb_table()) {
        let with_data = table.iter().filter(|r| r.has_data()).count() as u32;
        for extreme in [Extreme::Most, Extreme::Least] {
            let counts = dominant_type_counts(&table, extreme);
            prop_assert_eq!(counts.total(), with_data);
            prop_assert_eq!(counts.iter().count(), 16);
        }
    }

    #[test]
    fn pinned_country_is_always_included(table in arb_table(), n in 1usize..8) {
        let pinned = "Country00";
        let has_value = table
            .get(pinned)
            .and_then(|r| r.share(MbtiType::INTJ))
            .is_some();

        let top = top_n_for_type(&table, MbtiType::INTJ, n, Some(pinned)).unwrap();
        prop_assert_eq!(
            top.iter().any(|e| e.country == pinned),
            has_value,
            "pinned country present iff it has a value"
        );
        prop_assert!(top.len() <= n + 1);
    }

    #[test]
    fn averages_lie_within_the_observed_range(table in arb_table()) {
        for mean in global_averages(&table) {
            let Some(m) = mean.mean else { continue };
            let observed: Vec<f64> = table
                .iter()
                .filter_map(|r| r.share(mean.mbti))
                .collect();
            prop_assert!(!observed.is_empty());
            let lo = observed.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = observed.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
        }
    }
}
