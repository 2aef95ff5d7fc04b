//! Toolbar filters and sorting.

use chrono::{Duration, NaiveDate};
use gleaner::filters::{collate, sort_donors, AmountBracket, DateRange, DonorSort};
use gleaner::records::Donor;
use gleaner::testing::make_donor;
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn donors() -> impl Strategy<Value = Vec<Donor>> {
    prop::collection::vec(
        ("[A-Za-zé ]{0,10}", 0.0f64..2000.0, prop::option::of(0i64..365)),
        0..25,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, amount, day))| {
                let date = day
                    .map(|d| (base() + Duration::days(d)).format("%m/%d/%Y").to_string())
                    .unwrap_or_default();
                make_donor(&name, amount, &date).prepared(i)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_every_amount_in_exactly_one_bracket(amount in 0.0f64..100_000.0) {
        let hits = AmountBracket::ALL.iter().filter(|b| b.contains(amount)).count();
        prop_assert_eq!(hits, 1);
    }

    #[test]
    fn prop_date_range_inclusive(start in 0i64..200, len in 0i64..100, probe in -10i64..320) {
        let range = DateRange::new(
            Some(base() + Duration::days(start)),
            Some(base() + Duration::days(start + len)),
        );
        prop_assert!(range.validate().is_ok());

        let when = (base() + Duration::days(probe)).and_hms_opt(23, 59, 59);
        let inside = probe >= start && probe <= start + len;
        prop_assert_eq!(range.contains(when), inside);
        prop_assert!(!range.contains(None));
    }

    #[test]
    fn prop_open_range_contains_everything(probe in -1000i64..1000) {
        let when = (base() + Duration::days(probe)).and_hms_opt(0, 0, 0);
        prop_assert!(DateRange::all().contains(when));
    }

    #[test]
    fn prop_collate_antisymmetric(a in "[A-Za-zéÉ ]{0,8}", b in "[A-Za-zéÉ ]{0,8}") {
        prop_assert_eq!(collate(&a, &b), collate(&b, &a).reverse());
    }

    #[test]
    fn prop_sorts_are_permutations_in_order(donors in donors()) {
        for sort in DonorSort::ALL {
            let mut view: Vec<&Donor> = donors.iter().collect();
            sort_donors(&mut view, sort);

            let mut ids: Vec<usize> = view.iter().map(|d| d.id).collect();
            ids.sort_unstable();
            prop_assert_eq!(ids, (0..donors.len()).collect::<Vec<_>>());

            for pair in view.windows(2) {
                prop_assert!(sort.compare(pair[0], pair[1]).is_le(), "{}", sort);
            }
        }
    }
}
