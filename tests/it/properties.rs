use proptest::prelude::*;
use textclean::{normalize, Column, Normalizer, Options};

/// Text drawn from characters every stage has an opinion about.
fn text() -> impl Strategy<Value = String> {
    "[a-c0-9. \t\n\u{a0}\u{1c}-\u{1f}]{0,40}"
}

/// Characters that must never start or end a normalized value.
fn is_outer_whitespace(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t' | '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{85}' | '\u{a0}' | '\u{1c}'..='\u{1f}'
    )
}

fn column() -> impl Strategy<Value = Column> {
    prop::collection::vec(prop::option::of(text()), 0..20).prop_map(Column::new)
}

proptest! {
    #[test]
    fn preserves_length_and_missing_positions(values in column()) {
        let got = normalize(&values, r"\d+").expect("must compile pattern");

        prop_assert_eq!(got.len(), values.len());
        for (before, after) in values.iter().zip(got.iter()) {
            prop_assert_eq!(before.is_none(), after.is_none());
        }
    }

    #[test]
    fn leaves_no_residual_runs(values in column(), pattern in "[abc0-9.]|\\d+|\\s") {
        let got = normalize(&values, &pattern).expect("must compile pattern");

        for value in got.iter().flatten() {
            prop_assert!(!value.contains("  "), "double space in {:?}", value);
            prop_assert!(!value.contains(".."), "double period in {:?}", value);
            let outer = [value.chars().next(), value.chars().last()];
            prop_assert!(
                !outer.into_iter().flatten().any(is_outer_whitespace),
                "outer whitespace in {:?}",
                value
            );
        }
    }

    #[test]
    fn is_idempotent(values in column()) {
        let once = normalize(&values, r"\d+").expect("must compile pattern");
        let twice = normalize(&once, r"\d+").expect("must compile pattern");

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn parallel_matches_sequential(values in column(), workers in 2usize..8) {
        let options = Options::builder().workers(workers).build();
        let parallel = Normalizer::with_options(r"[ab]", options).expect("must compile pattern");
        let sequential = Normalizer::new(r"[ab]").expect("must compile pattern");

        prop_assert_eq!(parallel.normalize(&values), sequential.normalize(&values));
    }
}
