//! Property-based tests for fallback construction

use colcast_column::coerce::{Outcome, coerce};
use colcast_column::prelude::*;
use colcast_column::ParallelOptions;
use proptest::prelude::*;

fn any_unit() -> impl Strategy<Value = TimeUnit> {
    prop_oneof![
        Just(TimeUnit::Milliseconds),
        Just(TimeUnit::Microseconds),
        Just(TimeUnit::Nanoseconds),
    ]
}

fn any_target() -> impl Strategy<Value = TargetType> {
    prop::sample::select(TargetType::all())
}

fn any_strictness() -> impl Strategy<Value = Strictness> {
    prop_oneof![Just(Strictness::Strict), Just(Strictness::NonStrict)]
}

// Text is kept free of letters so nothing parses as NaN or infinity.
fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9.:-]{0,12}",
        Just("xyz".to_owned()),
        Just("1970-01-05".to_owned()),
        Just("12:30:00".to_owned()),
        Just("2000-12-31 23:59:59".to_owned()),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::boolean),
        any::<i64>().prop_map(Value::integer),
        (-1_000_000..1_000_000_i64).prop_map(Value::integer),
        prop::num::f64::NORMAL.prop_map(Value::float),
        any_text().prop_map(Value::text),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(Value::bytes),
        any::<i32>().prop_map(Value::date),
        (0..86_400_000_000_000_i64).prop_map(Value::time),
        (any::<i64>(), any_unit()).prop_map(|(v, unit)| Value::duration(v, unit)),
        (any::<i64>(), any_unit()).prop_map(|(v, unit)| Value::datetime(v, unit)),
    ]
}

fn any_values() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(any_value(), 0..64)
}

fn options(strictness: Strictness) -> FallbackOptions {
    FallbackOptions::default()
        .with_strictness(strictness)
        .sequential()
}

// ===== NULLS =====

proptest! {
    #[test]
    fn nulls_stay_null(len in 0..32_usize, target in any_target(), strictness in any_strictness()) {
        let values = vec![Value::Null; len];
        let column = build_column("n", &values, target, &options(strictness)).unwrap();
        prop_assert_eq!(column.len(), len);
        prop_assert_eq!(column.null_count(), len);
        prop_assert_eq!(column.dtype(), target);
    }

    #[test]
    fn null_input_slots_are_null_output_slots(values in any_values(), target in any_target()) {
        let column = build_column("n", &values, target, &options(Strictness::NonStrict)).unwrap();
        for (i, value) in values.iter().enumerate() {
            if value.is_null() {
                prop_assert!(!column.is_valid(i));
            }
        }
    }
}

// ===== NON-STRICT =====

proptest! {
    #[test]
    fn non_strict_is_total(values in any_values(), target in any_target()) {
        let column = build_column("t", &values, target, &options(Strictness::NonStrict));
        prop_assert!(column.is_ok());
        let column = column.unwrap();
        prop_assert_eq!(column.len(), values.len());
        prop_assert_eq!(column.dtype(), target);
    }

    #[test]
    fn non_strict_slots_follow_the_coercion_table(values in any_values(), target in any_target()) {
        let column = build_column("t", &values, target, &options(Strictness::NonStrict)).unwrap();
        for (i, value) in values.iter().enumerate() {
            let expected = coerce(value, target).into_value().unwrap_or(Value::Null);
            prop_assert_eq!(column.get(i), Some(expected));
        }
    }

    #[test]
    fn exact_output_rebuilds_unchanged(values in any_values(), target in any_target()) {
        let first = build_column("t", &values, target, &options(Strictness::NonStrict)).unwrap();
        let again = build_column("t", &first.to_values(), target, &options(Strictness::Strict));
        prop_assert_eq!(again, Ok(first));
    }
}

// ===== STRICT =====

proptest! {
    #[test]
    fn strict_accepts_only_exact_values(values in any_values(), target in any_target()) {
        let first_violation = values.iter().position(|value| {
            !matches!(coerce(value, target), Outcome::Null | Outcome::Exact(_))
        });
        match build_column("t", &values, target, &options(Strictness::Strict)) {
            Ok(column) => {
                prop_assert_eq!(first_violation, None);
                prop_assert_eq!(column.to_values(), values);
            }
            Err(err) => {
                prop_assert_eq!(Some(err.index()), first_violation);
                prop_assert!(err.to_string().contains("unexpected value"));
            }
        }
    }
}

// ===== PARALLEL =====

proptest! {
    #[test]
    fn chunked_matches_sequential(
        values in any_values(),
        target in any_target(),
        strictness in any_strictness(),
        chunk_size in 1..9_usize,
    ) {
        let parallel = FallbackOptions::default()
            .with_strictness(strictness)
            .with_parallel(ParallelOptions::default().with_min_len(0).with_chunk_size(chunk_size));
        prop_assert_eq!(
            build_column("p", &values, target, &parallel),
            build_column("p", &values, target, &options(strictness))
        );
    }
}
