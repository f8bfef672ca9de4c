//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify:
//! 1. The operand stack is LIFO and `duplicate_top` + `pop` is a no-op
//! 2. Formatting at precision `p` and re-parsing stays within `10^-p`
//! 3. Arbitrary command lines never panic and keep the stack consistent,
//!    including literals with exponents far outside any backend's range

#[cfg(feature = "bigdecimal")]
use bigdecimal::BigDecimal;
use cdc::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

fn calculator(backend: NumericBackendType) -> Box<dyn LineEvaluator> {
    create_from_config(CalculatorConfig::new(backend), Arc::new(NoOpEventHandler)).unwrap()
}

fn backends() -> impl Iterator<Item = NumericBackendType> {
    [
        NumericBackendType::Float,
        NumericBackendType::Decimal,
        NumericBackendType::BigDecimal,
    ]
    .into_iter()
    .filter(NumericBackendType::is_available)
}

/// Command lines mixing random opcodes with scientific literals whose
/// exponents range from ordinary to the full `i64` span.
fn command_line() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        3 => "[0-9 +*/^vpbsdck_.eE=x-]{1,8}",
        1 => (1u32..10, -120_000i64..120_000).prop_map(|(m, e)| format!(" {m}e{e} ")),
        1 => (1u32..10, any::<i64>()).prop_map(|(m, e)| format!(" {m}e{e} ")),
    ];
    prop::collection::vec(token, 0..8).prop_map(|tokens| tokens.concat())
}

// -- Operand Stack --

proptest! {
    #[test]
    fn stack_pops_in_reverse_push_order(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut stack = OperandStack::new();
        for value in &values {
            stack.push(*value).unwrap();
        }
        prop_assert_eq!(stack.size(), values.len());

        let mut popped = Vec::new();
        while let Ok(value) = stack.pop() {
            popped.push(value);
        }
        popped.reverse();
        prop_assert_eq!(popped, values);
        prop_assert!(stack.is_empty());
    }

    #[test]
    fn duplicate_then_pop_is_identity(values in prop::collection::vec(-1e9f64..1e9, 1..32)) {
        let mut stack = OperandStack::new();
        for value in &values {
            stack.push(*value).unwrap();
        }
        let before = stack.clone();

        stack.duplicate_top().unwrap();
        prop_assert_eq!(stack.size(), before.size() + 1);
        stack.pop().unwrap();
        prop_assert_eq!(stack, before);
    }
}

// -- Format / Parse Round Trip --

proptest! {
    #[test]
    fn float_round_trip_within_precision(value in -1e6f64..1e6, precision in 0u32..9) {
        let text = value.format_fixed(precision);
        let parsed = f64::parse_literal(&text, precision).unwrap();
        let tolerance = 10f64.powi(-(precision as i32));
        prop_assert!((parsed - value).abs() <= tolerance, "{} -> {} -> {}", value, text, parsed);
    }

    #[test]
    fn decimal_round_trip_within_precision(
        mantissa in -1_000_000_000_000i64..1_000_000_000_000,
        scale in 0u32..12,
        precision in 0u32..9,
    ) {
        let value = Decimal::new(mantissa, scale);
        let text = value.format_fixed(precision);
        let parsed = Decimal::parse_literal(&text, precision).unwrap();
        let tolerance = Decimal::new(1, precision);
        prop_assert!((parsed - value).abs() <= tolerance, "{} -> {} -> {}", value, text, parsed);
    }

    #[test]
    fn formatted_value_has_exact_fraction_digits(value in -1e6f64..1e6, precision in 1u32..12) {
        let text = value.format_fixed(precision);
        let fraction = text.split('.').nth(1).unwrap_or("");
        prop_assert_eq!(fraction.len(), precision as usize);
    }
}

#[cfg(feature = "bigdecimal")]
proptest! {
    #[test]
    fn big_decimal_round_trip_within_precision(
        mantissa in any::<i64>(),
        scale in -30i64..40,
        precision in 0u32..40,
    ) {
        let value = BigDecimal::new(mantissa.into(), scale);
        let text = value.format_fixed(precision);
        let parsed = BigDecimal::parse_literal(&text, precision).unwrap();
        let tolerance = BigDecimal::new(1.into(), i64::from(precision));
        prop_assert!((&parsed - &value).abs() <= tolerance, "{} -> {} -> {}", value, text, parsed);
    }
}

// -- Interpreter --

proptest! {
    #[test]
    fn integer_sums_match(a in 0u32..100_000, b in 0u32..100_000) {
        for backend in backends() {
            let mut calc = calculator(backend);
            calc.execute_line(&format!("{a} {b} +"));
            prop_assert_eq!(calc.stack_snapshot(), vec![format!("{}.0000", u64::from(a) + u64::from(b))]);
        }
    }

    #[test]
    fn arbitrary_lines_never_panic(line in command_line()) {
        for backend in backends() {
            let mut calc = calculator(backend);
            let events = calc.execute_line(&line);
            for event in &events {
                if let CalcEvent::Diagnostic { error } = event {
                    prop_assert!(event.render().unwrap().starts_with("cdc: "), "{:?}", error);
                }
            }
            prop_assert_eq!(calc.stack_snapshot().len(), calc.stack_size());
        }
    }
}
