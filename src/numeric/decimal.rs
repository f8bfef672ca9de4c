// ============================================================================
// Fixed-Width Decimal Backend
// 96-bit mantissa decimal arithmetic via rust_decimal
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::unsigned_zero;
use crate::interfaces::NumericValue;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use std::str::FromStr;

/// Integer digits past which a value cannot fit in 96 bits.
const MAX_INTEGER_DIGITS: i64 = 29;

/// Rewrites `<mantissa>e<exponent>` as a positional literal, so digits past
/// the last representable fractional place round the same way they do when
/// written out in full. `None` if the literal is malformed or too large.
fn positional(literal: &str) -> Option<String> {
    let (mantissa, exponent) = literal.split_once(['e', 'E'])?;
    let exponent: i64 = exponent.parse().ok()?;
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() || !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = format!("{whole}{fraction}");
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some("0".to_string());
    }
    let leading_zeros = i64::try_from(digits.len() - significant.len()).ok()?;
    let point = i64::try_from(whole.len())
        .ok()?
        .checked_add(exponent)?
        .checked_sub(leading_zeros)?;

    if point > MAX_INTEGER_DIGITS {
        return None;
    }
    if point < -i64::from(Decimal::MAX_SCALE) {
        return Some("0".to_string());
    }

    let len = i64::try_from(significant.len()).ok()?;
    let text = if point <= 0 {
        format!("0.{}{significant}", "0".repeat(point.unsigned_abs() as usize))
    } else if point >= len {
        format!("{significant}{}", "0".repeat((point - len) as usize))
    } else {
        let (int_part, frac_part) = significant.split_at(point as usize);
        format!("{int_part}.{frac_part}")
    };
    Some(text)
}

/// `rust_decimal::Decimal` backend.
///
/// Exact base-10 arithmetic with up to 28 fractional digits. Literals with
/// more fractional digits round to 28 whether written out or in exponent
/// form. Results that leave the 96-bit range report `Overflow` instead of
/// panicking.
impl NumericValue for Decimal {
    const NAME: &'static str = "decimal";

    #[inline]
    fn sentinel_zero() -> Self {
        Decimal::ZERO
    }

    fn parse_literal(literal: &str, _precision: u32) -> NumericResult<Self> {
        let parsed = if literal.contains(['e', 'E']) {
            positional(literal).and_then(|text| Decimal::from_str(&text).ok())
        } else {
            Decimal::from_str(literal).ok()
        };
        parsed.ok_or(NumericError::MalformedLiteral)
    }

    fn format_fixed(&self, precision: u32) -> String {
        let rounded =
            self.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
        unsigned_zero(format!("{:.*}", precision as usize, rounded))
    }

    #[inline]
    fn try_add(&self, rhs: &Self, _precision: u32) -> NumericResult<Self> {
        self.checked_add(*rhs).ok_or(NumericError::Overflow)
    }

    #[inline]
    fn try_sub(&self, rhs: &Self, _precision: u32) -> NumericResult<Self> {
        self.checked_sub(*rhs).ok_or(NumericError::Overflow)
    }

    #[inline]
    fn try_mul(&self, rhs: &Self, _precision: u32) -> NumericResult<Self> {
        self.checked_mul(*rhs).ok_or(NumericError::Overflow)
    }

    fn try_div(&self, rhs: &Self, _precision: u32) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        self.checked_div(*rhs).ok_or(NumericError::Overflow)
    }

    fn try_pow(&self, exponent: &Self, _precision: u32) -> NumericResult<Self> {
        let whole = exponent.trunc();
        if whole.is_sign_negative() && !whole.is_zero() {
            return Err(NumericError::NegativeExponent);
        }
        let exp = whole.to_u64().ok_or(NumericError::Overflow)?;
        self.checked_powu(exp).ok_or(NumericError::Overflow)
    }

    fn try_sqrt(&self, _precision: u32) -> NumericResult<Self> {
        if self.is_sign_negative() && !self.is_zero() {
            return Err(NumericError::NegativeRadicand);
        }
        self.sqrt().ok_or(NumericError::NegativeRadicand)
    }

    #[inline]
    fn negate(&self) -> Self {
        -*self
    }

    fn to_precision(&self) -> Option<u32> {
        self.trunc().to_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> Decimal {
        Decimal::parse_literal(text, 4).unwrap()
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(dec("123.456"), Decimal::new(123456, 3));
        assert_eq!(dec("2e3"), Decimal::from(2000));
        assert_eq!(dec("15E-1"), Decimal::new(15, 1));
    }

    #[test]
    fn test_parse_literal_malformed() {
        assert_eq!(
            Decimal::parse_literal("1e", 4),
            Err(NumericError::MalformedLiteral)
        );
        assert_eq!(
            Decimal::parse_literal("1e30", 4),
            Err(NumericError::MalformedLiteral)
        );
        assert_eq!(
            Decimal::parse_literal("1e9000000000000000000", 4),
            Err(NumericError::MalformedLiteral)
        );
    }

    #[test]
    fn test_exponent_form_rounds_like_positional() {
        let tiny = format!("0.{}1", "0".repeat(39));
        assert_eq!(dec("1e-40"), dec(&tiny));
        assert_eq!(dec("1e-40"), Decimal::ZERO);

        let small = format!("0.{}12345", "0".repeat(25));
        assert_eq!(dec("12345e-30"), dec(&small));
        assert_eq!(dec("0.12345e-25"), dec(&small));

        assert_eq!(dec("1.25e2"), Decimal::from(125));
        assert_eq!(dec("0e40"), Decimal::ZERO);
        assert_eq!(dec("1e-9000000000000000000"), Decimal::ZERO);
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(dec("7").format_fixed(4), "7.0000");
        assert_eq!(dec("3.14159265").format_fixed(5), "3.14159");
        assert_eq!(dec("2.5").format_fixed(0), "3");
        assert_eq!(dec("0.125").format_fixed(2), "0.13");
    }

    #[test]
    fn test_negative_zero_is_unsigned() {
        assert_eq!(Decimal::ZERO.negate().format_fixed(4), "0.0000");
        assert_eq!(dec("-0.00001").format_fixed(4), "0.0000");
        assert_eq!(dec("0").negate().format_fixed(0), "0");
    }

    #[test]
    fn test_exact_decimal_arithmetic() {
        let sum = dec("0.1").try_add(&dec("0.2"), 4).unwrap();
        assert_eq!(sum, dec("0.3"));
    }

    #[test]
    fn test_division() {
        assert_eq!(
            dec("5").try_div(&Decimal::ZERO, 4),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(dec("1").try_div(&dec("4"), 4).unwrap(), dec("0.25"));
    }

    #[test]
    fn test_overflow_is_reported() {
        let result = Decimal::MAX.try_add(&Decimal::ONE, 4);
        assert_eq!(result, Err(NumericError::Overflow));
    }

    #[test]
    fn test_pow_truncates_exponent() {
        assert_eq!(dec("2").try_pow(&dec("3"), 4).unwrap(), dec("8"));
        assert_eq!(dec("2").try_pow(&dec("3.9"), 4).unwrap(), dec("8"));
        assert_eq!(
            dec("2").try_pow(&dec("-2"), 4),
            Err(NumericError::NegativeExponent)
        );
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(dec("16").try_sqrt(4).unwrap().format_fixed(4), "4.0000");
        assert_eq!(dec("-4").try_sqrt(4), Err(NumericError::NegativeRadicand));
    }

    #[test]
    fn test_to_precision() {
        assert_eq!(dec("5.9").to_precision(), Some(5));
        assert_eq!(dec("-3").to_precision(), None);
    }
}
