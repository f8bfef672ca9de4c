// ============================================================================
// Arbitrary-Precision Decimal Backend
// Unbounded base-10 arithmetic via bigdecimal
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::interfaces::NumericValue;
use bigdecimal::{BigDecimal, Context, RoundingMode, ToPrimitive, Zero};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Extra digits carried past the display precision for inexact results.
const GUARD_DIGITS: u32 = 16;

/// Largest decimal exponent, in either direction, a value may carry.
///
/// Literals past it are malformed and results past it overflow. This keeps
/// the `i64` scale inside `bigdecimal` far away from wrapping.
pub const EXPONENT_LIMIT: i64 = 100_000;

const EXPONENT_RANGE: RangeInclusive<i64> = -EXPONENT_LIMIT..=EXPONENT_LIMIT;

/// Fractional digits kept for quotients and roots.
#[inline]
fn working_scale(precision: u32) -> i64 {
    i64::from(precision) + i64::from(GUARD_DIGITS)
}

/// Rounding context wide enough to keep `precision` fractional digits of a
/// result whose leading digit sits at `magnitude`.
fn working_context(magnitude: i64, precision: u32) -> Context {
    let integer_digits = u64::try_from(magnitude).unwrap_or(0);
    Context::default()
        .with_prec(integer_digits + u64::from(precision) + u64::from(GUARD_DIGITS))
        .unwrap_or_default()
}

/// Number of digits left of the decimal point; negative for values below
/// `0.1`.
fn magnitude(value: &BigDecimal) -> i64 {
    let (_, scale) = value.as_bigint_and_scale();
    i64::try_from(value.digits())
        .unwrap_or(i64::MAX)
        .saturating_sub(scale)
}

/// `log10(|value|)` from the leading 17 digits. `value` must be non-zero.
fn log10_abs(value: &BigDecimal) -> f64 {
    let (mantissa, scale) = value.with_prec(17).into_bigint_and_scale();
    mantissa.to_f64().map_or(f64::NAN, |m| m.abs().log10()) - scale as f64
}

/// Rejects values whose scale or magnitude leave [`EXPONENT_RANGE`].
fn bounded(value: BigDecimal) -> NumericResult<BigDecimal> {
    let (_, scale) = value.as_bigint_and_scale();
    if EXPONENT_RANGE.contains(&scale) && EXPONENT_RANGE.contains(&magnitude(&value)) {
        Ok(value)
    } else {
        Err(NumericError::Overflow)
    }
}

/// `bigdecimal::BigDecimal` backend.
///
/// Addition, subtraction and multiplication are exact. Quotients, square
/// roots and powers are computed with enough significant digits to keep the
/// display precision plus [`GUARD_DIGITS`] fractional digits, so raising the
/// precision with `k` raises the working precision with it.
///
/// `^` truncates the exponent to a non-negative integer. Every value stays
/// within [`EXPONENT_LIMIT`]; anything larger or smaller reports `Overflow`.
impl NumericValue for BigDecimal {
    const NAME: &'static str = "big-decimal";

    #[inline]
    fn sentinel_zero() -> Self {
        BigDecimal::zero()
    }

    fn parse_literal(literal: &str, _precision: u32) -> NumericResult<Self> {
        if let Some((_, exponent)) = literal.split_once(['e', 'E']) {
            let exponent = exponent
                .parse::<i64>()
                .map_err(|_| NumericError::MalformedLiteral)?;
            if !EXPONENT_RANGE.contains(&exponent) {
                return Err(NumericError::MalformedLiteral);
            }
        }
        BigDecimal::from_str(literal)
            .ok()
            .and_then(|value| bounded(value).ok())
            .ok_or(NumericError::MalformedLiteral)
    }

    fn format_fixed(&self, precision: u32) -> String {
        self.with_scale_round(i64::from(precision), RoundingMode::HalfUp)
            .to_plain_string()
    }

    fn try_add(&self, rhs: &Self, _precision: u32) -> NumericResult<Self> {
        bounded(self + rhs)
    }

    fn try_sub(&self, rhs: &Self, _precision: u32) -> NumericResult<Self> {
        bounded(self - rhs)
    }

    fn try_mul(&self, rhs: &Self, _precision: u32) -> NumericResult<Self> {
        let (_, lhs_scale) = self.as_bigint_and_scale();
        let (_, rhs_scale) = rhs.as_bigint_and_scale();
        lhs_scale
            .checked_add(rhs_scale)
            .filter(|scale| EXPONENT_RANGE.contains(scale))
            .ok_or(NumericError::Overflow)?;
        bounded(self * rhs)
    }

    fn try_div(&self, rhs: &Self, precision: u32) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let quotient_magnitude = magnitude(self) - magnitude(rhs) + 1;
        if quotient_magnitude > EXPONENT_LIMIT + 1 {
            return Err(NumericError::Overflow);
        }

        let ctx = working_context(quotient_magnitude, precision);
        let inverse = rhs.inverse_with_context(&ctx);
        let quotient = self.mul_with_context(&inverse, &ctx);
        bounded(quotient.with_scale_round(working_scale(precision), RoundingMode::HalfEven))
    }

    fn try_pow(&self, exponent: &Self, precision: u32) -> NumericResult<Self> {
        let whole = exponent.with_scale_round(0, RoundingMode::Down);
        if whole < BigDecimal::zero() {
            return Err(NumericError::NegativeExponent);
        }
        let exp = whole.to_i64().ok_or(NumericError::Overflow)?;
        if exp == 0 {
            return Ok(BigDecimal::from(1));
        }
        if self.is_zero() {
            return Ok(BigDecimal::zero());
        }

        let result_magnitude = log10_abs(self) * exp as f64;
        if result_magnitude.is_nan() || result_magnitude.abs() > EXPONENT_LIMIT as f64 {
            return Err(NumericError::Overflow);
        }
        let ctx = working_context(result_magnitude.ceil() as i64 + 1, precision);
        bounded(self.powi_with_context(exp, &ctx))
    }

    fn try_sqrt(&self, precision: u32) -> NumericResult<Self> {
        if *self < BigDecimal::zero() {
            return Err(NumericError::NegativeRadicand);
        }
        let ctx = working_context(magnitude(self) / 2 + 1, precision);
        self.sqrt_with_context(&ctx)
            .map(|root| root.with_scale_round(working_scale(precision), RoundingMode::HalfEven))
            .ok_or(NumericError::NegativeRadicand)
    }

    #[inline]
    fn negate(&self) -> Self {
        -self.clone()
    }

    fn to_precision(&self) -> Option<u32> {
        self.with_scale_round(0, RoundingMode::Down).to_u32()
    }
}
