// ============================================================================
// Native Floating-Point Backend
// IEEE-754 double precision operands
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::unsigned_zero;
use crate::interfaces::NumericValue;

/// `f64` backend.
///
/// Precision only affects display; arithmetic always runs at double
/// precision. Overflow saturates to infinity like the hardware does, and
/// `^` accepts any real exponent.
impl NumericValue for f64 {
    const NAME: &'static str = "float";

    #[inline]
    fn sentinel_zero() -> Self {
        0.0
    }

    fn parse_literal(literal: &str, _precision: u32) -> NumericResult<Self> {
        literal
            .parse::<f64>()
            .map_err(|_| NumericError::MalformedLiteral)
    }

    fn format_fixed(&self, precision: u32) -> String {
        unsigned_zero(format!("{:.*}", precision as usize, self))
    }

    #[inline]
    fn try_add(&self, rhs: &Self, _precision: u32) -> NumericResult<Self> {
        Ok(self + rhs)
    }

    #[inline]
    fn try_sub(&self, rhs: &Self, _precision: u32) -> NumericResult<Self> {
        Ok(self - rhs)
    }

    #[inline]
    fn try_mul(&self, rhs: &Self, _precision: u32) -> NumericResult<Self> {
        Ok(self * rhs)
    }

    #[inline]
    fn try_div(&self, rhs: &Self, _precision: u32) -> NumericResult<Self> {
        if *rhs == 0.0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    #[inline]
    fn try_pow(&self, exponent: &Self, _precision: u32) -> NumericResult<Self> {
        Ok(self.powf(*exponent))
    }

    #[inline]
    fn try_sqrt(&self, _precision: u32) -> NumericResult<Self> {
        if *self < 0.0 {
            return Err(NumericError::NegativeRadicand);
        }
        Ok(self.sqrt())
    }

    #[inline]
    fn negate(&self) -> Self {
        -self
    }

    fn to_precision(&self) -> Option<u32> {
        if self.is_finite() && *self >= 0.0 && *self < 4_294_967_296.0 {
            Some(self.trunc() as u32)
        } else {
            None
        }
    }
}
