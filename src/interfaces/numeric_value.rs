// ============================================================================
// Numeric Value Interface
// Capability set every numeric backend provides to the engine
// ============================================================================

use crate::numeric::NumericResult;
use std::fmt;

/// Arithmetic, parsing and formatting contract for a calculator operand.
///
/// The engine is generic over this trait; the concrete backend is chosen
/// at build time (cargo features) and at configuration time
/// ([`NumericBackendType`](crate::domain::NumericBackendType)).
///
/// `precision` is the session's current number of fractional digits.
/// Backends with a fixed representation may ignore it for arithmetic;
/// arbitrary-precision backends use it to bound internal rounding.
pub trait NumericValue: Clone + fmt::Debug + Send + Sync + 'static {
    /// Backend name for logging
    const NAME: &'static str;

    /// Value pushed in place of a result that could not be computed
    fn sentinel_zero() -> Self;

    /// Parse a scanned literal (digits, at most one `.`, optional exponent).
    ///
    /// # Errors
    /// Returns `MalformedLiteral` if the text is not a complete number.
    fn parse_literal(literal: &str, precision: u32) -> NumericResult<Self>;

    /// Fixed-point rendering with exactly `precision` fractional digits.
    /// A value that rounds to zero renders without a minus sign.
    fn format_fixed(&self, precision: u32) -> String;

    fn try_add(&self, rhs: &Self, precision: u32) -> NumericResult<Self>;

    fn try_sub(&self, rhs: &Self, precision: u32) -> NumericResult<Self>;

    fn try_mul(&self, rhs: &Self, precision: u32) -> NumericResult<Self>;

    /// # Errors
    /// Returns `DivisionByZero` when `rhs` is zero.
    fn try_div(&self, rhs: &Self, precision: u32) -> NumericResult<Self>;

    /// Raise `self` to `exponent`.
    ///
    /// Decimal backends truncate the exponent to a non-negative integer.
    fn try_pow(&self, exponent: &Self, precision: u32) -> NumericResult<Self>;

    /// # Errors
    /// Returns `NegativeRadicand` when `self` is below zero.
    fn try_sqrt(&self, precision: u32) -> NumericResult<Self>;

    fn negate(&self) -> Self;

    /// Truncate to an unsigned integer, used by the `k` command.
    ///
    /// Returns `None` if the value is negative or does not fit in a `u32`.
    fn to_precision(&self) -> Option<u32>;
}
