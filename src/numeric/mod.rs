// ============================================================================
// Numeric Module
// Numeric backends for calculator operands
// ============================================================================
//
// This module provides:
// - NumericError: Error types for arithmetic and literal parsing
// - NumericValue implementations for three backends:
//   - f64: native double precision
//   - rust_decimal::Decimal: fixed-width exact decimal
//   - bigdecimal::BigDecimal: arbitrary precision ("bigdecimal" feature)
//
// Design principles:
// - The engine never names a concrete backend
// - All fallible arithmetic returns Result (no panics)
// - Formatting is fixed-point at the session precision, and a value that
//   rounds to zero prints without a sign

mod decimal;
mod errors;
mod float;

#[cfg(feature = "bigdecimal")]
mod big_decimal;

#[cfg(feature = "bigdecimal")]
pub use big_decimal::EXPONENT_LIMIT;
pub use errors::{NumericError, NumericResult};

/// Drops the sign from a fixed-point rendering that rounded to zero.
pub(crate) fn unsigned_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}
