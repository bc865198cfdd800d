// ============================================================================
// Numeric Module
// Fixed-point currency arithmetic and its canonical text codec
// ============================================================================
//
// This module provides:
// - Currency: fixed-point decimal with four fractional digits (i64 ticks)
// - codec: parse/format of the canonical `[-]digits.dddd` representation
// - CurrencyError: error types for parsing and arithmetic
// - NumericLimits: static limit introspection
//
// Design principles:
// - Exact scaled-integer representation, never binary floating point storage
// - Controlled rounding at every arithmetic boundary (documented per method)
// - Fallible named methods define the contract; operators wrap them

pub mod codec;
mod currency;
mod errors;
mod limits;

pub use currency::Currency;
pub use errors::{CurrencyError, CurrencyResult};
pub use limits::NumericLimits;
