// ============================================================================
// Currency Errors
// Error types for fixed-point currency operations
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or computing with [`Currency`] values.
///
/// Two families of failure exist: `InvalidFormat` covers malformed input
/// text, while `DivisionByZero`, `NonPositivePeriods` and `Overflow` cover
/// arithmetic. Nothing is recovered internally; every error surfaces to the
/// immediate caller.
///
/// [`Currency`]: super::Currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyError {
    /// Input text is not a valid decimal representation
    InvalidFormat,
    /// Attempted division by a zero divisor
    DivisionByZero,
    /// Amortization requested over zero or negative periods
    NonPositivePeriods,
    /// Result fell outside the representable tick range
    Overflow,
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::InvalidFormat => {
                write!(f, "invalid format: could not parse decimal text")
            },
            CurrencyError::DivisionByZero => write!(f, "division by zero"),
            CurrencyError::NonPositivePeriods => {
                write!(f, "amortization period count must be positive")
            },
            CurrencyError::Overflow => {
                write!(f, "arithmetic overflow: result outside representable range")
            },
        }
    }
}

impl std::error::Error for CurrencyError {}

/// Result type alias for currency operations
pub type CurrencyResult<T> = Result<T, CurrencyError>;
