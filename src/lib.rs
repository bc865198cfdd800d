// ============================================================================
// Currency Engine Library
// Fixed-precision currency arithmetic with exact amortization schedules
// ============================================================================

//! # Currency Engine
//!
//! A fixed-precision decimal value type for currency arithmetic, together
//! with the loan-amortization algorithms built on it.
//!
//! ## Features
//!
//! - **Exact scaled-integer representation**: amounts are stored as i64
//!   counts of 1/10 000 units, never as binary floating point
//! - **Controlled rounding** at every arithmetic boundary, documented per
//!   operation (round-half-away-from-zero for float operands, truncation
//!   toward zero for fixed-point multiply/divide)
//! - **Canonical text codec**: `[-]digits.dddd` round-trips exactly
//! - **Exact amortization schedules**: per-period rounding drift is
//!   reconciled so principal portions always sum to the original principal
//!
//! ## Example
//!
//! ```rust
//! use currency_engine::prelude::*;
//!
//! // A 30-year loan of 100,000 at 0.5% monthly interest
//! let principal: Currency = "100000".parse().unwrap();
//! let payment = amortized_payment(principal, 0.005, 360).unwrap();
//! assert_eq!(payment.round(2).to_string(), "599.5500");
//!
//! let schedule = amortize(principal, 0.005, 360, Some(payment)).unwrap();
//! assert_eq!(schedule.periods(), 360);
//! assert_eq!(schedule.total_principal().unwrap(), principal);
//! ```

pub mod amortization;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::amortization::{
        amortize, amortized_interest, amortized_payment, AmortizationSchedule, ScheduleEntry,
    };
    pub use crate::numeric::{codec, Currency, CurrencyError, CurrencyResult, NumericLimits};
}
