// ============================================================================
// Amortization Engine
// Level-payment loan math over fixed-point currency values
// ============================================================================

use super::schedule::{AmortizationSchedule, ScheduleEntry};
use crate::numeric::{Currency, CurrencyError, CurrencyResult};

/// Compute the level payment that amortizes `principal` over `periods`
/// periods at the periodic interest `rate`.
///
/// Uses the standard formula `P × r / (1 − (1+r)^−n)`; the transcendental
/// part is evaluated in f64 and the result converted back to fixed point
/// with round-half-away-from-zero. A zero rate degenerates to
/// `principal / periods`.
///
/// # Errors
/// Returns `NonPositivePeriods` when `periods <= 0`.
pub fn amortized_payment(
    principal: Currency,
    rate: f64,
    periods: i32,
) -> CurrencyResult<Currency> {
    if periods <= 0 {
        return Err(CurrencyError::NonPositivePeriods);
    }
    if rate == 0.0 {
        return principal.div_int(periods as i64);
    }
    let factor = rate / (1.0 - (1.0 + rate).powi(-periods));
    principal.mul_f64(factor)
}

/// Compute the total interest cost and the (rounding-adjusted) final
/// payment of a loan, without retaining the whole schedule.
///
/// Runs the full [`amortize`] simulation with the caller-supplied `payment`
/// and returns `(total_interest, final_payment)`.
pub fn amortized_interest(
    principal: Currency,
    rate: f64,
    periods: i32,
    payment: Currency,
) -> CurrencyResult<(Currency, Currency)> {
    let schedule = amortize(principal, rate, periods, Some(payment))?;
    Ok((schedule.total_interest()?, schedule.final_payment()?))
}

/// Generate the full amortization schedule for a loan.
///
/// `payment` of `None` auto-computes the level payment via
/// [`amortized_payment`]. Each period's interest is `balance × rate`
/// rounded to cents; the principal portion is the payment minus that
/// interest, clamped so it never exceeds the remaining balance. The final
/// period's principal portion is overridden to the remaining balance, so
/// the schedule's principal portions always sum to `principal` exactly,
/// regardless of rounding drift accumulated along the way.
///
/// The schedule has exactly `periods` entries.
///
/// # Errors
/// Returns `NonPositivePeriods` when `periods <= 0`.
pub fn amortize(
    principal: Currency,
    rate: f64,
    periods: i32,
    payment: Option<Currency>,
) -> CurrencyResult<AmortizationSchedule> {
    if periods <= 0 {
        return Err(CurrencyError::NonPositivePeriods);
    }
    let payment = match payment {
        Some(p) => p,
        None => {
            let p = amortized_payment(principal, rate, periods)?;
            tracing::debug!(payment = %p, "auto-computed level payment");
            p
        },
    };

    let mut entries = Vec::with_capacity(periods as usize);
    let mut balance = principal;
    for period in 1..=periods {
        let interest = balance.mul_f64(rate)?.round(2);
        let principal_portion = if period == periods {
            // Final period absorbs the accumulated rounding drift
            balance
        } else {
            let portion = payment.checked_sub(interest)?;
            // Never pay down more than is outstanding
            portion.min(balance)
        };
        balance = balance.checked_sub(principal_portion)?;
        entries.push(ScheduleEntry {
            interest,
            principal: principal_portion,
        });
    }
    tracing::debug!(
        periods,
        final_payment = %entries
            .last()
            .map(|e| e.payment())
            .transpose()?
            .unwrap_or(Currency::ZERO),
        "amortization schedule generated"
    );

    Ok(AmortizationSchedule::new(entries))
}
