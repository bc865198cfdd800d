// ============================================================================
// Amortization Schedule Model
// ============================================================================

use crate::numeric::{Currency, CurrencyResult};
use std::ops::Index;

/// One period of an amortization schedule: how the period's payment splits
/// between interest and principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleEntry {
    /// Interest portion of the period's payment
    pub interest: Currency,
    /// Principal portion of the period's payment
    pub principal: Currency,
}

impl ScheduleEntry {
    /// The period's total payment (interest + principal).
    ///
    /// Returns a Result because tick addition can overflow.
    pub fn payment(&self) -> CurrencyResult<Currency> {
        self.interest.checked_add(self.principal)
    }
}

/// An ordered, immutable per-period interest/principal split for a
/// fixed-payment loan.
///
/// Produced once by [`amortize`] and never mutated afterward. The sum of
/// all principal portions equals the original principal exactly: the final
/// period's principal absorbs whatever rounding drift accumulated over the
/// earlier periods.
///
/// [`amortize`]: super::amortize
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmortizationSchedule {
    entries: Vec<ScheduleEntry>,
}

impl AmortizationSchedule {
    /// Engine-internal constructor; `entries` is never empty.
    pub(crate) fn new(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    /// Number of periods in the schedule.
    pub fn periods(&self) -> usize {
        self.entries.len()
    }

    /// All per-period entries, in payment order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Iterate over the per-period entries.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    /// Sum of all interest portions: the true cost of the loan.
    pub fn total_interest(&self) -> CurrencyResult<Currency> {
        self.entries
            .iter()
            .try_fold(Currency::ZERO, |acc, e| acc.checked_add(e.interest))
    }

    /// Sum of all principal portions; equals the original principal exactly.
    pub fn total_principal(&self) -> CurrencyResult<Currency> {
        self.entries
            .iter()
            .try_fold(Currency::ZERO, |acc, e| acc.checked_add(e.principal))
    }

    /// The last period's payment, which may differ from the level payment
    /// after the final-period rounding adjustment.
    pub fn final_payment(&self) -> CurrencyResult<Currency> {
        match self.entries.last() {
            Some(entry) => entry.payment(),
            None => Ok(Currency::ZERO),
        }
    }
}

impl Index<usize> for AmortizationSchedule {
    type Output = ScheduleEntry;

    fn index(&self, period: usize) -> &Self::Output {
        &self.entries[period]
    }
}

impl<'a> IntoIterator for &'a AmortizationSchedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
