// ============================================================================
// Amortization Module
// Pure loan-amortization functions built on fixed-point currency arithmetic
// ============================================================================
//
// All functions here are deterministic pure functions of their inputs:
// identical inputs always produce identical schedules. There is no shared
// state and no I/O, so independent amortization calls are trivially safe to
// evaluate in parallel.

mod engine;
mod schedule;

pub use engine::{amortize, amortized_interest, amortized_payment};
pub use schedule::{AmortizationSchedule, ScheduleEntry};
