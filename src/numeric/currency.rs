// ============================================================================
// Fixed-Point Currency
// Scaled-integer currency arithmetic with four fractional digits
// ============================================================================

use super::errors::{CurrencyError, CurrencyResult};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Fixed-precision currency amount.
///
/// Internally stores `value × 10_000` as an i64 ("ticks"), giving exactly
/// four fractional decimal digits. The represented real value is
/// `ticks / 10_000`.
///
/// # Value Range
/// - Minimum: -922,337,203,685,477.5808
/// - Maximum: +922,337,203,685,477.5807
/// - Precision: 0.0001 (one tick)
///
/// All fallible arithmetic is exposed through named `checked_*` / `*_int` /
/// `*_f64` methods returning [`CurrencyResult`]; the operator impls are
/// ergonomic wrappers over those methods and panic on overflow.
///
/// Same-type addition and subtraction are exact at tick granularity.
/// Multiplication and division of two `Currency` values truncate toward
/// zero at tick granularity; intermediate products are widened to i128 so
/// out-of-range results are reported as [`CurrencyError::Overflow`] instead
/// of wrapping. Operations taking an `f64` operand round
/// half-away-from-zero to the nearest tick.
///
/// # Example
/// ```
/// use currency_engine::numeric::Currency;
///
/// let price: Currency = "19.99".parse().unwrap();
/// let tax = price.mul_f64(0.07).unwrap().round(2);
/// assert_eq!(tax.to_string(), "1.4000");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Currency(i64);

impl Currency {
    /// The scale factor relating real value to ticks (10^4)
    pub const SCALE: i64 = 10_000;

    /// Zero value (also the `Default`)
    pub const ZERO: Self = Self(0);

    /// One currency unit (1.0000)
    pub const ONE: Self = Self(Self::SCALE);

    /// Maximum representable amount
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable amount
    pub const MIN: Self = Self(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw tick count (`value × 10_000`).
    #[inline]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    /// Create from an integer amount of whole currency units.
    ///
    /// # Errors
    /// Returns `Overflow` if the scaled value does not fit the tick range.
    #[inline]
    pub fn from_integer(value: i64) -> CurrencyResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(CurrencyError::Overflow)
    }

    /// Create from a floating-point amount, rounding half-away-from-zero to
    /// the nearest tick.
    ///
    /// Values beyond the representable range saturate to [`Currency::MIN`] /
    /// [`Currency::MAX`]; NaN becomes zero.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        // f64::round is round-half-away-from-zero; `as` saturates
        Self((value * Self::SCALE as f64).round() as i64)
    }

    // ========================================================================
    // Accessors and conversions
    // ========================================================================

    /// Get the raw tick count (the value × 10_000).
    #[inline]
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Check if the value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Convert to boolean: `true` for any non-zero amount.
    #[inline]
    pub const fn as_bool(self) -> bool {
        self.0 != 0
    }

    /// Convert to a floating-point amount (`ticks / 10_000.0`).
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// Convert to whole currency units, truncating toward zero.
    ///
    /// The fractional part is discarded, not rounded: `9.99` becomes `9`
    /// and `-9.99` becomes `-9`.
    #[inline]
    pub const fn to_i64(self) -> i64 {
        self.0 / Self::SCALE
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Exact tick addition. No rounding occurs.
    ///
    /// # Errors
    /// Returns `Overflow` if the sum leaves the tick range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> CurrencyResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(CurrencyError::Overflow)
    }

    /// Exact tick subtraction. No rounding occurs.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> CurrencyResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(CurrencyError::Overflow)
    }

    /// Multiply two currency values: `ticks = a.ticks × b.ticks / 10_000`,
    /// truncating toward zero.
    ///
    /// The double-width product is computed in i128, so results that fit the
    /// tick range are exact up to the documented truncation.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> CurrencyResult<Self> {
        let product = (self.0 as i128) * (rhs.0 as i128) / (Self::SCALE as i128);
        Self::from_wide(product)
    }

    /// Divide two currency values: `ticks = a.ticks / b.ticks × 10_000`,
    /// truncating toward zero.
    ///
    /// Result precision degrades with divisor magnitude; the quotient is
    /// formed at whole-unit granularity before rescaling.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> CurrencyResult<Self> {
        if rhs.0 == 0 {
            return Err(CurrencyError::DivisionByZero);
        }
        let quotient = (self.0 as i128) / (rhs.0 as i128) * (Self::SCALE as i128);
        Self::from_wide(quotient)
    }

    /// Add a whole-unit integer operand (scaled ×10_000 exactly).
    #[inline]
    pub fn add_int(self, rhs: i64) -> CurrencyResult<Self> {
        self.checked_add(Self::from_integer(rhs)?)
    }

    /// Subtract a whole-unit integer operand (scaled ×10_000 exactly).
    #[inline]
    pub fn sub_int(self, rhs: i64) -> CurrencyResult<Self> {
        self.checked_sub(Self::from_integer(rhs)?)
    }

    /// Multiply by a plain integer: `ticks = a.ticks × n`, exact.
    #[inline]
    pub fn mul_int(self, rhs: i64) -> CurrencyResult<Self> {
        self.0
            .checked_mul(rhs)
            .map(Self)
            .ok_or(CurrencyError::Overflow)
    }

    /// Divide by a plain integer: `ticks = a.ticks / n`, truncating.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn div_int(self, rhs: i64) -> CurrencyResult<Self> {
        if rhs == 0 {
            return Err(CurrencyError::DivisionByZero);
        }
        // i64::MIN / -1 is the one remaining overflow case
        self.0
            .checked_div(rhs)
            .map(Self)
            .ok_or(CurrencyError::Overflow)
    }

    /// Add a floating operand, converted half-away-from-zero first.
    #[inline]
    pub fn add_f64(self, rhs: f64) -> CurrencyResult<Self> {
        self.checked_add(Self::from_f64(rhs))
    }

    /// Subtract a floating operand, converted half-away-from-zero first.
    #[inline]
    pub fn sub_f64(self, rhs: f64) -> CurrencyResult<Self> {
        self.checked_sub(Self::from_f64(rhs))
    }

    /// Multiply by a floating value: `ticks = round(a.ticks × f)`,
    /// half-away-from-zero.
    ///
    /// # Errors
    /// Returns `Overflow` if the scaled result is non-finite or outside the
    /// tick range.
    #[inline]
    pub fn mul_f64(self, rhs: f64) -> CurrencyResult<Self> {
        Self::from_scaled_f64(self.0 as f64 * rhs)
    }

    /// Divide by a floating value: `ticks = round(a.ticks / f)`,
    /// half-away-from-zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero, `Overflow` if the scaled
    /// result is non-finite or outside the tick range.
    #[inline]
    pub fn div_f64(self, rhs: f64) -> CurrencyResult<Self> {
        if rhs == 0.0 {
            return Err(CurrencyError::DivisionByZero);
        }
        Self::from_scaled_f64(self.0 as f64 / rhs)
    }

    /// Narrow an i128 tick value back to the i64 range.
    #[inline]
    fn from_wide(ticks: i128) -> CurrencyResult<Self> {
        i64::try_from(ticks)
            .map(Self)
            .map_err(|_| CurrencyError::Overflow)
    }

    /// Round an already-scaled f64 tick value, rejecting non-finite and
    /// out-of-range results.
    #[inline]
    fn from_scaled_f64(ticks: f64) -> CurrencyResult<Self> {
        let rounded = ticks.round();
        if !rounded.is_finite()
            || rounded < i64::MIN as f64
            || rounded >= i64::MAX as f64
        {
            return Err(CurrencyError::Overflow);
        }
        Ok(Self(rounded as i64))
    }

    // ========================================================================
    // Miscellany
    // ========================================================================

    /// Get the absolute value. `Currency::MIN` saturates to `Currency::MAX`.
    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Get the sign of the value: -1, 0 or +1.
    #[inline]
    pub const fn sign(self) -> i32 {
        if self.0 < 0 {
            -1
        } else if self.0 > 0 {
            1
        } else {
            0
        }
    }

    /// Clamp the value to `[low, high]` in place.
    ///
    /// Callers must guarantee `low <= high`.
    #[inline]
    pub fn clamp(&mut self, low: Self, high: Self) -> &mut Self {
        *self = self.clamped(low, high);
        self
    }

    /// Return the value clamped to `[low, high]`.
    ///
    /// Callers must guarantee `low <= high`.
    #[inline]
    pub fn clamped(self, low: Self, high: Self) -> Self {
        debug_assert!(low <= high, "clamp range is inverted");
        if self < low {
            low
        } else if self > high {
            high
        } else {
            self
        }
    }

    /// Round to `digits` fractional decimal digits, half-away-from-zero.
    ///
    /// `digits >= 4` is a no-op since four digits is full precision.
    /// Negative `digits` rounds to the left of the decimal point:
    /// `round(-1)` rounds to tens, `round(-2)` to hundreds, and so on.
    ///
    /// A result that would round past [`Currency::MAX`] / [`Currency::MIN`]
    /// saturates to that bound, which at the very edge of the range is not
    /// a multiple of the rounding granularity.
    pub fn round(self, digits: i32) -> Self {
        if digits >= 4 {
            return self;
        }
        // Granularity in ticks; 10^38 already exceeds any i64 tick count
        let exponent = (4i64 - digits as i64).min(38) as u32;
        let grain = 10i128.pow(exponent);
        let half = grain / 2;
        let ticks = self.0 as i128;
        let rounded = if ticks >= 0 {
            (ticks + half) / grain * grain
        } else {
            (ticks - half) / grain * grain
        };
        Self(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    // ========================================================================
    // Boundary conversions to rust_decimal (for API integration)
    // ========================================================================

    /// Convert from a `rust_decimal::Decimal`.
    ///
    /// Digits beyond the fourth fractional place are truncated, the same
    /// rule the text parser applies.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    pub fn from_decimal(d: rust_decimal::Decimal) -> CurrencyResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let scaled = d
            .checked_mul(rust_decimal::Decimal::from(Self::SCALE))
            .ok_or(CurrencyError::Overflow)?;
        scaled
            .trunc()
            .to_i64()
            .map(Self)
            .ok_or(CurrencyError::Overflow)
    }

    /// Convert to a `rust_decimal::Decimal` with scale 4.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        let mut d = rust_decimal::Decimal::from(self.0);
        d.set_scale(4).expect("valid scale");
        d
    }
}

// ============================================================================
// Operator Implementations
// Ergonomic wrappers over the named methods; panic on overflow
// ============================================================================

impl Neg for Currency {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Add for Currency {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("currency addition overflow")
    }
}

impl Sub for Currency {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("currency subtraction overflow")
    }
}

impl Mul for Currency {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("currency multiplication overflow")
    }
}

impl Div for Currency {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("currency division failed")
    }
}

impl Add<i64> for Currency {
    type Output = Self;

    #[inline]
    fn add(self, rhs: i64) -> Self::Output {
        self.add_int(rhs).expect("currency addition overflow")
    }
}

impl Sub<i64> for Currency {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: i64) -> Self::Output {
        self.sub_int(rhs).expect("currency subtraction overflow")
    }
}

impl Mul<i64> for Currency {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i64) -> Self::Output {
        self.mul_int(rhs).expect("currency multiplication overflow")
    }
}

impl Div<i64> for Currency {
    type Output = Self;

    #[inline]
    fn div(self, rhs: i64) -> Self::Output {
        self.div_int(rhs).expect("currency division failed")
    }
}

impl Add<f64> for Currency {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        self.add_f64(rhs).expect("currency addition overflow")
    }
}

impl Sub<f64> for Currency {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        self.sub_f64(rhs).expect("currency subtraction overflow")
    }
}

impl Mul<f64> for Currency {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.mul_f64(rhs).expect("currency multiplication overflow")
    }
}

impl Div<f64> for Currency {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.div_f64(rhs).expect("currency division failed")
    }
}

impl AddAssign for Currency {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Currency {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Currency {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Currency {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// ============================================================================
// Mixed-type comparisons
// The plain operand is scaled first, so ordering follows construction rules
// ============================================================================

impl PartialEq<i64> for Currency {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        self.0 as i128 == (*other as i128) * (Self::SCALE as i128)
    }
}

impl PartialOrd<i64> for Currency {
    #[inline]
    fn partial_cmp(&self, other: &i64) -> Option<std::cmp::Ordering> {
        Some((self.0 as i128).cmp(&((*other as i128) * (Self::SCALE as i128))))
    }
}

impl PartialEq<f64> for Currency {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        !other.is_nan() && *self == Self::from_f64(*other)
    }
}

impl PartialOrd<f64> for Currency {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<std::cmp::Ordering> {
        if other.is_nan() {
            return None;
        }
        Some(self.cmp(&Self::from_f64(*other)))
    }
}

// ============================================================================
// Tests
// ============================================================================
