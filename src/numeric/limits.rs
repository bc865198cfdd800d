// ============================================================================
// Numeric Limits
// Static limit introspection for the currency type
// ============================================================================

use super::currency::Currency;

/// Limit introspection for exact numeric types.
///
/// The standard-library style `numeric_limits` queries, reduced to the ones
/// that matter for an exact scaled-integer type: the representable range and
/// the facts that there are no infinities, no NaN, and no rounding error in
/// the representation itself.
pub trait NumericLimits: Sized {
    /// Smallest representable value.
    fn min_value() -> Self;
    /// Largest representable value.
    fn max_value() -> Self;
    /// Whether the representation is exact (no representation error).
    fn is_exact() -> bool;
    /// Whether negative values are representable.
    fn is_signed() -> bool;
    /// Whether infinities exist in the value domain.
    fn has_infinity() -> bool;
    /// Whether a NaN value exists in the value domain.
    fn has_nan() -> bool;
}

impl NumericLimits for Currency {
    #[inline]
    fn min_value() -> Self {
        Currency::MIN
    }

    #[inline]
    fn max_value() -> Self {
        Currency::MAX
    }

    fn is_exact() -> bool {
        true
    }

    fn is_signed() -> bool {
        true
    }

    fn has_infinity() -> bool {
        false
    }

    fn has_nan() -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_mirror_tick_range() {
        assert_eq!(<Currency as NumericLimits>::min_value().ticks(), i64::MIN);
        assert_eq!(<Currency as NumericLimits>::max_value().ticks(), i64::MAX);
        assert!(<Currency as NumericLimits>::is_exact());
        assert!(<Currency as NumericLimits>::is_signed());
        assert!(!<Currency as NumericLimits>::has_infinity());
        assert!(!<Currency as NumericLimits>::has_nan());
    }
}
