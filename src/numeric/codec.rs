// ============================================================================
// Canonical Text Codec
// Parsing and formatting of the decimal currency representation
// ============================================================================
//
// The canonical form is `[-]digits.dddd`: an optional sign, the integer
// magnitude without leading zeros, and exactly four zero-padded fractional
// digits. This textual form is the sole exchanged representation and
// round-trips exactly through `parse` for every tick value.

use super::currency::Currency;
use super::errors::{CurrencyError, CurrencyResult};
use std::fmt;
use std::str::FromStr;

/// Parse a decimal text representation into a [`Currency`].
///
/// Accepts an optional leading `+` or `-`, a run of integer digits, and an
/// optional `.` followed by fractional digits. Fractional digits beyond the
/// fourth are truncated, never rounded; fewer than four are zero-padded.
/// Either digit run may be empty, but not both.
///
/// # Errors
/// - `InvalidFormat` for an empty numeric body, a second decimal point, or
///   any other non-digit character.
/// - `Overflow` if the magnitude exceeds the representable tick range.
pub fn parse(text: &str) -> CurrencyResult<Currency> {
    let body = match text.as_bytes().first() {
        Some(b'-') | Some(b'+') => &text[1..],
        _ => text,
    };
    let negative = text.starts_with('-');

    let (int_digits, frac_digits) = match body.find('.') {
        Some(pos) => (&body[..pos], &body[pos + 1..]),
        None => (body, ""),
    };
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(CurrencyError::InvalidFormat);
    }
    if !int_digits.bytes().all(|b| b.is_ascii_digit())
        || !frac_digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(CurrencyError::InvalidFormat);
    }

    // Truncate past four fractional digits, zero-pad up to four
    let frac_digits = &frac_digits[..frac_digits.len().min(4)];
    let mut ticks: i128 = 0;
    for b in int_digits.bytes() {
        ticks = ticks
            .checked_mul(10)
            .and_then(|t| t.checked_add((b - b'0') as i128))
            .ok_or(CurrencyError::Overflow)?;
    }
    ticks = ticks
        .checked_mul(Currency::SCALE as i128)
        .ok_or(CurrencyError::Overflow)?;
    let mut frac: i128 = 0;
    for b in frac_digits.bytes() {
        frac = frac * 10 + (b - b'0') as i128;
    }
    frac *= 10i128.pow(4 - frac_digits.len() as u32);
    ticks += frac;
    if negative {
        ticks = -ticks;
    }

    i64::try_from(ticks)
        .map(Currency::from_ticks)
        .map_err(|_| CurrencyError::Overflow)
}

/// Format a [`Currency`] in canonical form.
///
/// Emits a leading `-` only when negative, the integer magnitude with no
/// leading zeros (`0` for zero itself), a `.`, and exactly four zero-padded
/// fractional digits.
pub fn format(value: Currency) -> String {
    // unsigned magnitude keeps i64::MIN well-defined
    let magnitude = value.ticks().unsigned_abs();
    let sign = if value.ticks() < 0 { "-" } else { "" };
    format!(
        "{}{}.{:04}",
        sign,
        magnitude / Currency::SCALE as u64,
        magnitude % Currency::SCALE as u64
    )
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(*self))
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({}, ticks={})", self, self.ticks())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

// ============================================================================
// Serde integration (canonical text is the wire form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Currency {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(*self))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Currency {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'_, str>>::deserialize(deserializer)?;
        parse(&text).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse("123").unwrap().ticks(), 1_230_000);
        assert_eq!(parse("123.45").unwrap().ticks(), 1_234_500);
        assert_eq!(parse("-0.001").unwrap().ticks(), -10);
        assert_eq!(parse("+2.5").unwrap().ticks(), 25_000);
        assert_eq!(parse("0").unwrap(), Currency::ZERO);
    }

    #[test]
    fn test_parse_partial_digit_runs() {
        // Either side of the point may be empty, but not both
        assert_eq!(parse(".5").unwrap().ticks(), 5_000);
        assert_eq!(parse("5.").unwrap().ticks(), 50_000);
        assert_eq!(parse("-.25").unwrap().ticks(), -2_500);
    }

    #[test]
    fn test_parse_truncates_fifth_digit() {
        // Truncated, never rounded
        assert_eq!(parse("1.23456").unwrap(), parse("1.2345").unwrap());
        assert_eq!(parse("1.23459999").unwrap(), parse("1.2345").unwrap());
        assert_eq!(parse("-1.99999").unwrap(), parse("-1.9999").unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "-", "+", ".", "-.", "1.2.3", "12a", "a12", "1,5", "1.2 "] {
            assert_eq!(parse(bad), Err(CurrencyError::InvalidFormat), "input {bad:?}");
        }
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            parse("99999999999999999999"),
            Err(CurrencyError::Overflow)
        );
        assert_eq!(parse("922337203685477.5808"), Err(CurrencyError::Overflow));
        // ...but the same magnitude is fine negative
        assert_eq!(parse("-922337203685477.5808").unwrap(), Currency::MIN);
    }

    #[test]
    fn test_format_canonical() {
        assert_eq!(format(Currency::ZERO), "0.0000");
        assert_eq!(format(Currency::from_ticks(1_234_500)), "123.4500");
        assert_eq!(format(Currency::from_ticks(-10)), "-0.0010");
        assert_eq!(format(Currency::MIN), "-922337203685477.5808");
        assert_eq!(format(Currency::MAX), "922337203685477.5807");
    }

    #[test]
    fn test_negative_half_unit_formats() {
        let v: Currency = "-12.5".parse().unwrap();
        assert_eq!(v.to_string(), "-12.5000");
    }

    #[test]
    fn test_round_trip_extremes() {
        for ticks in [0, 1, -1, 9_999, -9_999, i64::MAX, i64::MIN] {
            let v = Currency::from_ticks(ticks);
            assert_eq!(parse(&format(v)).unwrap(), v, "ticks {ticks}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let v: Currency = "599.5505".parse().unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"599.5505\"");
        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn round_trip_any_ticks(ticks in any::<i64>()) {
                let v = Currency::from_ticks(ticks);
                prop_assert_eq!(parse(&format(v)).unwrap(), v);
            }

            #[test]
            fn parse_never_panics(s in "\\PC*") {
                let _ = parse(&s);
            }
        }
    }
}
