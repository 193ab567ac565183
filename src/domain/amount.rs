//! Arbitrary-precision amount formatting.
//!
//! Amounts are kept in the currency's base denomination as [`BigUint`] and
//! scaled by a [`Unit`] magnitude only when displayed.

use num_bigint::BigUint;
use num_traits::Zero;

use super::currency::Unit;

// ============================================================================
// Format Options
// ============================================================================

/// Options for [`format_currency_unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Append the unit code after the number.
    pub show_code: bool,
    /// Print the integer part without thousands separators.
    pub show_all_digits: bool,
    /// Maximum number of fraction digits kept (trailing zeros are trimmed).
    pub max_fraction_digits: u32,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            show_code: false,
            show_all_digits: false,
            max_fraction_digits: 9,
        }
    }
}

impl FormatOptions {
    /// Options that append the unit code.
    #[must_use]
    pub fn with_code() -> Self {
        Self {
            show_code: true,
            ..Self::default()
        }
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Format a base-denomination amount in the given unit.
///
/// The amount is divided by `10^magnitude`, grouped by thousands and has its
/// fraction truncated to `max_fraction_digits` with trailing zeros removed.
///
/// # Examples
///
/// ```ignore
/// let sol = Unit::sol();
/// assert_eq!(format_currency_unit(&BigUint::from(1_500_000_000u64), &sol, FormatOptions::with_code()), "1.5 SOL");
/// ```
#[must_use]
pub fn format_currency_unit(amount: &BigUint, unit: &Unit, options: FormatOptions) -> String {
    let digits = amount.to_str_radix(10);
    let magnitude = unit.magnitude as usize;

    let (integer, fraction) = if magnitude == 0 {
        (digits, String::new())
    } else if digits.len() > magnitude {
        let split = digits.len() - magnitude;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        (
            "0".to_string(),
            format!("{}{}", "0".repeat(magnitude - digits.len()), digits),
        )
    };

    let keep = fraction.len().min(options.max_fraction_digits as usize);
    let fraction = fraction[..keep].trim_end_matches('0');

    let integer = if options.show_all_digits {
        integer
    } else {
        group_thousands(&integer)
    };

    let mut out = if fraction.is_empty() {
        integer
    } else {
        format!("{integer}.{fraction}")
    };

    if options.show_code {
        out.push(' ');
        out.push_str(&unit.code);
    }
    out
}

/// Insert `,` every three digits from the right.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Returns true when the amount is strictly positive.
#[must_use]
pub fn is_positive(amount: &BigUint) -> bool {
    !amount.is_zero()
}

// ============================================================================
// Serde
// ============================================================================

/// Serde adapter storing a [`BigUint`] as a decimal string.
///
/// Plain JSON numbers are accepted on input as well.
pub mod decimal_string {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(BigUint::from(n)),
            Raw::Text(s) => BigUint::parse_bytes(s.trim().as_bytes(), 10)
                .ok_or_else(|| D::Error::custom(format!("invalid amount '{s}'"))),
        }
    }
}

/// [`decimal_string`] for optional amounts.
pub mod opt_decimal_string {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<BigUint>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => super::decimal_string::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BigUint>, D::Error> {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "super::decimal_string")] BigUint);

        Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(v)| v))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Table-driven tests for unit formatting.
    #[test]
    fn test_format_currency_unit() {
        let sol = Unit::sol();
        let cases: [(u64, FormatOptions, &str); 7] = [
            (0, FormatOptions::default(), "0"),
            (1_000_000_000, FormatOptions::default(), "1"),
            (1_500_000_000, FormatOptions::with_code(), "1.5 SOL"),
            (1, FormatOptions::default(), "0.000000001"),
            (
                1_234_567_000_000_000,
                FormatOptions::with_code(),
                "1,234,567 SOL",
            ),
            (
                1_234_567_890_000_000,
                FormatOptions {
                    show_all_digits: true,
                    ..FormatOptions::default()
                },
                "1234567.89",
            ),
            (
                123_456_789,
                FormatOptions {
                    max_fraction_digits: 4,
                    ..FormatOptions::default()
                },
                "0.1234",
            ),
        ];

        for (input, options, expected) in cases {
            assert_eq!(
                format_currency_unit(&BigUint::from(input), &sol, options),
                expected,
                "amount={input}"
            );
        }
    }

    #[test]
    fn test_zero_magnitude_unit() {
        let unit = Unit::new("units", "U", 0);
        assert_eq!(
            format_currency_unit(&BigUint::from(500u32), &unit, FormatOptions::with_code()),
            "500 U"
        );
    }

    #[test]
    fn test_group_thousands() {
        let cases = [
            ("0", "0"),
            ("999", "999"),
            ("1000", "1,000"),
            ("1234567890", "1,234,567,890"),
        ];
        for (input, expected) in cases {
            assert_eq!(group_thousands(input), expected, "input={input}");
        }
    }

    #[test]
    fn test_decimal_string_serde() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Holder {
            #[serde(with = "decimal_string")]
            amount: BigUint,
        }

        let from_text: Holder = serde_json::from_str(r#"{"amount":"123456789012345678901234"}"#).unwrap();
        assert_eq!(from_text.amount.to_str_radix(10), "123456789012345678901234");

        let from_number: Holder = serde_json::from_str(r#"{"amount":42}"#).unwrap();
        assert_eq!(from_number.amount, BigUint::from(42u8));

        let json = serde_json::to_string(&from_number).unwrap();
        assert_eq!(json, r#"{"amount":"42"}"#);

        assert!(serde_json::from_str::<Holder>(r#"{"amount":"12ab"}"#).is_err());
    }

    #[test]
    fn test_is_positive() {
        assert!(!is_positive(&BigUint::zero()));
        assert!(is_positive(&BigUint::from(1u8)));
    }
}
