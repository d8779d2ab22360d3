#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Mock air-quality and ambient readings derived from postal codes.
//!
//! This is a placeholder for a real air-quality integration. Readings are
//! computed from the numeric value of the postal code alone, so the same
//! code always yields the same reading and no network access is involved.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The postal code that always reports an unhealthy reading.
pub const UNHEALTHY_OVERRIDE_ZIP: &str = "90210";

/// US EPA-style AQI category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum AqiCategory {
    /// 0-50
    Good,
    /// 51-100
    Moderate,
    /// 101-150
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    #[strum(serialize = "Unhealthy for Sensitive Groups")]
    UnhealthyForSensitiveGroups,
    /// 151-200
    Unhealthy,
}

impl AqiCategory {
    /// Display color conventionally associated with this category.
    #[must_use]
    pub const fn color(self) -> AqiColor {
        match self {
            Self::Good => AqiColor::Green,
            Self::Moderate => AqiColor::Yellow,
            Self::UnhealthyForSensitiveGroups => AqiColor::Orange,
            Self::Unhealthy => AqiColor::Red,
        }
    }
}

/// Color tag used by the dashboard to render a reading.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AqiColor {
    /// Good
    Green,
    /// Moderate
    Yellow,
    /// Unhealthy for sensitive groups
    Orange,
    /// Unhealthy
    Red,
}

/// A (mock) air-quality reading for a postal code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AqiReading {
    /// The postal code as given.
    pub zip: String,
    /// AQI value.
    pub value: u32,
    /// Category for `value`.
    pub category: AqiCategory,
    /// Color tag for `category`.
    pub color: AqiColor,
}

/// Dashboard snapshot: air quality plus ambient CO2 and humidity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    /// Air-quality reading.
    pub aqi: AqiReading,
    /// Outdoor CO2 concentration (ppm), 400-449.
    pub co2_ppm: u32,
    /// Relative humidity (%), 40-59.
    pub humidity_percent: u32,
}

/// Resolves the mock AQI reading for a postal code.
///
/// The code is read like a leading integer; anything unparsable counts as
/// zero. `90210` is always unhealthy. Otherwise multiples of 3 (including
/// zero) are unhealthy for sensitive groups, remaining even codes are
/// moderate, and everything else is good.
#[must_use]
pub fn resolve(zip: &str) -> AqiReading {
    let (value, category) = if zip == UNHEALTHY_OVERRIDE_ZIP {
        (155, AqiCategory::Unhealthy)
    } else {
        let n = zip_residue(zip);
        if n % 3 == 0 {
            (112, AqiCategory::UnhealthyForSensitiveGroups)
        } else if n % 2 == 0 {
            (75, AqiCategory::Moderate)
        } else {
            (45, AqiCategory::Good)
        }
    };

    AqiReading {
        zip: zip.to_string(),
        value,
        category,
        color: category.color(),
    }
}

/// Builds the dashboard snapshot for a postal code.
#[must_use]
pub fn snapshot(zip: &str) -> EnvironmentSnapshot {
    let n = zip_residue(zip);
    EnvironmentSnapshot {
        aqi: resolve(zip),
        co2_ppm: 400 + n % 50,
        humidity_percent: 40 + n % 20,
    }
}

/// Numeric value of the postal code modulo 300.
///
/// Every rule above only looks at the value modulo 2, 3, 20, or 50, all of
/// which divide 300, so folding digits into the residue handles codes of
/// any length. Parsing mirrors a lenient leading-integer parse: leading
/// whitespace and one sign are skipped, a `0x`/`0X` prefix switches to
/// hexadecimal, then the run of digits in that radix is read. No digits
/// means zero. The sign does not affect any rule.
fn zip_residue(zip: &str) -> u32 {
    let trimmed = zip.trim_start();
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    let (digits, radix) = match unsigned.get(..2) {
        Some("0x" | "0X") => (&unsigned[2..], 16),
        _ => (unsigned, 10),
    };

    digits
        .chars()
        .map_while(|c| c.to_digit(radix))
        .fold(0, |acc, d| (acc * radix + d) % 300)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_zip_is_unhealthy() {
        let reading = resolve("90210");
        assert_eq!(reading.value, 155);
        assert_eq!(reading.category, AqiCategory::Unhealthy);
        assert_eq!(reading.color, AqiColor::Red);
        assert_eq!(reading.zip, "90210");
    }

    #[test]
    fn multiples_of_three_are_unhealthy_for_sensitive_groups() {
        let reading = resolve("9");
        assert_eq!(reading.value, 112);
        assert_eq!(reading.category, AqiCategory::UnhealthyForSensitiveGroups);
        assert_eq!(reading.color, AqiColor::Orange);
        // Also even, but the multiple-of-3 rule wins.
        assert_eq!(resolve("6").value, 112);
    }

    #[test]
    fn even_codes_are_moderate() {
        let reading = resolve("12");
        // 12 is a multiple of 3.
        assert_eq!(reading.value, 112);

        let reading = resolve("10");
        assert_eq!(reading.value, 75);
        assert_eq!(reading.category, AqiCategory::Moderate);
        assert_eq!(reading.color, AqiColor::Yellow);
    }

    #[test]
    fn other_codes_are_good() {
        let reading = resolve("7");
        assert_eq!(reading.value, 45);
        assert_eq!(reading.category, AqiCategory::Good);
        assert_eq!(reading.color, AqiColor::Green);
        assert_eq!(resolve("10001").value, 45);
    }

    #[test]
    fn unparsable_code_counts_as_zero() {
        for zip in ["", "abc", "  ", "-"] {
            let reading = resolve(zip);
            assert_eq!(reading.value, 112, "zip {zip:?}");
            assert_eq!(reading.zip, zip);
        }
    }

    #[test]
    fn leading_digits_are_used() {
        assert_eq!(resolve("  7abc").value, 45);
        assert_eq!(resolve("-7").value, 45);
        assert_eq!(resolve("10-1234").value, 75);
    }

    #[test]
    fn hex_prefixed_codes_are_read_in_base_sixteen() {
        // 0x1A = 26: even, not a multiple of 3.
        assert_eq!(resolve("0x1A").value, 75);
        assert_eq!(resolve("-0X1a").value, 75);
        // 0xF = 15, and the run stops at the first non-hex digit.
        assert_eq!(resolve("0xFg7").value, 112);
        assert_eq!(resolve("0x7").value, 45);
        // No hex digits after the prefix reads as zero.
        assert_eq!(resolve("0x").value, 112);
        assert_eq!(resolve("0xyz").value, 112);
    }

    #[test]
    fn long_codes_use_exact_residue() {
        // 10^20 + 1 leaves remainder 2 mod 3, and is odd.
        assert_eq!(resolve("100000000000000000001").value, 45);
        // 10^20 + 2 is a multiple of 3.
        assert_eq!(resolve("100000000000000000002").value, 112);
    }

    #[test]
    fn override_requires_exact_string() {
        // 90210 is a multiple of 3, so near-misses fall back to the modulo rules.
        assert_eq!(resolve(" 90210").value, 112);
        assert_eq!(resolve("90210-1234").value, 112);
    }

    #[test]
    fn repeated_calls_are_identical() {
        for zip in ["90210", "12", "7", "abc", "560001"] {
            assert_eq!(resolve(zip), resolve(zip));
        }
    }

    #[test]
    fn category_serializes_with_display_name() {
        let json = serde_json::to_string(&AqiCategory::UnhealthyForSensitiveGroups).unwrap();
        assert_eq!(json, "\"Unhealthy for Sensitive Groups\"");
        assert_eq!(AqiCategory::Good.to_string(), "Good");
        assert_eq!(AqiColor::Orange.to_string(), "orange");
    }

    #[test]
    fn snapshot_is_deterministic_and_in_range() {
        let a = snapshot("560001");
        let b = snapshot("560001");
        assert_eq!(a, b);
        assert!((400..450).contains(&a.co2_ppm));
        assert!((40..60).contains(&a.humidity_percent));
        // 560001 mod 50 = 1, mod 20 = 1
        assert_eq!(a.co2_ppm, 401);
        assert_eq!(a.humidity_percent, 41);
        assert_eq!(a.aqi, resolve("560001"));
    }
}
