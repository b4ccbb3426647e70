//! Text encodings for values placed into a chart specification.
//!
//! Values are turned into tokens when datasets are built so renderers never
//! deal with numeric formatting or timestamp layout.

use chrono::{DateTime, Timelike, Utc};

/// Exponent at or above which data tokens switch to exponent notation.
const DATA_EXPONENT_LIMIT: i32 = 6;
/// Exponent at or above which radius tokens switch to exponent notation.
const RADIUS_EXPONENT_LIMIT: i32 = 21;

/// Formats a numeric data value using the shortest round-trip digits.
///
/// Exponent notation is used when the decimal exponent is below -4 or at
/// least 6, e.g. `1e+06`, `2.5e-05`.
#[must_use]
pub fn format_number(value: f64) -> String {
    format_shortest(value, DATA_EXPONENT_LIMIT)
}

/// Formats a bubble radius. Same digits as [`format_number`] but plain
/// notation is kept up to an exponent of 20.
#[must_use]
pub fn format_radius(value: f64) -> String {
    format_shortest(value, RADIUS_EXPONENT_LIMIT)
}

fn format_shortest(value: f64, exponent_limit: i32) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_owned();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.234e6".
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= exponent_limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    } else {
        format!("{value}")
    }
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS` plus trimmed fractional seconds.
///
/// Trailing zeros of the fraction are dropped, and the dot with them when the
/// fraction is zero: `2024-01-02T03:04:05.5`, `2024-01-02T03:04:05`.
#[must_use]
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    let mut out = time.format("%Y-%m-%dT%H:%M:%S").to_string();
    // Leap-second representation stores nanos >= 1e9.
    let nanos = time.nanosecond() % 1_000_000_000;
    if nanos > 0 {
        let fraction = format!("{nanos:09}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}

/// Wraps an already-formatted timestamp so it can sit in a point coordinate.
#[must_use]
pub fn quote_time_token(formatted: &str) -> String {
    format!("'{formatted}'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn plain_numbers_use_shortest_digits() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-3.25), "-3.25");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(123456.0), "123456");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn large_and_tiny_numbers_switch_to_exponent() {
        assert_eq!(format_number(1_000_000.0), "1e+06");
        assert_eq!(format_number(1_234_567.0), "1.234567e+06");
        assert_eq!(format_number(0.000_025), "2.5e-05");
        assert_eq!(format_number(1e100), "1e+100");
    }

    #[test]
    fn radius_keeps_plain_notation_longer() {
        assert_eq!(format_radius(19.0), "19");
        assert_eq!(format_radius(4.5), "4.5");
        assert_eq!(format_radius(1_000_000.0), "1000000");
        assert_eq!(format_radius(1e21), "1e+21");
    }

    #[test]
    fn non_finite_values_have_stable_tokens() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "+Inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_number(-0.0), "-0");
    }

    #[test]
    fn timestamp_trims_fraction() {
        let whole = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(whole), "2024-01-02T03:04:05");

        let half = whole + chrono::Duration::milliseconds(500);
        assert_eq!(format_timestamp(half), "2024-01-02T03:04:05.5");

        let nanos = whole + chrono::Duration::nanoseconds(1_230);
        assert_eq!(format_timestamp(nanos), "2024-01-02T03:04:05.00000123");
    }

    #[test]
    fn quoted_time_token_wraps_in_single_quotes() {
        assert_eq!(quote_time_token("2024-01-02T03:04:05"), "'2024-01-02T03:04:05'");
    }
}
