//! Display formatters for currency, quantities and trade age
//!
//! Non-finite numbers render as [`PLACEHOLDER`]. Future timestamps are
//! clamped to zero elapsed time.

use chrono::{DateTime, Utc};

/// Shown in place of values that cannot be formatted
pub const PLACEHOLDER: &str = "--";

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1440;

/// US dollars, no fractional digits, comma grouping: `$1,234,567`
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&digits))
}

/// Comma grouping with 2 to 8 fractional digits: `1,234.5` -> `1,234.50`
pub fn format_quantity(amount: f64) -> String {
    if !amount.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let fixed = format!("{:.8}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < 2 {
        frac.push('0');
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac.bytes().all(|b| b == b'0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(int_part), frac)
}

/// Signed percentage with two decimals: `+1.23%`, `-4.50%`
pub fn format_percent_change(pct: f64) -> String {
    if !pct.is_finite() {
        return PLACEHOLDER.to_string();
    }

    if pct >= 0.0 {
        format!("+{:.2}%", pct.abs())
    } else {
        format!("{:.2}%", pct)
    }
}

/// Coarse age of `timestamp` relative to `now`: `5m ago`, `3h ago`, `2d ago`
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes().max(0);

    if minutes < MINUTES_PER_HOUR {
        format!("{}m ago", minutes)
    } else if minutes < MINUTES_PER_DAY {
        format!("{}h ago", minutes / MINUTES_PER_HOUR)
    } else {
        format!("{}d ago", minutes / MINUTES_PER_DAY)
    }
}

/// [`relative_time`] against the wall clock
pub fn time_ago(timestamp: DateTime<Utc>) -> String {
    relative_time(timestamp, Utc::now())
}

/// Insert `,` every three digits of an unsigned integer string
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_currency() {
        struct TestCase {
            input: f64,
            expected: &'static str,
        }

        let tests = vec![
            TestCase {
                // TC0: grouping, no decimals
                input: 1_234_567.0,
                expected: "$1,234,567",
            },
            TestCase {
                // TC1: rounds half away from zero
                input: 999.5,
                expected: "$1,000",
            },
            TestCase {
                // TC2: below one thousand
                input: 50_000.0 / 100.0,
                expected: "$500",
            },
            TestCase {
                // TC3: zero
                input: 0.0,
                expected: "$0",
            },
            TestCase {
                // TC4: negative
                input: -1_234.4,
                expected: "-$1,234",
            },
            TestCase {
                // TC5: tiny negative rounds to zero without a sign
                input: -0.4,
                expected: "$0",
            },
            TestCase {
                // TC6: large value
                input: 12_345_678_901.0,
                expected: "$12,345,678,901",
            },
        ];

        for (index, test) in tests.into_iter().enumerate() {
            let actual = format_currency(test.input);
            assert_eq!(actual, test.expected, "TC{} failed", index);
        }
    }

    #[test]
    fn test_format_quantity() {
        struct TestCase {
            input: f64,
            expected: &'static str,
        }

        let tests = vec![
            TestCase {
                // TC0: pads to two decimals
                input: 0.5,
                expected: "0.50",
            },
            TestCase {
                // TC1: integer value
                input: 12_000.0,
                expected: "12,000.00",
            },
            TestCase {
                // TC2: caps at eight decimals
                input: 1_234.123456789,
                expected: "1,234.12345679",
            },
            TestCase {
                // TC3: trailing zeros past the second digit trimmed
                input: 64_102.5600,
                expected: "64,102.56",
            },
            TestCase {
                // TC4: sub-cent price
                input: 0.0000123,
                expected: "0.0000123",
            },
            TestCase {
                // TC5: negative
                input: -2.25,
                expected: "-2.25",
            },
        ];

        for (index, test) in tests.into_iter().enumerate() {
            let actual = format_quantity(test.input);
            assert_eq!(actual, test.expected, "TC{} failed", index);
        }
    }

    #[test]
    fn test_non_finite_placeholder() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(format_currency(value), PLACEHOLDER);
            assert_eq!(format_quantity(value), PLACEHOLDER);
            assert_eq!(format_percent_change(value), PLACEHOLDER);
        }
    }

    #[test]
    fn test_format_percent_change() {
        assert_eq!(format_percent_change(1.234), "+1.23%");
        assert_eq!(format_percent_change(0.0), "+0.00%");
        assert_eq!(format_percent_change(-4.5), "-4.50%");
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc::now();

        assert!(relative_time(now - Duration::minutes(5), now).ends_with("m ago"));
        assert!(relative_time(now - Duration::minutes(90), now).ends_with("h ago"));
        assert!(relative_time(now - Duration::days(2), now).ends_with("d ago"));
    }

    #[test]
    fn test_relative_time_boundaries() {
        struct TestCase {
            elapsed: Duration,
            expected: &'static str,
        }

        let now = Utc::now();
        let tests = vec![
            TestCase {
                // TC0: just now
                elapsed: Duration::seconds(30),
                expected: "0m ago",
            },
            TestCase {
                // TC1: last minute bucket
                elapsed: Duration::minutes(59),
                expected: "59m ago",
            },
            TestCase {
                // TC2: first hour bucket
                elapsed: Duration::minutes(60),
                expected: "1h ago",
            },
            TestCase {
                // TC3: hours floor
                elapsed: Duration::minutes(90),
                expected: "1h ago",
            },
            TestCase {
                // TC4: last hour bucket
                elapsed: Duration::minutes(1439),
                expected: "23h ago",
            },
            TestCase {
                // TC5: first day bucket
                elapsed: Duration::minutes(1440),
                expected: "1d ago",
            },
            TestCase {
                // TC6: future timestamps clamp to zero
                elapsed: Duration::minutes(-10),
                expected: "0m ago",
            },
        ];

        for (index, test) in tests.into_iter().enumerate() {
            let actual = relative_time(now - test.elapsed, now);
            assert_eq!(actual, test.expected, "TC{} failed", index);
        }
    }

    #[test]
    fn test_time_ago_uses_wall_clock() {
        assert_eq!(time_ago(Utc::now() - Duration::hours(3)), "3h ago");
    }
}
