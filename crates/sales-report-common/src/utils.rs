//! Shared formatting helpers for chart labels and report text.

use chrono::NaiveDate;

/// Formats a number with at most `max_decimals` decimals, trimming trailing zeros.
pub fn format_trimmed(value: f64, max_decimals: usize) -> String {
    let formatted = format!("{value:.max_decimals$}");
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Formats a bar value annotation: whole numbers without decimals, otherwise up to two.
pub fn format_value(value: f64) -> String {
    format_trimmed(value, 2)
}

/// Formats a y-axis tick with a unit prefix and SI-style compaction (`$1.5k`, `$2M`).
pub fn format_currency_tick(prefix: &str, value: f64) -> String {
    let magnitude = value.abs();
    let (scaled, suffix) = if magnitude >= 1e9 {
        (magnitude / 1e9, "B")
    } else if magnitude >= 1e6 {
        (magnitude / 1e6, "M")
    } else if magnitude >= 1e3 {
        (magnitude / 1e3, "k")
    } else {
        (magnitude, "")
    };

    let number = format_trimmed(scaled, 2);
    if value < 0.0 && number != "0" {
        format!("-{prefix}{number}{suffix}")
    } else {
        format!("{prefix}{number}{suffix}")
    }
}

/// Truncates a label to `max_chars` characters with an ellipsis, respecting char boundaries.
pub fn truncate_label(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        input.to_string()
    } else {
        let kept: String = input.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Formats a date as `MM/DD/YYYY`.
pub fn format_us_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(100.0), "100");
        assert_eq!(format_value(1234.5), "1234.5");
        assert_eq!(format_value(33.333_333), "33.33");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.001), "0");
    }

    #[test]
    fn test_format_currency_tick() {
        assert_eq!(format_currency_tick("$", 0.0), "$0");
        assert_eq!(format_currency_tick("$", 500.0), "$500");
        assert_eq!(format_currency_tick("$", 1500.0), "$1.5k");
        assert_eq!(format_currency_tick("$", 2_000_000.0), "$2M");
        assert_eq!(format_currency_tick("$", 3_250_000_000.0), "$3.25B");
        assert_eq!(format_currency_tick("$", -1000.0), "-$1k");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Short", 20), "Short");
        assert_eq!(
            truncate_label("This is a very long product name", 20),
            "This is a very lo..."
        );
        assert_eq!(truncate_label("Ünïcödé Ñame", 8), "Ünïcö...");
    }

    #[test]
    fn test_format_us_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_us_date(date), "03/07/2024");
    }
}
