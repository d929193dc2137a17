//! Fixed-locale display formatting: Italian conventions, euro amounts.
//!
//! Presentation only. Stored values stay raw numbers and UTC timestamps;
//! these helpers shape them for cards, tables and chart axes.

use chrono::{DateTime, Utc};

const MONTHS_SHORT_IT: [&str; 12] = [
    "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
];

/// Whole-euro amount with dot thousands separators: `1.234 €`.
/// Non-finite input renders as zero.
pub fn format_currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u64);
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{}\u{a0}€", group_thousands(&digits))
}

/// Italian date display, `DD/MM/YYYY`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Abbreviated Italian month with a two-digit year, the trend axis label
/// (`mag 25`). `month` is 1-based.
pub fn month_label(year: i32, month: u32) -> String {
    let index = (month.saturating_sub(1) as usize).min(11);
    format!("{} {:02}", MONTHS_SHORT_IT[index], year.rem_euclid(100))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_currency_groups_thousands_with_dots() {
        assert_eq!(format_currency(1_234_567.0), "1.234.567\u{a0}€");
        assert_eq!(format_currency(1_000.0), "1.000\u{a0}€");
    }

    #[test]
    fn test_currency_has_no_decimals() {
        assert_eq!(format_currency(999.49), "999\u{a0}€");
        assert_eq!(format_currency(999.5), "1.000\u{a0}€");
    }

    #[test]
    fn test_currency_small_and_zero() {
        assert_eq!(format_currency(0.0), "0\u{a0}€");
        assert_eq!(format_currency(42.0), "42\u{a0}€");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(-1500.0), "-1.500\u{a0}€");
    }

    #[test]
    fn test_currency_non_finite_renders_as_zero() {
        assert_eq!(format_currency(f64::NAN), "0\u{a0}€");
        assert_eq!(format_currency(f64::INFINITY), "0\u{a0}€");
    }

    #[test]
    fn test_date_is_day_month_year() {
        let date = Utc.with_ymd_and_hms(2025, 5, 14, 10, 0, 0).unwrap();
        assert_eq!(format_date(&date), "14/05/2025");
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(month_label(2025, 5), "mag 25");
        assert_eq!(month_label(2024, 12), "dic 24");
        assert_eq!(month_label(2030, 1), "gen 30");
    }

    #[test]
    fn test_month_label_pads_single_digit_years() {
        assert_eq!(month_label(2003, 7), "lug 03");
    }
}
