//! Display formatting for monetary values, percentages, and dates.

use chrono::NaiveDate;

/// Formats a value in the display currency with no fraction digits. INR uses
/// Indian digit grouping (₹1,23,456), everything else western grouping.
pub fn currency(value: f64, code: &str) -> String {
    let negative = value < 0.0;
    let whole = value.abs().round() as u64;
    let grouped = if code == "INR" {
        group_indian(whole)
    } else {
        group_western(whole)
    };
    let sign = if negative { "-" } else { "" };
    match symbol(code) {
        Some(symbol) => format!("{sign}{symbol}{grouped}"),
        None => format!("{sign}{code} {grouped}"),
    }
}

/// Signed variant for transaction amounts: income gets an explicit `+`.
pub fn signed_currency(value: f64, code: &str) -> String {
    if value >= 0.0 {
        format!("+{}", currency(value, code))
    } else {
        currency(value, code)
    }
}

pub fn percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Abbreviates large values: 1,200,000 becomes 1.2M, 45,500 becomes 45.5K.
pub fn abbreviate(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

/// Renders an ISO date as e.g. "March 12, 2023"; unparseable input is shown
/// as-is.
pub fn date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

fn symbol(code: &str) -> Option<&'static str> {
    match code {
        "INR" => Some("₹"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

/// Indian grouping: the last three digits, then groups of two.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

fn group_western(value: u64) -> String {
    let digits = value.to_string();
    let mut groups = Vec::new();
    let mut end = digits.len();
    while end > 0 {
        let start = end.saturating_sub(3);
        groups.push(&digits[start..end]);
        end = start;
    }
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(currency(285750.0, "INR"), "₹2,85,750");
        assert_eq!(currency(1234567.0, "INR"), "₹12,34,567");
        assert_eq!(currency(999.0, "INR"), "₹999");
        assert_eq!(currency(1000.0, "INR"), "₹1,000");
    }

    #[test]
    fn test_western_grouping() {
        assert_eq!(currency(285750.0, "USD"), "$285,750");
        assert_eq!(currency(999.0, "USD"), "$999");
        assert_eq!(currency(1234567.0, "EUR"), "€1,234,567");
    }

    #[test]
    fn test_unknown_currency_uses_code() {
        assert_eq!(currency(1500.0, "SEK"), "SEK 1,500");
    }

    #[test]
    fn test_negative_and_signed_amounts() {
        assert_eq!(currency(-1250.0, "INR"), "-₹1,250");
        assert_eq!(signed_currency(-1250.0, "INR"), "-₹1,250");
        assert_eq!(signed_currency(3000.0, "INR"), "+₹3,000");
    }

    #[test]
    fn test_rounding_to_whole_units() {
        assert_eq!(currency(1249.6, "USD"), "$1,250");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(42.857), "42.9%");
        assert_eq!(percentage(-5.3), "-5.3%");
    }

    #[test]
    fn test_abbreviate() {
        assert_eq!(abbreviate(1_200_000.0), "1.2M");
        assert_eq!(abbreviate(45_500.0), "45.5K");
        assert_eq!(abbreviate(750.0), "750");
    }

    #[test]
    fn test_date_rendering() {
        assert_eq!(date("2023-03-12"), "March 12, 2023");
        assert_eq!(date("not-a-date"), "not-a-date");
    }
}
