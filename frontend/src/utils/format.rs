//! pt-BR display formatting.

use super::time::parse_date;
use chrono::{DateTime, NaiveDateTime};

/// `1234.5` -> `"R$ 1.234,50"`.
pub fn format_brl(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if negative && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// `50000.0` -> `"50.000"`, `3.5` -> `"3,5"`. At most two decimals.
pub fn format_number(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    let whole = group_thousands(cents / 100);
    match cents % 100 {
        0 => format!("{}{}", sign, whole),
        frac if frac % 10 == 0 => format!("{}{},{}", sign, whole, frac / 10),
        frac => format!("{}{},{:02}", sign, whole, frac),
    }
}

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

/// `"2024-03-15"` -> `"15/03/2024"`. Unparseable input is returned as is.
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}

/// Accepts RFC 3339 or a naive `YYYY-MM-DDTHH:MM:SS` timestamp.
pub fn format_date_time(value: &str) -> String {
    let naive = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"));
    match naive {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => format_date(value),
    }
}

/// `"1 item"` / `"3 itens"`.
pub fn pluralize_items(count: u32) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} itens", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brl_groups_thousands_with_dots() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(89.9), "R$ 89,90");
        assert_eq!(format_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_brl(125_000.0), "R$ 125.000,00");
        assert_eq!(format_brl(1_234_567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(-50.0), "-R$ 50,00");
    }

    #[test]
    fn plain_numbers_drop_trailing_zeros() {
        assert_eq!(format_number(50_000.0), "50.000");
        assert_eq!(format_number(3.5), "3,5");
        assert_eq!(format_number(1234.25), "1.234,25");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn dates_fall_back_to_raw_text() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("amanhã"), "amanhã");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn date_times_accept_both_layouts() {
        assert_eq!(format_date_time("2024-03-15T10:30:00Z"), "15/03/2024 10:30");
        assert_eq!(format_date_time("2024-03-15T10:30:00"), "15/03/2024 10:30");
        assert_eq!(format_date_time("2024-03-15"), "15/03/2024");
    }

    #[test]
    fn item_counts_pluralize() {
        assert_eq!(pluralize_items(1), "1 item");
        assert_eq!(pluralize_items(0), "0 itens");
        assert_eq!(pluralize_items(12), "12 itens");
    }
}
