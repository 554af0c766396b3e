use chrono::{Datelike, NaiveDate, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Today as `YYYY-MM-DD`.
pub fn today_string() -> String {
    today().format(DATE_FORMAT).to_string()
}

pub fn current_year() -> i32 {
    today().year()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_string_round_trips() {
        let today = today_string();
        assert_eq!(today.len(), 10);
        assert_eq!(parse_date(&today).map(|d| d.year()), Some(current_year()));
    }

    #[test]
    fn parse_date_rejects_other_layouts() {
        assert!(parse_date("15/03/2024").is_none());
        assert_eq!(
            parse_date("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }
}
