use chrono::{Datelike as _, NaiveDate};

/// Date part of an ISO-8601 UTC timestamp for `date`.
///
/// Years 0..=9999 use four digits. Anything else takes the expanded form with an explicit sign
/// and six year digits, the way host clocks print them (`+010000-01-01`, `-000001-12-31`).
pub fn date_prefix(date: NaiveDate) -> String {
    let (year, month, day) = (date.year(), date.month(), date.day());
    if (0..=9999).contains(&year) {
        format!("{year:04}-{month:02}-{day:02}")
    } else {
        format!("{year:+07}-{month:02}-{day:02}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn four_digit_years() {
        assert_eq!(date_prefix(ymd(2020, 1, 1)), "2020-01-01");
        assert_eq!(date_prefix(ymd(2019, 12, 31)), "2019-12-31");
        assert_eq!(date_prefix(ymd(987, 6, 5)), "0987-06-05");
        assert_eq!(date_prefix(ymd(0, 1, 1)), "0000-01-01");
        assert_eq!(date_prefix(ymd(9999, 12, 31)), "9999-12-31");
    }

    #[test]
    fn expanded_years() {
        assert_eq!(date_prefix(ymd(10000, 1, 1)), "+010000-01-01");
        assert_eq!(date_prefix(ymd(-1, 12, 31)), "-000001-12-31");
        assert_eq!(date_prefix(ymd(-123_456, 7, 8)), "-123456-07-08");
    }

    #[test]
    fn matches_chrono_for_common_years() {
        let date = ymd(2024, 2, 29);
        assert_eq!(date_prefix(date), date.format("%Y-%m-%d").to_string());
    }
}
