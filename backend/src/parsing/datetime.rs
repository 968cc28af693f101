use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, Copy)]
enum YearAt {
    First,
    Last,
}

/// Date layouts accepted in `ACCIDENT_DATE`, tried in order.
///
/// Slash-separated dates with the year last are read day-first.
const DATE_FORMATS: [(&str, YearAt); 3] = [
    ("%Y-%m-%d", YearAt::First),
    ("%Y/%m/%d", YearAt::First),
    ("%d/%m/%Y", YearAt::Last),
];

/// Layout of `ACCIDENT_TIME`.
const TIME_FORMAT: &str = "%H.%M.%S";

/// Parse an `ACCIDENT_DATE` cell.
///
/// A trailing time-of-day part separated by `T` or a space is ignored, so
/// `2013/07/01 00:00:00+00` and `2013-07-01T00:00:00` both yield 2013-07-01.
pub fn parse_accident_date(value: &str) -> Option<NaiveDate> {
    let date_part = value
        .trim()
        .split(['T', ' '])
        .next()
        .unwrap_or_default();

    DATE_FORMATS
        .iter()
        .filter(|(_, year_at)| has_four_digit_year(date_part, *year_at))
        .find_map(|(fmt, _)| NaiveDate::parse_from_str(date_part, fmt).ok())
}

/// `%Y` alone also takes one- or two-digit years, which would turn `01/07/13`
/// into year 1.
fn has_four_digit_year(date_part: &str, year_at: YearAt) -> bool {
    let mut segments = date_part.split(['-', '/']);
    let year = match year_at {
        YearAt::First => segments.next(),
        YearAt::Last => segments.last(),
    };
    year.is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse an `ACCIDENT_TIME` cell in `HH.MM.SS` form.
pub fn parse_accident_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_accident_date("2014-05-01"),
            NaiveDate::from_ymd_opt(2014, 5, 1)
        );
    }

    #[test]
    fn test_parse_slash_dates() {
        assert_eq!(
            parse_accident_date("2013/07/01"),
            NaiveDate::from_ymd_opt(2013, 7, 1)
        );
        assert_eq!(
            parse_accident_date("01/07/2013"),
            NaiveDate::from_ymd_opt(2013, 7, 1)
        );
    }

    #[test]
    fn test_parse_date_with_time_suffix() {
        assert_eq!(
            parse_accident_date("2013/07/01 00:00:00+00"),
            NaiveDate::from_ymd_opt(2013, 7, 1)
        );
        assert_eq!(
            parse_accident_date("2013-07-01T10:00:00"),
            NaiveDate::from_ymd_opt(2013, 7, 1)
        );
    }

    #[test]
    fn test_reject_bad_dates() {
        assert_eq!(parse_accident_date(""), None);
        assert_eq!(parse_accident_date("2013-13-01"), None);
        assert_eq!(parse_accident_date("yesterday"), None);
    }

    #[test]
    fn test_reject_short_years() {
        assert_eq!(parse_accident_date("01/07/13"), None);
        assert_eq!(parse_accident_date("14-05-01"), None);
        assert_eq!(parse_accident_date("14/05/01"), None);
        assert_eq!(parse_accident_date("1/07/201"), None);
        assert_eq!(parse_accident_date("+2014-05-01"), None);
    }

    #[test]
    fn test_single_digit_day_and_month() {
        assert_eq!(
            parse_accident_date("1/07/2013"),
            NaiveDate::from_ymd_opt(2013, 7, 1)
        );
        assert_eq!(
            parse_accident_date("7/1/2013"),
            NaiveDate::from_ymd_opt(2013, 1, 7)
        );
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_accident_time("08.30.00"),
            NaiveTime::from_hms_opt(8, 30, 0)
        );
        assert_eq!(
            parse_accident_time(" 23.59.59 "),
            NaiveTime::from_hms_opt(23, 59, 59)
        );
    }

    #[test]
    fn test_reject_bad_times() {
        assert_eq!(parse_accident_time("08:30:00"), None);
        assert_eq!(parse_accident_time("24.00.00"), None);
        assert_eq!(parse_accident_time("12.61.00"), None);
        assert_eq!(parse_accident_time(""), None);
    }
}
