use chrono::{Duration, NaiveDate, NaiveDateTime};
use strum_macros::{AsRefStr, EnumIter};

use crate::field::parse_leading_digits;

/// Which end of the queried time range a timestamp stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Boundary {
    Start,
    End,
}

impl Boundary {
    /// Minute and second used when the user leaves them out.
    ///
    /// The end of a range reaches the last second of the hour it names, so a bare date
    /// on both ends still covers whole minutes rather than a single instant.
    pub fn fill(self) -> u32 {
        match self {
            Boundary::Start => 0,
            Boundary::End => 59,
        }
    }
}

/// Builds one end of the range from a date and the raw text of its time sub-fields.
///
/// Without a date there is no timestamp. The hour defaults to 0; minute and second
/// default to [`Boundary::fill`]. Texts are read best-effort (leading digits) whatever
/// their validity, and values past their unit's range carry over into the next unit.
/// Returns `None` if that carry leaves the representable calendar.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use plq_core::range::{combine_date_and_time, Boundary};
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5);
///
/// let start = combine_date_and_time(date, None, None, None, Boundary::Start).unwrap();
/// assert_eq!(start.to_string(), "2024-03-05 00:00:00");
///
/// let end = combine_date_and_time(date, Some("18"), None, None, Boundary::End).unwrap();
/// assert_eq!(end.to_string(), "2024-03-05 18:59:59");
///
/// assert!(combine_date_and_time(None, Some("18"), None, None, Boundary::End).is_none());
/// ```
pub fn combine_date_and_time(
    date: Option<NaiveDate>,
    hour: Option<&str>,
    minute: Option<&str>,
    second: Option<&str>,
    boundary: Boundary,
) -> Option<NaiveDateTime> {
    let midnight = date?.and_hms_opt(0, 0, 0)?;
    let hour = read_or(hour, 0);
    let minute = read_or(minute, boundary.fill());
    let second = read_or(second, boundary.fill());

    let offset = Duration::hours(i64::from(hour))
        + Duration::minutes(i64::from(minute))
        + Duration::seconds(i64::from(second));
    midnight.checked_add_signed(offset)
}

fn read_or(text: Option<&str>, default: u32) -> u32 {
    text.and_then(parse_leading_digits).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn bare_date_start_is_midnight() {
        let ts = combine_date_and_time(date(2024, 3, 5), None, None, None, Boundary::Start);
        assert_eq!(ts, Some(at(2024, 3, 5, 0, 0, 0)));
    }

    #[test]
    fn bare_date_end_fills_minute_and_second_only() {
        let ts = combine_date_and_time(date(2024, 3, 5), None, None, None, Boundary::End);
        assert_eq!(ts, Some(at(2024, 3, 5, 0, 59, 59)));
    }

    #[test]
    fn no_date_no_timestamp() {
        for boundary in [Boundary::Start, Boundary::End] {
            let ts = combine_date_and_time(None, Some("10"), Some("20"), Some("30"), boundary);
            assert_eq!(ts, None);
        }
    }

    #[test]
    fn given_fields_override_fill() {
        let ts = combine_date_and_time(
            date(2024, 3, 5),
            Some("13"),
            Some("07"),
            None,
            Boundary::End,
        );
        assert_eq!(ts, Some(at(2024, 3, 5, 13, 7, 59)));

        let ts = combine_date_and_time(
            date(2024, 3, 5),
            Some("13"),
            Some("0"),
            Some("0"),
            Boundary::End,
        );
        assert_eq!(ts, Some(at(2024, 3, 5, 13, 0, 0)));
    }

    #[test]
    fn blank_and_unparseable_fall_back_to_defaults() {
        let ts = combine_date_and_time(
            date(2024, 3, 5),
            Some(""),
            Some("xx"),
            Some(""),
            Boundary::End,
        );
        assert_eq!(ts, Some(at(2024, 3, 5, 0, 59, 59)));
    }

    #[test]
    fn out_of_range_values_carry_over() {
        // an hour the validator would reject still contributes
        let ts = combine_date_and_time(
            date(2024, 2, 28),
            Some("25"),
            Some("75"),
            None,
            Boundary::Start,
        );
        assert_eq!(ts, Some(at(2024, 2, 29, 2, 15, 0)));
    }

    #[test]
    fn minute_without_hour_is_still_used() {
        let ts = combine_date_and_time(
            date(2024, 3, 5),
            None,
            Some("45"),
            Some("10"),
            Boundary::Start,
        );
        assert_eq!(ts, Some(at(2024, 3, 5, 0, 45, 10)));
    }
}
