use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use crate::keywords::{Keyword, Keywords};

/// Default accepted input date formats (parsing only).
pub const DEFAULT_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Configuration options for [`parse_date_token`].
#[derive(Copy, Clone, Debug, Default)]
pub struct ParseOptions<'a> {
    /// The date to use as "today" for relative keywords.
    pub reference_date: Option<NaiveDate>,
    /// A slice of `chrono` format strings to try for parsing dates.
    pub formats: Option<&'a [&'a str]>,
}

/// Parses the text of a date field into a calendar date.
///
/// This is what a date picker would hand to the form. It understands, in order:
/// 1.  **Relative keywords**: `today`, `yesterday`, `tomorrow` and weekday names, plus any
///     user-defined synonyms (case-insensitive). A weekday resolves to its most recent
///     occurrence, the reference date included.
/// 2.  **Formatted dates**: every format in `options.formats`, first match wins.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use plq_core::dates::{parse_date_token, ParseOptions};
/// let opts = ParseOptions {
///     reference_date: Some(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()),
///     formats: Some(&["%d/%m/%Y"]),
/// };
///
/// let yesterday = parse_date_token("yesterday", Some(opts)).unwrap();
/// assert_eq!(yesterday, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
///
/// let explicit = parse_date_token("31/01/2024", Some(opts)).unwrap();
/// assert_eq!(explicit, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
/// ```
pub fn parse_date_token(s: &str, options: Option<ParseOptions>) -> Option<NaiveDate> {
    let options = options.unwrap_or_default();
    let reference_date = options
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let formats = options.formats.unwrap_or(DEFAULT_FORMATS);
    let s = s.trim();

    if let Some(keyword) = Keywords::lookup(s) {
        return Some(resolve_keyword(keyword, reference_date));
    }

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn resolve_keyword(keyword: Keyword, reference_date: NaiveDate) -> NaiveDate {
    let weekday = match keyword {
        Keyword::Today => return reference_date,
        Keyword::Yesterday => return reference_date - Duration::days(1),
        Keyword::Tomorrow => return reference_date + Duration::days(1),
        Keyword::Monday => Weekday::Mon,
        Keyword::Tuesday => Weekday::Tue,
        Keyword::Wednesday => Weekday::Wed,
        Keyword::Thursday => Weekday::Thu,
        Keyword::Friday => Weekday::Fri,
        Keyword::Saturday => Weekday::Sat,
        Keyword::Sunday => Weekday::Sun,
    };
    let today_wd = reference_date.weekday();
    let days_ago = (today_wd.num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
    reference_date - Duration::days(days_ago as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(anchor: NaiveDate) -> Option<ParseOptions<'static>> {
        Some(ParseOptions {
            reference_date: Some(anchor),
            ..Default::default()
        })
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_formats() {
        let anchor = ymd(2024, 3, 5);
        assert_eq!(parse_date_token("2024-01-31", opts(anchor)), Some(ymd(2024, 1, 31)));
        assert_eq!(parse_date_token("01/02/2024", opts(anchor)), Some(ymd(2024, 2, 1)));
        assert_eq!(parse_date_token("  2024-03-05 ", opts(anchor)), Some(anchor));
    }

    #[test]
    fn custom_formats_replace_defaults() {
        let anchor = ymd(2024, 3, 5);
        let fmts = &["%m/%d/%Y"];
        let custom = Some(ParseOptions {
            reference_date: Some(anchor),
            formats: Some(fmts),
        });
        assert_eq!(parse_date_token("03/05/2024", custom), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date_token("2024-03-05", custom), None);
    }

    #[test]
    fn relative_keywords() {
        let anchor = ymd(2024, 3, 1);
        assert_eq!(parse_date_token("today", opts(anchor)), Some(anchor));
        assert_eq!(parse_date_token("Yesterday", opts(anchor)), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_date_token("tomorrow", opts(anchor)), Some(ymd(2024, 3, 2)));
    }

    #[test]
    fn weekdays_resolve_to_most_recent() {
        // Anchor date is a Wednesday
        let anchor = ymd(2024, 3, 6);
        assert_eq!(parse_date_token("monday", opts(anchor)), Some(ymd(2024, 3, 4)));
        assert_eq!(parse_date_token("wednesday", opts(anchor)), Some(anchor));
        assert_eq!(parse_date_token("thursday", opts(anchor)), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_date_token("sunday", opts(anchor)), Some(ymd(2024, 3, 3)));
    }

    #[test]
    fn garbage_is_rejected() {
        let anchor = ymd(2024, 3, 5);
        assert_eq!(parse_date_token("not-a-date", opts(anchor)), None);
        assert_eq!(parse_date_token("31/02/2024", opts(anchor)), None);
        assert_eq!(parse_date_token("", opts(anchor)), None);
    }
}
