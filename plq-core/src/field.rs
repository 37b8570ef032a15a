//! Hour, minute and second sub-fields: commit-time validation and the validity
//! cascade between them.

use strum_macros::{AsRefStr, EnumIter};

/// Which sub-field of a time a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum TimeUnit {
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    /// Largest legal value for the unit (the smallest is always 0).
    pub fn max(self) -> u32 {
        match self {
            TimeUnit::Hour => 23,
            TimeUnit::Minute | TimeUnit::Second => 59,
        }
    }
}

/// Committed state of a time sub-field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// Never filled in, or cleared.
    #[default]
    Empty,
    /// Filled in with something that is not a legal value for the unit.
    Invalid,
    Valid(u32),
}

impl FieldValue {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldValue::Valid(_))
    }

    pub fn number(&self) -> Option<u32> {
        match self {
            FieldValue::Valid(n) => Some(*n),
            _ => None,
        }
    }

    /// The text an input shows after commit: nothing for `Empty`, a blank for `Invalid`,
    /// and the minimal decimal form for `Valid`.
    pub fn display_text(&self) -> Option<String> {
        match self {
            FieldValue::Empty => None,
            FieldValue::Invalid => Some(String::new()),
            FieldValue::Valid(n) => Some(n.to_string()),
        }
    }
}

/// Reads the leading decimal digits of `s`, after optional leading whitespace.
///
/// Trailing garbage is ignored (`"7x"` reads as 7). Returns `None` when no digit leads.
/// Values too large for `u32` saturate, which keeps them out of every legal range.
pub(crate) fn parse_leading_digits(s: &str) -> Option<u32> {
    let digits = s
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .filter_map(|c| c.to_digit(10));
    let mut seen = false;
    let mut value: u32 = 0;
    for d in digits {
        seen = true;
        value = value.saturating_mul(10).saturating_add(d);
    }
    seen.then_some(value)
}

/// Validates the final text of a time sub-field.
///
/// ```
/// # use plq_core::field::{commit, FieldValue, TimeUnit};
/// assert_eq!(commit(TimeUnit::Hour, Some("07")), FieldValue::Valid(7));
/// assert_eq!(commit(TimeUnit::Hour, Some("24")), FieldValue::Invalid);
/// assert_eq!(commit(TimeUnit::Minute, Some("")), FieldValue::Empty);
/// ```
pub fn commit(unit: TimeUnit, raw: Option<&str>) -> FieldValue {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return FieldValue::Empty;
    };
    match parse_leading_digits(raw) {
        Some(n) if n <= unit.max() => FieldValue::Valid(n),
        _ => FieldValue::Invalid,
    }
}

/// One time sub-field as the form holds it: the text shown in the input and the value
/// it last committed to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeField {
    pub text: Option<String>,
    pub value: FieldValue,
}

impl TimeField {
    /// Replaces the text and commits it, rewriting the text to its canonical form.
    pub fn edit(&mut self, unit: TimeUnit, text: Option<&str>) {
        self.value = commit(unit, text);
        self.text = self.value.display_text();
    }
}

/// Hour, minute and second of one range boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeFields {
    pub hour: TimeField,
    pub minute: TimeField,
    pub second: TimeField,
}

impl TimeFields {
    pub fn get(&self, unit: TimeUnit) -> &TimeField {
        match unit {
            TimeUnit::Hour => &self.hour,
            TimeUnit::Minute => &self.minute,
            TimeUnit::Second => &self.second,
        }
    }

    pub fn get_mut(&mut self, unit: TimeUnit) -> &mut TimeField {
        match unit {
            TimeUnit::Hour => &mut self.hour,
            TimeUnit::Minute => &mut self.minute,
            TimeUnit::Second => &mut self.second,
        }
    }

    pub fn validity(&self) -> TimeValidity {
        TimeValidity::derive(&self.hour.value, &self.minute.value)
    }
}

/// Validity flags of one boundary's time, derived from the committed values.
///
/// A minute only counts as valid under a valid hour. Seconds carry no flag of their
/// own; the second input is enabled while the minute is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeValidity {
    pub hour: bool,
    pub minute: bool,
}

impl TimeValidity {
    pub fn derive(hour: &FieldValue, minute: &FieldValue) -> Self {
        let hour = hour.is_valid();
        Self {
            hour,
            minute: hour && minute.is_valid(),
        }
    }

    pub fn seconds_enabled(&self) -> bool {
        self.minute
    }
}
