//! Keystroke filters for the query form inputs.
//!
//! Every filter answers one question: may this key edit the field? Rejected keys
//! are cancelled before they reach the text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::filter::Attribute;

/// A key press as delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Tab,
    ArrowLeft,
    ArrowRight,
    /// Any other named key (Enter, Delete, F-keys...).
    Other,
}

impl Key {
    /// Keys every time field lets through untouched.
    fn is_navigation(self) -> bool {
        matches!(
            self,
            Key::Backspace | Key::Tab | Key::ArrowLeft | Key::ArrowRight
        )
    }
}

/// Text selection (or caret, when collapsed) inside an input, in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Selects the whole of a `len`-character value.
    pub fn all(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// Maximum characters a time sub-field holds.
pub const TIME_FIELD_WIDTH: usize = 2;

static PLATE_OR_MODEL_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\s]$").expect("valid regex"));
static LETTER_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]$").expect("valid regex"));
static DATE_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9/]$").expect("valid regex"));

fn char_matches(re: &Regex, c: char) -> bool {
    let mut buf = [0u8; 4];
    re.is_match(c.encode_utf8(&mut buf))
}

/// Decides whether `key` may edit an hour/minute/second field currently holding `text`.
///
/// Digits and navigation keys pass. Once the field holds two characters, further digits
/// are only accepted when they replace a selection.
///
/// ```
/// # use plq_core::keys::{accepts_time_key, Key, Selection};
/// assert!(accepts_time_key("1", Key::Char('2'), Selection::caret(1)));
/// assert!(!accepts_time_key("12", Key::Char('3'), Selection::caret(2)));
/// assert!(accepts_time_key("12", Key::Char('3'), Selection::all(2)));
/// assert!(!accepts_time_key("", Key::Char('a'), Selection::caret(0)));
/// ```
pub fn accepts_time_key(text: &str, key: Key, selection: Selection) -> bool {
    if key.is_navigation() {
        return true;
    }
    let Key::Char(c) = key else {
        return false;
    };
    if !c.is_ascii_digit() {
        return false;
    }
    if !selection.is_collapsed() {
        return true;
    }
    text.chars().count() < TIME_FIELD_WIDTH
}

/// Decides whether `key` may edit the free-text field for `attribute`.
///
/// Plates and models take letters, digits and spaces; colors and makes take letters
/// and spaces. Backspace and Tab always pass.
pub fn accepts_attribute_key(attribute: Attribute, key: Key) -> bool {
    match key {
        Key::Backspace | Key::Tab => true,
        Key::Char(c) => match attribute {
            Attribute::LicensePlates | Attribute::Models => char_matches(&PLATE_OR_MODEL_CHAR, c),
            Attribute::Colors | Attribute::Makes => char_matches(&LETTER_CHAR, c),
        },
        _ => false,
    }
}

/// Decides whether `key` may edit a typed date (digits and `/`).
pub fn accepts_date_key(key: Key) -> bool {
    match key {
        Key::Backspace | Key::Tab => true,
        Key::Char(c) => char_matches(&DATE_CHAR, c),
        _ => false,
    }
}
