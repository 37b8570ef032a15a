/// Pads a one-character time text with a leading `'0'` when its input loses focus.
///
/// Anything else (nothing, blank, two characters) comes back unchanged. Only the shown
/// text is touched; the committed value stays as it was.
///
/// ```
/// # use plq_core::normalize::pad_on_blur;
/// assert_eq!(pad_on_blur(Some("7")).as_deref(), Some("07"));
/// assert_eq!(pad_on_blur(Some("07")).as_deref(), Some("07"));
/// assert_eq!(pad_on_blur(None), None);
/// ```
pub fn pad_on_blur(text: Option<&str>) -> Option<String> {
    let text = text?;
    if text.chars().count() == 1 {
        Some(format!("0{text}"))
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digit_is_padded() {
        for d in 0..=9 {
            let s = d.to_string();
            assert_eq!(pad_on_blur(Some(&s)), Some(format!("0{d}")));
        }
    }

    #[test]
    fn blank_and_full_values_unchanged() {
        assert_eq!(pad_on_blur(Some("")).as_deref(), Some(""));
        assert_eq!(pad_on_blur(Some("12")).as_deref(), Some("12"));
        assert_eq!(pad_on_blur(None), None);
    }

    #[test]
    fn idempotent() {
        for s in ["", "0", "5", "09", "23"] {
            let once = pad_on_blur(Some(s));
            let twice = pad_on_blur(once.as_deref());
            assert_eq!(once, twice);
        }
    }
}
