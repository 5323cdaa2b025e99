use std::borrow::Cow;

/// Unicode `White_Space=yes`, plus the information separators U+001C through U+001F.
fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Remove leading and trailing whitespace.
///
/// Whitespace is anything with the Unicode property `White_Space=yes`, plus the
/// file, group, record and unit separators (U+001C through U+001F).
/// Interior whitespace is left alone.
#[tracing::instrument(skip_all)]
pub fn trim(text: &str) -> Cow<'_, str> {
    let trimmed = text.trim_matches(is_trimmed);
    if trimmed.len() == text.len() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(trimmed.to_string())
    }
}
