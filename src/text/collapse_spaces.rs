use std::borrow::Cow;

use lazy_regex::regex_replace_all;

/// Replace every run of two or more space characters with a single space.
///
/// Unlike [`Stage::Trim`](crate::Stage::Trim), only the space character is considered;
/// tabs and newlines are preserved.
#[tracing::instrument(skip_all)]
pub fn collapse_spaces(text: &str) -> Cow<'_, str> {
    regex_replace_all!(r" {2,}", text, " ")
}
