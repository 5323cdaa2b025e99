use std::borrow::Cow;

use lazy_regex::regex_replace_all;

/// Replace every run of two or more periods with a single period.
#[tracing::instrument(skip_all)]
pub fn collapse_periods(text: &str) -> Cow<'_, str> {
    regex_replace_all!(r"\.{2,}", text, ".")
}
