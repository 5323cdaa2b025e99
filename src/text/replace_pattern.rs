use std::borrow::Cow;

use crate::Pattern;

/// Replace every non-overlapping match of the pattern with a single space.
///
/// The replacement is inserted verbatim: a `$` in it is never read as a group reference.
#[tracing::instrument(skip_all)]
pub fn replace_pattern<'a>(text: &'a str, pattern: &Pattern) -> Cow<'a, str> {
    pattern.replace_all(text, " ")
}
