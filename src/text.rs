//! Text normalization stages, and the pipeline that composes them.
//!
//! Every stage takes the text it should operate on and returns [`Cow::Borrowed`]
//! when nothing changed, or [`Cow::Owned`] with the rewritten text otherwise.

use std::borrow::Cow;

use tracing::trace;

use crate::{debugging::ToDisplayEscaped, Pattern, Stages};

mod collapse_periods;
mod collapse_spaces;
mod replace_pattern;
mod trim;

pub use collapse_periods::collapse_periods;
pub use collapse_spaces::collapse_spaces;
pub use replace_pattern::replace_pattern;
pub use trim::trim;

/// Run the provided stages, in pipeline order, against the text.
///
/// # Example
///
/// ```
/// # use textclean::{text::normalize_text, Pattern, Stages};
/// let pattern = Pattern::new(r"\d+")?;
/// let normalized = normalize_text("  call 555..1234 now.. ", &pattern, Stages::full());
/// assert_eq!(normalized, "call . now.");
/// # Ok::<(), textclean::Error>(())
/// ```
pub fn normalize_text(text: &str, pattern: &Pattern, stages: Stages) -> String {
    let mut current = Cow::Borrowed(text);
    for stage in stages.iter() {
        let next = match stage.apply(&current, pattern) {
            Cow::Owned(next) => Some(next),
            Cow::Borrowed(_) => None,
        };
        if let Some(next) = next {
            trace!(
                %stage,
                before = %current.display_escaped(),
                after = %next.display_escaped(),
            );
            current = Cow::Owned(next);
        }
    }
    current.into_owned()
}
