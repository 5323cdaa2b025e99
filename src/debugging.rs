//! Provides debugging helpers for logging text values.

/// Conversion trait for types that can be represented with [`EscapedText`].
pub trait ToDisplayEscaped {
    fn display_escaped(&self) -> EscapedText<'_>;
}

impl<T: AsRef<str> + ?Sized> ToDisplayEscaped for T {
    fn display_escaped(&self) -> EscapedText<'_> {
        EscapedText {
            text: self.as_ref(),
        }
    }
}

/// Wraps text, escaping quotes, backslashes and non-printable characters when invoked by `Display`.
///
/// The text is quoted, so leading and trailing whitespace stays visible.
#[derive(Debug)]
pub struct EscapedText<'a> {
    text: &'a str,
}

impl<'a> std::fmt::Display for EscapedText<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.text.escape_debug())
    }
}
