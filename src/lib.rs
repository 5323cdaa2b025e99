#![doc = include_str!("../README.md")]
#![deny(clippy::invalid_regex)]

use std::str::FromStr;

use derivative::Derivative;
use flagset::{flags, FlagSet};
use getset::{CopyGetters, Getters};
use itertools::Itertools;
use regex::{NoExpand, Regex};
use strum::{Display, EnumIter};
use tap::Pipe;
use thiserror::Error;
use tracing::debug;
use typed_builder::TypedBuilder;

pub mod column;
pub mod debugging;
pub mod text;

pub use column::Column;

/// Convenience import for the types most callers need.
///
/// [`Error`] is renamed to `NormalizeError` to reduce the likelihood
/// of collisions when imported via this prelude.
///
/// [`Error`]: enum@crate::Error
pub mod prelude {
    pub use super::{
        normalize, Column, Error as NormalizeError, InvalidPatternError, Normalizer, Options,
        Pattern, Stage, Stages,
    };
}

/// Errors reported by [`Normalizer`] and [`normalize`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("compile pattern")]
    InvalidPattern(#[from] InvalidPatternError),
}

/// The pattern supplied by the caller could not be compiled.
///
/// This covers both syntax errors and patterns that compile to a program
/// larger than the engine permits.
// Note: the engine's error is flattened into a string so that `regex` stays out of the public API.
#[derive(Debug, Clone, PartialEq, Eq, Error, Getters)]
#[error("invalid pattern '{pattern}': {reason}")]
#[getset(get = "pub")]
pub struct InvalidPatternError {
    /// The pattern text as provided.
    pattern: String,

    /// The reason reported by the regex engine.
    reason: String,
}

/// A compiled regular expression whose matches are replaced with a space.
///
/// The dialect is that of the [`regex`] crate: Perl-like syntax without
/// lookaround or backreferences, with guaranteed linear-time matching.
///
/// # Example
///
/// ```
/// # use textclean::*;
/// let pattern = Pattern::new(r"\d+")?;
/// assert_eq!(pattern.as_str(), r"\d+");
///
/// let err = Pattern::new("[").unwrap_err();
/// assert!(matches!(err, Error::InvalidPattern(_)));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Derivative)]
#[derivative(Debug = "transparent")]
pub struct Pattern(Regex);

impl Pattern {
    /// Compile the provided pattern.
    pub fn new(pattern: impl AsRef<str>) -> Result<Self, Error> {
        let pattern = pattern.as_ref();
        Regex::new(pattern)
            .map(Self)
            .map_err(|err| InvalidPatternError::new(pattern, err).pipe(Error::InvalidPattern))
    }

    /// The source text of the pattern.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Replace every non-overlapping match in `text` with `replacement`, verbatim.
    pub(crate) fn replace_all<'t>(
        &self,
        text: &'t str,
        replacement: &str,
    ) -> std::borrow::Cow<'t, str> {
        self.0.replace_all(text, NoExpand(replacement))
    }
}

impl InvalidPatternError {
    fn new(pattern: &str, err: regex::Error) -> Self {
        Self {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        }
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

flags! {
    /// A single step of the normalization pipeline.
    ///
    /// # Pipeline order
    ///
    /// Stages always run in the order specified by the implementation of [`Ord`] for this type,
    /// no matter the order in which they were added to a [`Stages`] set:
    ///
    /// ```
    /// # use textclean::*;
    /// assert!(Stage::ReplacePattern < Stage::CollapsePeriods);
    /// assert!(Stage::CollapsePeriods < Stage::Trim);
    /// assert!(Stage::Trim < Stage::CollapseSpaces);
    /// ```
    #[derive(Hash, PartialOrd, Ord, EnumIter, Display)]
    #[strum(serialize_all = "snake_case")]
    pub enum Stage: u8 {
        /// Replace every match of the [`Pattern`] with a single space.
        ///
        /// With the pattern `\d+`, `foo123bar` becomes `foo bar`.
        ReplacePattern,

        /// Replace every run of two or more periods with a single period.
        ///
        /// `a....b..c` becomes `a.b.c`.
        CollapsePeriods,

        /// Remove leading and trailing whitespace.
        /// A character is considered "whitespace" if it has the Unicode property `White_Space=yes`,
        /// or is one of the information separators U+001C through U+001F.
        ///
        /// `"\t hello \n"` becomes `"hello"`.
        Trim,

        /// Replace every run of two or more space characters with a single space.
        /// Only the space character itself is considered; tabs and newlines are left as-is.
        ///
        /// `hello   world` becomes `hello world`.
        CollapseSpaces,
    }
}

impl Stage {
    /// Run this stage alone against the provided text.
    ///
    /// [`Stage::ReplacePattern`] is the only stage that makes use of `pattern`.
    pub fn apply<'a>(self, text: &'a str, pattern: &Pattern) -> std::borrow::Cow<'a, str> {
        match self {
            Stage::ReplacePattern => text::replace_pattern(text, pattern),
            Stage::CollapsePeriods => text::collapse_periods(text),
            Stage::Trim => text::trim(text),
            Stage::CollapseSpaces => text::collapse_spaces(text),
        }
    }
}

/// The stages of the normalization pipeline to run.
///
/// Build a set from a single [`Stage`] or by combining them with `|`.
/// Iteration always follows pipeline order:
/// ```
/// # use textclean::*;
/// let stages = Stages::from(Stage::CollapseSpaces | Stage::ReplacePattern);
/// let order = stages.iter().collect::<Vec<_>>();
/// assert_eq!(order, vec![Stage::ReplacePattern, Stage::CollapseSpaces]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stages(FlagSet<Stage>);

impl Stages {
    /// Every [`Stage`]; the default.
    pub fn full() -> Self {
        Self(FlagSet::full())
    }

    /// No stages at all, leaving text untouched.
    pub fn none() -> Self {
        Self(FlagSet::default())
    }

    /// Iterate over the [`Stage`]s in the set, in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = Stage> + Clone {
        self.0.into_iter().sorted_unstable()
    }
}

impl Default for Stages {
    fn default() -> Self {
        Self::full()
    }
}

impl<F: Into<FlagSet<Stage>>> From<F> for Stages {
    fn from(value: F) -> Self {
        Self(value.into())
    }
}

impl std::fmt::Display for Stages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.iter().join(","))
    }
}

/// Options for normalizing a column.
/// Options are constructed via the `Options::builder` method.
///
/// # Examples
///
/// Defaults:
/// ```
/// # use textclean::*;
/// let options = Options::default();
///
/// assert_eq!(options.stages(), Stages::full());
/// assert_eq!(options.workers(), 1);
/// assert_eq!(options, Options::builder().build());
/// ```
///
/// Only trimming, split across four threads:
/// ```
/// # use textclean::*;
/// let options = Options::builder().stages(Stage::Trim).workers(4).build();
///
/// assert_eq!(options.stages().iter().collect::<Vec<_>>(), vec![Stage::Trim]);
/// assert_eq!(options.workers(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters, TypedBuilder)]
#[getset(get_copy = "pub")]
pub struct Options {
    /// The stages to run, always in pipeline order.
    /// Anything short of [`Stages::full`] drops the output guarantees of [`Normalizer::normalize`].
    #[builder(default, setter(into))]
    stages: Stages,

    /// The number of threads a column is split across.
    /// Zero is treated as one.
    #[builder(default = 1)]
    workers: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Normalizes text values against a compiled [`Pattern`].
///
/// Construct a normalizer once and reuse it to avoid recompiling the pattern for every column.
///
/// # Example
///
/// ```
/// # use textclean::*;
/// let normalizer = Normalizer::new(r"\d+")?;
///
/// let column = Column::from_iter([Some("foo123bar"), None, Some("a..b   42")]);
/// let normalized = normalizer.normalize(&column);
///
/// assert_eq!(
///     normalized,
///     Column::from_iter([Some("foo bar"), None, Some("a.b")]),
/// );
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct Normalizer {
    /// The pattern replaced by [`Stage::ReplacePattern`].
    #[getset(get = "pub")]
    pattern: Pattern,

    /// The options in effect.
    #[getset(get_copy = "pub")]
    options: Options,
}

impl Normalizer {
    /// Compile the pattern and create a normalizer with default options.
    pub fn new(pattern: impl AsRef<str>) -> Result<Self, Error> {
        Self::with_options(pattern, Options::default())
    }

    /// Compile the pattern and create a normalizer with the provided options.
    pub fn with_options(pattern: impl AsRef<str>, options: Options) -> Result<Self, Error> {
        Pattern::new(pattern).map(|pattern| Self { pattern, options })
    }

    /// Normalize a single piece of text.
    pub fn normalize_text(&self, text: &str) -> String {
        text::normalize_text(text, &self.pattern, self.options.stages)
    }

    /// Normalize a single value; missing values stay missing.
    pub fn normalize_value(&self, value: Option<&str>) -> Option<String> {
        value.map(|text| self.normalize_text(text))
    }

    /// Normalize every value in the column, producing a new column of the same length.
    ///
    /// The input column is never modified.
    ///
    /// # Guarantees
    ///
    /// Missing values stay missing and positions are preserved regardless of [`Options`].
    /// Only with [`Stages::full`] (the default) are all four stages applied in order,
    /// and only then is every present output free of leading or trailing whitespace,
    /// double spaces, and double periods. Any other [`Options::stages`] set gives up those guarantees:
    ///
    /// ```
    /// # use textclean::*;
    /// let options = Options::builder().stages(Stage::Trim).build();
    /// let normalizer = Normalizer::with_options("x", options)?;
    ///
    /// let normalized = normalizer.normalize(&Column::from_iter([Some(" a  ..b ")]));
    /// assert_eq!(normalized, Column::from_iter([Some("a  ..b")]));
    /// # Ok::<(), Error>(())
    /// ```
    #[tracing::instrument(skip_all)]
    pub fn normalize(&self, column: &Column) -> Column {
        let workers = self.options.workers.max(1);
        debug!(
            rows = column.len(),
            missing = column.missing_count(),
            workers,
            pattern = %self.pattern,
            stages = %self.options.stages,
            "normalize column"
        );

        let values = if workers == 1 || column.len() < 2 {
            column
                .iter()
                .map(|value| self.normalize_value(value.as_deref()))
                .collect_vec()
        } else {
            self.normalize_chunked(column.as_slice(), workers)
        };
        Column::new(values)
    }

    /// Split the values into at most `workers` contiguous chunks and normalize each on its own thread.
    /// Chunks are joined in order, so output positions match input positions.
    fn normalize_chunked(&self, values: &[Option<String>], workers: usize) -> Vec<Option<String>> {
        let chunk_size = values.len().div_ceil(workers);
        std::thread::scope(|scope| {
            let handles = values
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|value| self.normalize_value(value.as_deref()))
                            .collect_vec()
                    })
                })
                .collect_vec();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect_vec()
        })
    }
}

/// Normalize every value in `values` against `pattern`.
///
/// Equivalent to [`Normalizer::new`] followed by [`Normalizer::normalize`].
///
/// # Example
///
/// ```
/// # use textclean::*;
/// let values = Column::from_iter([Some("foo123bar"), Some("baz456qux")]);
/// let normalized = normalize(&values, r"\d+")?;
///
/// assert_eq!(normalized, Column::from_iter([Some("foo bar"), Some("baz qux")]));
/// # Ok::<(), Error>(())
/// ```
pub fn normalize(values: &Column, pattern: impl AsRef<str>) -> Result<Column, Error> {
    Normalizer::new(pattern).map(|normalizer| normalizer.normalize(values))
}
