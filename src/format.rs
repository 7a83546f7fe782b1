//! Rendering sequences as strings under a small bracket/separator pattern.
//!
//! A pattern is at most three characters long:
//!
//! | Pattern | Meaning                                   | `[1, 2, 3]` renders as |
//! |---------|-------------------------------------------|------------------------|
//! | `""`    | no brackets, default spacing              | `1 2 3`                |
//! | `";"`   | separator only                            | `1; 2; 3`              |
//! | `"()"`  | left and right bracket                    | `(1 2 3)`              |
//! | `"[,]"` | left bracket, separator, right bracket    | `[1, 2, 3]`            |
//! | `"/0+"` | no separator at all                       | `123`                  |
//!
//! Spacing depends on the element type (see [`DisplayKind`]). Primitive-like
//! elements get one space after each separator. Other elements are joined
//! by the bare separator. With `evenly_spaced_separator`, primitive-like
//! elements get a space on both sides of the separator instead. The
//! two-character form is the exception: it keeps only the trailing space so
//! the brackets stay tight.

use std::fmt::Display;

use crate::error::{Error, Result};
use crate::sequence::{require, Sequence};

/// Pattern that suppresses the separator entirely.
pub const NO_SEPARATOR: &str = "/0+";

/// Classifies an element type for default spacing.
///
/// Built-in numerics, `bool`, `char` and strings are primitive-like. Other
/// types opt in with an empty impl and keep the default `false`:
///
/// ```
/// use seqstat::format::{to_display_string, DisplayKind};
/// use std::fmt;
///
/// struct Tag(&'static str);
/// impl fmt::Display for Tag {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "<{}>", self.0)
///     }
/// }
/// impl DisplayKind for Tag {}
///
/// let tags = [Tag("a"), Tag("b")];
/// assert_eq!(to_display_string(&tags, "", false).unwrap(), "<a><b>");
/// ```
pub trait DisplayKind {
    const IS_PRIMITIVE_LIKE: bool = false;
}

macro_rules! impl_primitive_like {
    ($($t:ty),*) => {
        $(
            impl DisplayKind for $t {
                const IS_PRIMITIVE_LIKE: bool = true;
            }
        )*
    };
}

impl_primitive_like!(
    i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64, bool, char, str,
    String
);

impl<T: DisplayKind + ?Sized> DisplayKind for &T {
    const IS_PRIMITIVE_LIKE: bool = T::IS_PRIMITIVE_LIKE;
}

/// Parsed form of a display pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatSpec {
    pub outer_left: Option<char>,
    pub outer_right: Option<char>,
    pub separator: Option<char>,
    pub no_separator: bool,
    arity: usize,
}

impl FormatSpec {
    /// Parses a pattern of 0..=3 characters, or the [`NO_SEPARATOR`] sentinel.
    ///
    /// # Errors
    /// [`Error::UnsupportedPattern`] for any other pattern.
    ///
    /// # Examples
    /// ```
    /// use seqstat::format::FormatSpec;
    ///
    /// let spec = FormatSpec::parse("[;]").unwrap();
    /// assert_eq!(spec.outer_left, Some('['));
    /// assert_eq!(spec.separator, Some(';'));
    /// assert_eq!(spec.outer_right, Some(']'));
    /// assert!(FormatSpec::parse("[,,]").is_err());
    /// ```
    pub fn parse(pattern: &str) -> Result<FormatSpec> {
        if pattern == NO_SEPARATOR {
            return Ok(FormatSpec {
                no_separator: true,
                arity: 1,
                ..FormatSpec::default()
            });
        }
        let chars: Vec<char> = pattern.chars().collect();
        let spec = match *chars.as_slice() {
            [] => FormatSpec::default(),
            [sep] => FormatSpec {
                separator: Some(sep),
                arity: 1,
                ..FormatSpec::default()
            },
            [left, right] => FormatSpec {
                outer_left: Some(left),
                outer_right: Some(right),
                arity: 2,
                ..FormatSpec::default()
            },
            [left, sep, right] => FormatSpec {
                outer_left: Some(left),
                separator: Some(sep),
                outer_right: Some(right),
                arity: 3,
                ..FormatSpec::default()
            },
            _ => {
                return Err(Error::UnsupportedPattern {
                    pattern: pattern.to_owned(),
                })
            }
        };
        Ok(spec)
    }

    /// Number of pattern positions in use (the sentinel counts as one).
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Text emitted after every non-final element.
    fn delimiter(&self, primitive_like: bool, evenly_spaced: bool) -> String {
        if self.no_separator {
            return String::new();
        }
        let sep = self.separator.map(String::from).unwrap_or_default();
        match (primitive_like, evenly_spaced) {
            (true, true) if self.arity != 2 => format!(" {sep} "),
            (true, _) => format!("{sep} "),
            (false, _) => sep,
        }
    }
}

/// Formatting configuration: a pattern plus the spacing switch.
///
/// # Examples
/// ```
/// use seqstat::format::DisplayOptions;
///
/// let opts = DisplayOptions::new().pattern("(|)").evenly_spaced(true);
/// assert_eq!(opts.render(&[2, 3, 4]).unwrap(), "(2 | 3 | 4)");
/// assert_eq!(DisplayOptions::default().render(&["Bill", "Bob"]).unwrap(), "Bill Bob");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pattern: String,
    evenly_spaced_separator: bool,
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn evenly_spaced(mut self, evenly_spaced_separator: bool) -> Self {
        self.evenly_spaced_separator = evenly_spaced_separator;
        self
    }

    /// Renders `seq` with these options. See [`to_display_string`].
    pub fn render<T, S>(&self, seq: &S) -> Result<String>
    where
        T: Display + DisplayKind,
        S: Sequence<T> + ?Sized,
    {
        to_display_string(seq, &self.pattern, self.evenly_spaced_separator)
    }
}

/// Renders `seq` as a string according to `pattern`.
///
/// The final element never carries a trailing separator or space.
///
/// # Errors
/// - [`Error::NullInput`] if `seq` is absent.
/// - [`Error::UnsupportedPattern`] if `pattern` is longer than three
///   characters and is not [`NO_SEPARATOR`].
///
/// # Examples
/// ```
/// use seqstat::format::to_display_string;
///
/// assert_eq!(to_display_string(&[2, 3, 4], "[,]", false).unwrap(), "[2, 3, 4]");
/// assert_eq!(to_display_string(&["a", "b"], "", false).unwrap(), "a b");
/// assert_eq!(to_display_string(&[1, 2, 3], "/0+", false).unwrap(), "123");
/// ```
pub fn to_display_string<T, S>(
    seq: &S,
    pattern: &str,
    evenly_spaced_separator: bool,
) -> Result<String>
where
    T: Display + DisplayKind,
    S: Sequence<T> + ?Sized,
{
    let items = require(seq)?;
    let spec = FormatSpec::parse(pattern)?;
    let delimiter = spec.delimiter(T::IS_PRIMITIVE_LIKE, evenly_spaced_separator);

    let mut out = String::new();
    if let Some(left) = spec.outer_left {
        out.push(left);
    }
    for (i, item) in items.iter().enumerate() {
        out.push_str(&item.to_string());
        if i + 1 < items.len() {
            out.push_str(&delimiter);
        }
    }
    if let Some(right) = spec.outer_right {
        out.push(right);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn sentinel_concatenates(data in proptest::collection::vec(any::<u16>(), 0..30)) {
            let expected: String = data.iter().map(|x| x.to_string()).collect();
            prop_assert_eq!(to_display_string(&data, NO_SEPARATOR, false).unwrap(), expected);
        }

        #[test]
        fn bracketed_list_matches_join(data in proptest::collection::vec(any::<i32>(), 0..30)) {
            let parts: Vec<String> = data.iter().map(|x| x.to_string()).collect();
            let expected = format!("[{}]", parts.join(", "));
            prop_assert_eq!(to_display_string(&data, "[,]", false).unwrap(), expected);
        }

        #[test]
        fn long_patterns_rejected(pattern in "[a-z]{4,8}") {
            let is_unsupported = matches!(
                to_display_string(&[1], &pattern, false),
                Err(Error::UnsupportedPattern { .. })
            );
            prop_assert!(is_unsupported);
        }
    }
}
