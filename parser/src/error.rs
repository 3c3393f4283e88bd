use std::{fmt::Display, ops::Range};

/// Possible errors that happen during parsing
/// and the location of the input where the error occurred.
///
/// # Example
///
/// ```rust
/// let error = strict_semver_parser::parse::<()>("1.2.3+").unwrap_err();
/// assert_eq!(error.to_string(), "The build identifier must not be empty");
///
/// let error = strict_semver_parser::parse::<()>("1.2.3!").unwrap_err();
/// assert_eq!(error.to_string(), "Unexpected trailing input `!`");
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Error<'input> {
    pub(crate) input: &'input str,
    pub(crate) span: Span,
    pub(crate) error: ErrorType,
}

impl<'input> Error<'input> {
    /// Creates a new [`OwnedError`] out of this [`Error`].
    ///
    /// This is specialized version of [`Clone`] which returns a different type.
    #[inline]
    pub fn owned(&self) -> OwnedError {
        OwnedError {
            input: self.input.into(),
            span: self.span,
            error: self.error,
        }
    }

    /// Returns the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = strict_semver_parser::parse::<()>("1.2").unwrap_err();
    /// assert_eq!(error.input(), "1.2");
    /// ```
    #[inline]
    pub fn input(&self) -> &'input str {
        self.input
    }

    /// Returns the 0-based byte offset at which the grammar was violated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = strict_semver_parser::parse::<()>("1.2.3-0123").unwrap_err();
    /// assert_eq!(error.position(), 6);
    /// ```
    #[inline]
    pub fn position(&self) -> usize {
        self.span.start
    }

    /// Returns range into the input string that points to the erroneous input.
    ///
    /// The range is empty if the input ended where more characters were required.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = strict_semver_parser::parse::<()>("1.2.3-0123").unwrap_err();
    /// assert_eq!(error.error_span(), 6..10);
    ///
    /// let error = strict_semver_parser::parse::<()>("1.2").unwrap_err();
    /// assert_eq!(error.error_span(), 3..3);
    /// ```
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.span.into()
    }

    /// Returns the kind of error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strict_semver_parser::{parse, ErrorKind};
    ///
    /// assert_eq!(parse::<()>("1.2").unwrap_err().error_kind(), ErrorKind::UnexpectedEnd);
    /// assert_eq!(parse::<()>("1-2").unwrap_err().error_kind(), ErrorKind::UnexpectedChar);
    /// assert_eq!(parse::<()>("a.b.c").unwrap_err().error_kind(), ErrorKind::NotANumber);
    /// assert_eq!(parse::<()>("01.1.1").unwrap_err().error_kind(), ErrorKind::LeadingZero);
    /// assert_eq!(parse::<()>("1.2.3-a_b").unwrap_err().error_kind(), ErrorKind::InvalidCharacter);
    /// assert_eq!(parse::<()>("1.2.3-a..b").unwrap_err().error_kind(), ErrorKind::EmptyIdentifier);
    /// assert_eq!(parse::<()>("1.2.3.4").unwrap_err().error_kind(), ErrorKind::TrailingData);
    /// ```
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        match self.error {
            ErrorType::UnexpectedEnd { .. } => ErrorKind::UnexpectedEnd,
            ErrorType::UnexpectedChar { .. } => ErrorKind::UnexpectedChar,
            ErrorType::NotANumber(_) => ErrorKind::NotANumber,
            ErrorType::LeadingZero(_) => ErrorKind::LeadingZero,
            ErrorType::InvalidCharacter(_) => ErrorKind::InvalidCharacter,
            ErrorType::EmptyIdentifier(_) => ErrorKind::EmptyIdentifier,
            ErrorType::TrailingData => ErrorKind::TrailingData,
        }
    }

    /// Returns a slice from the original input line that triggered the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = strict_semver_parser::parse::<()>("1.2.3+meta+meta").unwrap_err();
    /// assert_eq!(error.erroneous_input(), "+meta");
    /// ```
    #[inline]
    pub fn erroneous_input(&self) -> &'input str {
        &self.input[self.error_span()]
    }

    /// Returns a text representation of the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = strict_semver_parser::parse::<()>("1.02.3").unwrap_err();
    /// assert_eq!(
    ///     error.error_line(),
    ///     String::from("The minor number `02` must not have leading zeros")
    /// );
    /// ```
    ///
    /// This is equivalent to the [`Display`] implementation, which can be further customized with format specifiers.
    ///
    /// ```rust
    /// let error = strict_semver_parser::parse::<()>("1?").unwrap_err();
    /// assert_eq!(format!("{:!^32}", error), String::from("!!!Expected `.` but found `?`!!!"));
    /// ```
    pub fn error_line(&self) -> String {
        match &self.error {
            ErrorType::UnexpectedEnd { expected } => {
                format!("Expected `{}` but the input ended", expected)
            }
            ErrorType::UnexpectedChar { expected } => format!(
                "Expected `{}` but found `{}`",
                expected,
                self.erroneous_input()
            ),
            ErrorType::NotANumber(part) if self.span.is_empty() => {
                format!("Could not parse the {} number: No input", part)
            }
            ErrorType::NotANumber(part) => format!(
                "Could not parse the {} number: `{}` is not a digit",
                part,
                self.erroneous_input()
            ),
            ErrorType::LeadingZero(segment) => format!(
                "The {} number `{}` must not have leading zeros",
                segment,
                self.erroneous_input()
            ),
            ErrorType::InvalidCharacter(segment) => format!(
                "Invalid character `{}` in {} identifier",
                self.erroneous_input(),
                segment
            ),
            ErrorType::EmptyIdentifier(segment) => {
                format!("The {} identifier must not be empty", segment)
            }
            ErrorType::TrailingData => {
                format!("Unexpected trailing input `{}`", self.erroneous_input())
            }
        }
    }

    /// Returns a caret line indication the erroneous input if it was written under the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = strict_semver_parser::parse::<()>("foo").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "^");
    ///
    /// let error = strict_semver_parser::parse::<()>("1.2.3 bar").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "~~~~~^^^^");
    ///
    /// let error = strict_semver_parser::parse::<()>("1.2").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "~~~^");
    /// ```
    pub fn indicate_erroneous_input(&self) -> String {
        format!(
            "{0:~<start$}{0:^<width$}",
            "",
            start = self.span.start,
            width = (self.span.end - self.span.start).max(1)
        )
    }
}

/// Owned version of [`Error`] which clones the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedError {
    input: String,
    span: Span,
    error: ErrorType,
}

impl OwnedError {
    /// Return a borrowed version of this error.
    pub fn borrowed(&self) -> Error<'_> {
        Error {
            input: &self.input,
            span: self.span,
            error: self.error,
        }
    }

    /// See [`Error::input`].
    #[inline]
    pub fn input(&self) -> &str {
        self.borrowed().input()
    }

    /// See [`Error::position`].
    #[inline]
    pub fn position(&self) -> usize {
        self.span.start
    }

    /// See [`Error::error_span`].
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.borrowed().error_span()
    }

    /// See [`Error::error_kind`].
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.borrowed().error_kind()
    }

    /// See [`Error::erroneous_input`].
    #[inline]
    pub fn erroneous_input(&self) -> &str {
        self.borrowed().erroneous_input()
    }

    /// See [`Error::error_line`].
    #[inline]
    pub fn error_line(&self) -> String {
        self.borrowed().error_line()
    }

    /// See [`Error::indicate_erroneous_input`].
    #[inline]
    pub fn indicate_erroneous_input(&self) -> String {
        self.borrowed().indicate_erroneous_input()
    }
}

impl From<Error<'_>> for OwnedError {
    fn from(error: Error<'_>) -> Self {
        error.owned()
    }
}

/// Possible errors that can happen.
/// These don't include an information as those are covered by various
/// error methods like [`Error::erroneous_input`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input ended where more characters were required
    UnexpectedEnd,
    /// Expected a separator (`.`, `-`, or `+`), but found a different character
    UnexpectedChar,
    /// A character outside of `[0-9A-Za-z-]` was found in an identifier
    InvalidCharacter,
    /// Expected a major, minor, or patch number, but found no digits
    NotANumber,
    /// A numeric component or a numeric pre-release identifier has a leading zero
    LeadingZero,
    /// A pre-release or build identifier is empty
    EmptyIdentifier,
    /// The version is complete, but there is more input
    TrailingData,
}

impl Display for Error<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.error_line())?;
        if f.alternate() {
            writeln!(f)?;
            writeln!(f, "|    {}", self.input)?;
            writeln!(f, "|    {}", self.indicate_erroneous_input())?;
        }
        Ok(())
    }
}

impl Display for OwnedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.borrowed().fmt(f)
    }
}

impl std::error::Error for Error<'_> {}

impl std::error::Error for OwnedError {}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorSpan {
    pub(crate) error: ErrorType,
    pub(crate) span: Span,
}

impl ErrorSpan {
    pub(crate) fn new(error: ErrorType, span: Span) -> Self {
        Self { error, span }
    }

    pub(crate) fn with_input(self, input: &str) -> Error<'_> {
        Error {
            input,
            span: self.span,
            error: self.error,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ErrorType {
    UnexpectedEnd { expected: char },
    UnexpectedChar { expected: char },
    NotANumber(Part),
    LeadingZero(Segment),
    InvalidCharacter(Segment),
    EmptyIdentifier(Segment),
    TrailingData,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Part {
    Major,
    Minor,
    Patch,
}

impl Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Part::Major => f.pad("major"),
            Part::Minor => f.pad("minor"),
            Part::Patch => f.pad("patch"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Part(Part),
    PreRelease,
    Build,
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Part(part) => part.fmt(f),
            Segment::PreRelease => f.pad("pre-release"),
            Segment::Build => f.pad("build"),
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Span {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A span over the next character of `input`, or an empty span at the end of input.
    pub(crate) fn next_char(pos: usize, input: &str) -> Self {
        let len = input.chars().next().map_or(0, char::len_utf8);
        Self::new(pos, pos + len)
    }

    fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Self {
        s.start..s.end
    }
}
