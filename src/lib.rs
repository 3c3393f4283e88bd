//! Strict parser for Semantic Version 2.0 numbers.
//!
//! ## Motivation
//!
//! This crate parses, compares, bumps, and builds versions that follow
//! [Semantic Versioning 2.0.0](https://semver.org/spec/v2.0.0.html) to the letter.
//!
//! - Numbers have no size limit (e.g. "99999999999999999999999.0.0" is a valid version)
//! - Errors point at the offending part of the input
//! - Parsing can target any type that implements [`VersionBuilder`]
//! - Rendering a parsed version yields exactly the input string
//!
//! ## Examples
//!
//! ```rust
//! use strict_semver::{Bump, Version};
//!
//! let version = strict_semver::parse("1.2.3-rc.1+build.42").unwrap();
//! assert_eq!(version.to_string(), "1.2.3-rc.1+build.42");
//!
//! // build metadata does not matter for precedence
//! assert!(strict_semver::less(&version, &strict_semver::parse("1.2.3").unwrap()));
//! assert_eq!(version, strict_semver::parse("1.2.3-rc.1").unwrap());
//!
//! // bumping yields a new version and clears the build metadata
//! let next = strict_semver::bump(&version, &[Bump::NextPreRelease]).unwrap();
//! assert_eq!(next.to_string(), "1.2.3-rc.2");
//!
//! // versions can be assembled from fragments
//! let built = strict_semver::build(Some("1.2.3"), &["rc", "1"], &["cafebabe"]).unwrap();
//! assert_eq!(built.to_string(), "1.2.3-rc.1+cafebabe");
//!
//! // non-conformant input is rejected
//! let error = strict_semver::parse("1.2.3-01").unwrap_err();
//! assert_eq!(error.to_string(), "The pre-release number `01` must not have leading zeros");
//! assert!(!strict_semver::valid("v1.2.3"));
//! ```
//!
//! ## Parsing into custom versions
//!
//! The parser is generic over [`VersionBuilder`], which receives the validated components.
//!
//! ```rust
//! use strict_semver::VersionBuilder;
//!
//! /// Only keep the core numbers, if they fit into a u64
//! #[derive(Debug, Default)]
//! struct Core(Vec<Option<u64>>);
//!
//! impl<'input> VersionBuilder<'input> for Core {
//!     type Out = Vec<Option<u64>>;
//!
//!     fn new() -> Self {
//!         Self::default()
//!     }
//!
//!     fn set_major(&mut self, major: &'input str) {
//!         self.0.push(major.parse().ok());
//!     }
//!
//!     fn set_minor(&mut self, minor: &'input str) {
//!         self.0.push(minor.parse().ok());
//!     }
//!
//!     fn set_patch(&mut self, patch: &'input str) {
//!         self.0.push(patch.parse().ok());
//!     }
//!
//!     fn build(self) -> Self::Out {
//!         self.0
//!     }
//! }
//!
//! let core = strict_semver::parse_into::<Core>("1.2.99999999999999999999-rc");
//! assert_eq!(core, Ok(vec![Some(1), Some(2), None]));
//! ```

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused,
    while_true
)]

pub use strict_semver_builder::{build, BuildError, Builder};
pub use strict_semver_parser::{Error, ErrorKind, OwnedError, VersionBuilder};
#[cfg(feature = "semver")]
pub use strict_version::IntoSemverError;
pub use strict_version::{Build, Bump, BumpError, InvalidNumber, Number, PreRelease, Version};

/// Parse a string slice into a [`Version`].
///
/// ## Examples
///
/// ```rust
/// let version = strict_semver::parse("1.2.3").unwrap();
/// assert_eq!(version, strict_semver::Version::new(1, 2, 3));
///
/// let error = strict_semver::parse("1.2").unwrap_err();
/// assert_eq!(
///     format!("{:#}", error),
///     "Expected `.` but the input ended\n|    1.2\n|    ~~~^\n"
/// );
/// ```
pub fn parse(input: &str) -> Result<Version, Error<'_>> {
    strict_semver_parser::parse::<Version>(input)
}

/// Parse a string slice into any [`VersionBuilder`].
///
/// ## Examples
///
/// ```rust
/// assert_eq!(strict_semver::parse_into::<()>("1.2.3"), Ok(()));
/// ```
pub fn parse_into<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    strict_semver_parser::parse::<V>(input)
}

/// Parse a string slice into a [`Version`] and panic if it is not valid.
///
/// Only use this for input that is known to be valid.
///
/// ## Examples
///
/// ```rust
/// let version = strict_semver::must_parse("1.2.3-ver.12a+build.1234");
/// assert_eq!(version.to_string(), "1.2.3-ver.12a+build.1234");
/// ```
///
/// ```rust,should_panic
/// strict_semver::must_parse("1.2");
/// ```
#[track_caller]
pub fn must_parse(input: &str) -> Version {
    match parse(input) {
        Ok(version) => version,
        Err(error) => panic!("{:#}", error),
    }
}

/// Check if the input is a valid Semantic Version.
///
/// ## Examples
///
/// ```rust
/// assert!(strict_semver::valid("1.0.0-0A.is.legal"));
/// assert!(!strict_semver::valid("1.0.0-alpha..1"));
/// ```
pub fn valid(input: &str) -> bool {
    strict_semver_parser::valid(input)
}

/// Returns true if `a` has a lower precedence than `b`.
///
/// Build metadata is ignored, so two versions that only differ in their build metadata
/// are not less than each other.
///
/// ## Examples
///
/// ```rust
/// # use strict_semver::{less, must_parse};
/// assert!(less(&must_parse("1.0.0-alpha"), &must_parse("1.0.0")));
/// assert!(less(&must_parse("2.0.0"), &must_parse("10.0.0")));
/// assert!(!less(&must_parse("1.0.0+A"), &must_parse("1.0.0+B")));
/// assert!(!less(&must_parse("1.0.0+B"), &must_parse("1.0.0+A")));
/// ```
pub fn less(a: &Version, b: &Version) -> bool {
    a < b
}

/// Returns a new version with all bump steps applied in order.
///
/// See [`Version::bump`].
///
/// ## Examples
///
/// ```rust
/// # use strict_semver::{bump, must_parse, Bump};
/// assert_eq!(bump(&must_parse("4.3.2+hello"), &[]).unwrap().to_string(), "5.0.0");
/// assert_eq!(
///     bump(&must_parse("1.0.0+test"), &[Bump::Major, Bump::Metadata("other".into())])
///         .unwrap()
///         .to_string(),
///     "2.0.0+other"
/// );
/// ```
pub fn bump(version: &Version, steps: &[Bump]) -> Result<Version, BumpError> {
    version.bump(steps)
}

/// Returns a new version with all bump steps applied in order and panics if a step fails.
///
/// Only use this when the steps are known to apply, e.g. [`Bump::Major`].
///
/// ## Examples
///
/// ```rust
/// # use strict_semver::{must_bump, must_parse, Bump};
/// let version = must_bump(&must_parse("1.2.3-rc.1"), &[Bump::NextPreRelease]);
/// assert_eq!(version.to_string(), "1.2.3-rc.2");
/// ```
///
/// ```rust,should_panic
/// # use strict_semver::{must_bump, must_parse, Bump};
/// must_bump(&must_parse("1.2.3"), &[Bump::Release]);
/// ```
#[track_caller]
pub fn must_bump(version: &Version, steps: &[Bump]) -> Version {
    match version.bump(steps) {
        Ok(version) => version,
        Err(error) => panic!("{}", error),
    }
}
