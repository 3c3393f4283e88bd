//! Strict parser for Semantic Version 2.0 numbers.
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

mod error;
mod grammar;

pub use error::{Error, ErrorKind, OwnedError};

use error::ErrorSpan;

/// Parse a string slice into a Version.
///
/// The input must be a complete Semantic Version 2.0 string, nothing is trimmed or filled in:
///
/// - Major, minor, and patch are required and must be separated by `.`
/// - Numbers must not have leading zeros and can be of arbitrary size
/// - An optional pre-release section starts with `-` and has `.` separated identifiers
/// - An optional build section starts with `+` and has `.` separated identifiers
/// - Identifiers must not be empty and consist only of `[0-9A-Za-z-]`
/// - Numeric pre-release identifiers must not have leading zeros
///
/// ## Examples
///
/// ```rust
/// # use strict_semver_parser::VersionBuilder;
/// #[derive(Debug, Default, PartialEq)]
/// struct Parts<'input>(Vec<&'input str>);
///
/// impl<'input> VersionBuilder<'input> for Parts<'input> {
///     type Out = Vec<&'input str>;
///
///     fn new() -> Self {
///         Self::default()
///     }
///
///     fn set_major(&mut self, major: &'input str) {
///         self.0.push(major);
///     }
///
///     fn add_pre_release(&mut self, pre_release: &'input str) {
///         self.0.push(pre_release);
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// let parts = strict_semver_parser::parse::<Parts>("1.2.3-alpha.1+build");
/// assert_eq!(parts, Ok(vec!["1", "alpha", "1"]));
///
/// // numbers are not limited in size
/// let parts = strict_semver_parser::parse::<Parts>("98765432109876543210.0.0");
/// assert_eq!(parts, Ok(vec!["98765432109876543210"]));
///
/// // examples of versions that are not accepted
/// assert!(strict_semver_parser::parse::<Parts>("1").is_err());
/// assert!(strict_semver_parser::parse::<Parts>("v1.2.3").is_err());
/// assert!(strict_semver_parser::parse::<Parts>(" 1.2.3").is_err());
/// assert!(strict_semver_parser::parse::<Parts>("1.2.3.4").is_err());
/// assert!(strict_semver_parser::parse::<Parts>("1.2.3-01").is_err());
/// ```
pub fn parse<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    run::<V, _>(input, grammar::version)
}

/// Parse only the core part of a version, i.e. `major.minor.patch`.
///
/// Neither pre-release nor build sections are allowed.
///
/// ## Examples
///
/// ```rust
/// assert!(strict_semver_parser::parse_core::<()>("1.2.3").is_ok());
///
/// let error = strict_semver_parser::parse_core::<()>("1.2.3-rc").unwrap_err();
/// assert_eq!(error.to_string(), "Unexpected trailing input `-rc`");
/// ```
pub fn parse_core<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    run::<V, _>(input, grammar::core)
}

/// Parse a list of `.` separated pre-release identifiers, without the leading `-`.
///
/// ## Examples
///
/// ```rust
/// assert!(strict_semver_parser::parse_pre_release::<()>("alpha.1").is_ok());
///
/// assert!(strict_semver_parser::parse_pre_release::<()>("-alpha").is_ok());
///
/// let error = strict_semver_parser::parse_pre_release::<()>("alpha..1").unwrap_err();
/// assert_eq!(error.to_string(), "The pre-release identifier must not be empty");
/// ```
pub fn parse_pre_release<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    run::<V, _>(input, |input, version| {
        grammar::identifiers(grammar::PRE_RELEASE, input, version)
    })
}

/// Parse a list of `.` separated build identifiers, without the leading `+`.
///
/// ## Examples
///
/// ```rust
/// assert!(strict_semver_parser::parse_build::<()>("build.007").is_ok());
///
/// let error = strict_semver_parser::parse_build::<()>("+build").unwrap_err();
/// assert_eq!(error.to_string(), "The build identifier must not be empty");
/// ```
pub fn parse_build<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    run::<V, _>(input, |input, version| {
        grammar::identifiers(grammar::BUILD, input, version)
    })
}

/// Check if the input is a valid Semantic Version without building anything.
///
/// ## Examples
///
/// ```rust
/// assert!(strict_semver_parser::valid("1.0.0-alpha+001"));
/// assert!(!strict_semver_parser::valid("1.0.0-alpha+"));
/// ```
pub fn valid(input: &str) -> bool {
    parse::<()>(input).is_ok()
}

fn run<'input, V, G>(input: &'input str, grammar: G) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
    G: FnOnce(&'input str, &mut V) -> Result<(), ErrorSpan>,
{
    let mut version = V::new();
    match grammar(input, &mut version) {
        Ok(()) => Ok(version.build()),
        Err(error) => Err(error.with_input(input)),
    }
}

/// Trait to abstract over version building.
///
/// The methods to implement in this trait represent the components of a Semantic Version,
/// but allow for parsing into a custom type.
///
/// The trait is generic over the lifetime of the input string, so that one could
/// parse into a version without having to allocate.
/// Numbers are passed as the validated digits, so that implementors can choose
/// how to represent numbers that do not fit into a machine integer.
///
/// Most methods have a default implementation that does nothing and ignores the input.
/// This can be used to implement some form of validation without needing to keep the result.
///
/// The builder is only built if the whole input was valid.
/// Methods might have been called before an error was detected.
///
/// ## Example
///
/// ```rust
/// # use strict_semver_parser::VersionBuilder;
///
/// struct IsPreRelease(bool);
///
/// impl<'input> VersionBuilder<'input> for IsPreRelease {
///     type Out = bool;
///
///     fn new() -> Self {
///        IsPreRelease(false)
///     }
///
///     fn add_pre_release(&mut self, _input: &'input str) {
///         self.0 = true;
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// fn is_pre_release(v: &str) -> bool {
///     strict_semver_parser::parse::<IsPreRelease>(v).unwrap_or_default()
/// }
///
/// assert!(is_pre_release("1.2.3-pre"));
/// assert!(!is_pre_release("1.2.3"));
/// assert!(!is_pre_release("1.2.3+build"));
/// assert!(!is_pre_release("1.2.3-pre+"));
/// ```
pub trait VersionBuilder<'input> {
    /// The return type of the final version.
    type Out;

    /// Construct a new version builder.
    ///
    /// The function must not fail and the version (if returned from [`VersionBuilder::build`] at this point)
    /// should represent something akin to "0.0.0"
    fn new() -> Self;

    /// Set the major version component.
    ///
    /// The input consists only of ascii digits and has no leading zeros.
    #[allow(unused)]
    fn set_major(&mut self, major: &'input str) {}

    /// Set the minor version component.
    ///
    /// The input consists only of ascii digits and has no leading zeros.
    #[allow(unused)]
    fn set_minor(&mut self, minor: &'input str) {}

    /// Set the patch version component.
    ///
    /// The input consists only of ascii digits and has no leading zeros.
    #[allow(unused)]
    fn set_patch(&mut self, patch: &'input str) {}

    /// Add a pre-release identifier.
    ///
    /// The string is a non-empty identifier of `[0-9A-Za-z-]`.
    /// If it consists only of digits, it has no leading zeros.
    ///
    /// This method might be called multiple times, once per identifier.
    #[allow(unused)]
    fn add_pre_release(&mut self, pre_release: &'input str) {}

    /// Add a build identifier.
    ///
    /// The string is a non-empty identifier of `[0-9A-Za-z-]`.
    /// Leading zeros are allowed here.
    ///
    /// This method might be called multiple times, once per identifier.
    #[allow(unused)]
    fn add_build(&mut self, build: &'input str) {}

    /// Construct the final version.
    fn build(self) -> Self::Out;
}

/// Validation only, every component is ignored.
impl VersionBuilder<'_> for () {
    type Out = ();

    fn new() -> Self {}

    fn build(self) -> Self::Out {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[derive(Debug, Default, PartialEq)]
    struct Parts<'input> {
        major: &'input str,
        minor: &'input str,
        patch: &'input str,
        pre: Vec<&'input str>,
        build: Vec<&'input str>,
    }

    impl<'input> VersionBuilder<'input> for Parts<'input> {
        type Out = Self;

        fn new() -> Self {
            Self::default()
        }

        fn set_major(&mut self, major: &'input str) {
            self.major = major;
        }

        fn set_minor(&mut self, minor: &'input str) {
            self.minor = minor;
        }

        fn set_patch(&mut self, patch: &'input str) {
            self.patch = patch;
        }

        fn add_pre_release(&mut self, pre_release: &'input str) {
            self.pre.push(pre_release);
        }

        fn add_build(&mut self, build: &'input str) {
            self.build.push(build);
        }

        fn build(self) -> Self::Out {
            self
        }
    }

    macro_rules! parts {
        ($major:literal . $minor:literal . $patch:literal) => {
            parts!($major . $minor . $patch, [], [])
        };
        ($major:literal . $minor:literal . $patch:literal, [$($pre:literal),*], [$($build:literal),*]) => {
            Parts {
                major: $major,
                minor: $minor,
                patch: $patch,
                pre: vec![$($pre),*],
                build: vec![$($build),*],
            }
        };
    }

    #[test_case("0.0.0" => parts!("0"."0"."0"))]
    #[test_case("1.2.3" => parts!("1"."2"."3"))]
    #[test_case("10.20.30" => parts!("10"."20"."30"))]
    #[test_case("1.2.3-alpha" => parts!("1"."2"."3", ["alpha"], []))]
    #[test_case("1.2.3-alpha.1" => parts!("1"."2"."3", ["alpha", "1"], []))]
    #[test_case("1.2.3-0A.is.legal" => parts!("1"."2"."3", ["0A", "is", "legal"], []))]
    #[test_case("1.2.3----RC-SNAPSHOT.12.9.1--.12" => parts!("1"."2"."3", ["---RC-SNAPSHOT", "12", "9", "1--", "12"], []))]
    #[test_case("1.2.3+build" => parts!("1"."2"."3", [], ["build"]))]
    #[test_case("1.2.3+build.007" => parts!("1"."2"."3", [], ["build", "007"]))]
    #[test_case("1.2.3-rc.1+build.1" => parts!("1"."2"."3", ["rc", "1"], ["build", "1"]))]
    #[test_case("1.0.0-alpha+beta" => parts!("1"."0"."0", ["alpha"], ["beta"]))]
    #[test_case("1.0.0+0.build.1-rc.10000aaa-kk-0.1" => parts!("1"."0"."0", [], ["0", "build", "1-rc", "10000aaa-kk-0", "1"]))]
    #[test_case("99999999999999999999999.999999999999999999.99999999999999999" => parts!("99999999999999999999999"."999999999999999999"."99999999999999999"))]
    fn test_parse(input: &str) -> Parts<'_> {
        parse::<Parts<'_>>(input).unwrap()
    }

    #[test_case("" => (ErrorKind::NotANumber, 0..0); "empty input")]
    #[test_case("1" => (ErrorKind::UnexpectedEnd, 1..1); "only major")]
    #[test_case("1.2" => (ErrorKind::UnexpectedEnd, 3..3); "no patch")]
    #[test_case("1.2." => (ErrorKind::NotANumber, 4..4); "empty patch")]
    #[test_case("v1.2.3" => (ErrorKind::NotANumber, 0..1); "leading v")]
    #[test_case(" 1.2.3" => (ErrorKind::NotANumber, 0..1); "leading space")]
    #[test_case("1.2.3 " => (ErrorKind::TrailingData, 5..6); "trailing space")]
    #[test_case("1.2.3.4" => (ErrorKind::TrailingData, 5..7); "fourth number")]
    #[test_case("1,2.3" => (ErrorKind::UnexpectedChar, 1..2); "wrong separator")]
    #[test_case("01.1.1" => (ErrorKind::LeadingZero, 0..2); "leading zero major")]
    #[test_case("1.01.1" => (ErrorKind::LeadingZero, 2..4); "leading zero minor")]
    #[test_case("1.1.01" => (ErrorKind::LeadingZero, 4..6); "leading zero patch")]
    #[test_case("1.2.3-" => (ErrorKind::EmptyIdentifier, 6..6); "empty pre-release")]
    #[test_case("1.2.3-+b" => (ErrorKind::EmptyIdentifier, 6..7); "empty pre-release before build")]
    #[test_case("1.2.3-a." => (ErrorKind::EmptyIdentifier, 8..8); "trailing dot in pre-release")]
    #[test_case("1.2.3-a..1" => (ErrorKind::EmptyIdentifier, 8..9); "double dot in pre-release")]
    #[test_case("1.2.3-0123" => (ErrorKind::LeadingZero, 6..10); "leading zero pre-release")]
    #[test_case("1.2.3-1.01" => (ErrorKind::LeadingZero, 8..10); "leading zero second pre-release")]
    #[test_case("1.2.3-a_b" => (ErrorKind::InvalidCharacter, 7..8); "underscore in pre-release")]
    #[test_case("1.2.3-αβ" => (ErrorKind::InvalidCharacter, 6..8); "non ascii pre-release")]
    #[test_case("1.2.3+" => (ErrorKind::EmptyIdentifier, 6..6); "empty build")]
    #[test_case("1.2.3+.1" => (ErrorKind::EmptyIdentifier, 6..7); "leading dot in build")]
    #[test_case("1.2.3+a_b" => (ErrorKind::InvalidCharacter, 7..8); "underscore in build")]
    #[test_case("1.2.3+a+b" => (ErrorKind::TrailingData, 7..9); "second build section")]
    #[test_case("1.2.3-a+b+c" => (ErrorKind::TrailingData, 9..11); "second build section after pre-release")]
    fn test_parse_error(input: &str) -> (ErrorKind, std::ops::Range<usize>) {
        let error = parse::<()>(input).unwrap_err();
        (error.error_kind(), error.error_span())
    }

    #[test_case("1.2.3" => Ok(()); "core")]
    #[test_case("1.2.3-a" => Err(ErrorKind::TrailingData); "with pre-release")]
    #[test_case("1.2.3+a" => Err(ErrorKind::TrailingData); "with build")]
    #[test_case("1.2" => Err(ErrorKind::UnexpectedEnd); "no patch")]
    #[test_case("" => Err(ErrorKind::NotANumber); "empty")]
    fn test_parse_core(input: &str) -> Result<(), ErrorKind> {
        parse_core::<()>(input).map_err(|e| e.error_kind())
    }

    #[test_case("alpha" => Ok(vec!["alpha"]))]
    #[test_case("alpha.1.x-y" => Ok(vec!["alpha", "1", "x-y"]))]
    #[test_case("-alpha" => Ok(vec!["-alpha"]); "leading hyphen")]
    #[test_case("alpha..1" => Err(ErrorKind::EmptyIdentifier); "double dot")]
    #[test_case("" => Err(ErrorKind::EmptyIdentifier))]
    #[test_case("1.02" => Err(ErrorKind::LeadingZero))]
    #[test_case("1_2" => Err(ErrorKind::InvalidCharacter))]
    #[test_case("a+b" => Err(ErrorKind::TrailingData))]
    fn test_parse_pre_release(input: &str) -> Result<Vec<&str>, ErrorKind> {
        parse_pre_release::<Parts<'_>>(input)
            .map(|p| p.pre)
            .map_err(|e| e.error_kind())
    }

    #[test_case("build" => Ok(vec!["build"]))]
    #[test_case("7.8.09" => Ok(vec!["7", "8", "09"]))]
    #[test_case("" => Err(ErrorKind::EmptyIdentifier))]
    #[test_case("a_b" => Err(ErrorKind::InvalidCharacter))]
    #[test_case("a+b" => Err(ErrorKind::TrailingData))]
    fn test_parse_build(input: &str) -> Result<Vec<&str>, ErrorKind> {
        parse_build::<Parts<'_>>(input)
            .map(|p| p.build)
            .map_err(|e| e.error_kind())
    }

    const VALID: &[&str] = &[
        "1.0.0-alpha-a.b-c-somethinglong+build.1-aef.1-its-okay",
        "1.0.0-rc.1+build.1",
        "2.0.0-rc.1+build.123",
        "1.2.3-beta",
        "10.2.3-DEV-SNAPSHOT",
        "1.2.3-SNAPSHOT-123",
        "1.0.0",
        "2.0.0",
        "1.1.7",
        "2.0.0+build.1848",
        "2.0.1-alpha.1227",
        "1.0.0-alpha+beta",
        "1.2.3----RC-SNAPSHOT.12.9.1--.12+788",
        "1.2.3----R-S.12.9.1--.12+meta",
        "1.2.3----RC-SNAPSHOT.12.9.1--.12",
        "1.0.0+0.build.1-rc.10000aaa-kk-0.1",
        "99999999999999999999999.999999999999999999.99999999999999999",
        "1.0.0-0A.is.legal",
    ];

    const INVALID: &[&str] = &[
        "1",
        "1.2",
        "1.2.3-0123",
        "1.2.3-0123.0123",
        "1.1.2+.123",
        "+invalid",
        "-invalid",
        "-invalid+invalid",
        "-invalid.01",
        "alpha",
        "alpha.beta",
        "alpha.beta.1",
        "alpha.1",
        "alpha+beta",
        "alpha_beta",
        "alpha.",
        "alpha..",
        "beta",
        "1.0.0-alpha_beta",
        "-alpha.",
        "1.0.0-alpha..",
        "1.0.0-alpha..1",
        "1.0.0-alpha...1",
        "1.0.0-alpha....1",
        "1.0.0-alpha.....1",
        "1.0.0-alpha......1",
        "1.0.0-alpha.......1",
        "01.1.1",
        "1.01.1",
        "1.1.01",
        "1.2.3.DEV",
        "1.2-SNAPSHOT",
        "1.2.31.2.3----RC-SNAPSHOT.12.09.1--..12+788",
        "1.2-RC-SNAPSHOT",
        "-1.0.3-gamma+b7718",
        "+justmeta",
        "9.8.7+meta+meta",
        "9.8.7-whatever+meta+meta",
        "99999999999999999999999.999999999999999999.99999999999999999----RC-SNAPSHOT.12.09.1--------------------------------..12",
    ];

    #[test]
    fn test_valid_versions() {
        for input in VALID {
            assert!(valid(input), "expected {} to be valid", input);
        }
    }

    #[test]
    fn test_invalid_versions() {
        for input in INVALID {
            assert!(!valid(input), "expected {} to be invalid", input);
            assert!(parse::<Parts<'_>>(input).is_err());
        }
    }

    #[test]
    fn test_error_line() {
        let error = parse::<()>("1.2.3-a_b").unwrap_err();
        assert_eq!(
            format!("{:#}", error),
            "Invalid character `_` in pre-release identifier\n|    1.2.3-a_b\n|    ~~~~~~~^\n"
        );
    }

    #[test]
    fn test_owned_error() {
        let owned = {
            let input = String::from("1.2.3-01");
            parse::<()>(&input).unwrap_err().owned()
        };
        assert_eq!(owned.input(), "1.2.3-01");
        assert_eq!(owned.error_kind(), ErrorKind::LeadingZero);
        assert_eq!(owned.erroneous_input(), "01");
        assert_eq!(
            owned.to_string(),
            "The pre-release number `01` must not have leading zeros"
        );
    }
}
