//! Strict semantic version.
//!
//! Companion version struct for the strict_semver_parser parser.
//! Compared to [`semver::Version`], this version:
//!  - Supports version numbers of arbitrary size
//!  - Ignores build metadata for equality, hashing, and ordering
//!  - Can be bumped by a sequence of [`Bump`] steps
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

use std::{
    cmp::Ordering,
    convert::TryFrom,
    fmt::{self, Display, Write},
    hash,
    str::FromStr,
};
use strict_semver_parser::{Error, OwnedError, VersionBuilder};

mod bump;
mod metadata;
mod number;

pub use bump::{Bump, BumpError};
pub use metadata::{Build, PreRelease};
pub use number::{InvalidNumber, Number};

/// Represents a semantic version number.
///
/// Equality, hashing, and ordering ignore the build metadata.
/// Use [`Version::is_identical`] to compare including the build metadata.
#[derive(Debug, Clone)]
pub struct Version {
    /// The major version.
    pub major: Number,
    /// The minor version.
    pub minor: Number,
    /// The patch version.
    pub patch: Number,
    /// The pre-release metadata.
    pub pre: PreRelease,
    /// The build metadata.
    pub build: Build,
}

impl Version {
    /// Constructs a new, empty version
    ///
    /// ## Examples
    ///
    /// ```
    /// # use strict_version::Version;
    /// let version = Version::empty();
    /// assert_eq!(version.to_string(), "0.0.0")
    /// ```
    pub fn empty() -> Self {
        Version {
            major: Number::zero(),
            minor: Number::zero(),
            patch: Number::zero(),
            pre: PreRelease::empty(),
            build: Build::empty(),
        }
    }

    /// Constructs a new version out of the three regular version components
    ///
    /// ## Examples
    ///
    /// ```
    /// # use strict_version::Version;
    /// let version = Version::new(1, 2, 3);
    /// assert_eq!(version.to_string(), "1.2.3")
    /// ```
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major: Number::from(major),
            minor: Number::from(minor),
            patch: Number::from(patch),
            pre: PreRelease::empty(),
            build: Build::empty(),
        }
    }

    /// Parse a string slice into a Version.
    ///
    /// For more information, see [`strict_semver_parser::parse`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_version::Version;
    ///
    /// let version = Version::parse("1.2.3-rc.1+build.42");
    /// assert!(version.is_ok());
    ///
    /// let version = Version::parse("v1.2.3");
    /// assert!(version.is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error<'_>> {
        strict_semver_parser::parse::<Self>(input)
    }

    /// Returns true if this version has pre-release identifiers.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_version::Version;
    /// assert!(Version::parse("1.2.3-rc").unwrap().is_pre_release());
    /// assert!(!Version::parse("1.2.3+rc").unwrap().is_pre_release());
    /// ```
    pub fn is_pre_release(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Returns true if both versions are equal, including their build metadata.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_version::Version;
    /// let a = Version::parse("1.0.0+a").unwrap();
    /// let b = Version::parse("1.0.0+b").unwrap();
    /// assert_eq!(a, b);
    /// assert!(!a.is_identical(&b));
    /// ```
    pub fn is_identical(&self, other: &Self) -> bool {
        self == other && self.build == other.build
    }

    /// Returns true if this version can be written and parsed back into the same version.
    ///
    /// Versions from the parser and from bumping are always valid.
    /// Identifiers can be set without validation though.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_version::{Version, PreRelease};
    /// let mut version = Version::parse("1.2.3-rc.1").unwrap();
    /// assert!(version.is_valid());
    ///
    /// version.pre = vec![String::from("rc_1")].into();
    /// assert!(!version.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        let rendered = self.to_string();
        Version::parse(&rendered).map_or(false, |parsed| parsed.is_identical(self))
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<(u64, u64, u64)> for Version {
    fn from((x, y, z): (u64, u64, u64)) -> Self {
        Version::new(x, y, z)
    }
}

impl From<[u64; 3]> for Version {
    fn from(v: [u64; 3]) -> Self {
        Version::new(v[0], v[1], v[2])
    }
}

impl FromStr for Version {
    type Err = OwnedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s).map_err(|e| e.owned())
    }
}

impl<'input> TryFrom<&'input str> for Version {
    type Error = Error<'input>;

    fn try_from(value: &'input str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = String::with_capacity(16);
        write!(result, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if !self.pre.is_empty() {
            write!(result, "-{}", self.pre)?;
        }
        if !self.build.is_empty() {
            write!(result, "+{}", self.build)?;
        }

        f.pad(result.as_ref())
    }
}

impl PartialEq for Version {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre == other.pre
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| self.pre.cmp(&other.pre))
    }
}

impl hash::Hash for Version {
    fn hash<H: hash::Hasher>(&self, into: &mut H) {
        self.major.hash(into);
        self.minor.hash(into);
        self.patch.hash(into);
        self.pre.hash(into);
    }
}

impl<'input> VersionBuilder<'input> for Version {
    type Out = Self;

    fn new() -> Self {
        Version::empty()
    }

    fn set_major(&mut self, major: &'input str) {
        self.major = Number::from_digits(major);
    }

    fn set_minor(&mut self, minor: &'input str) {
        self.minor = Number::from_digits(minor);
    }

    fn set_patch(&mut self, patch: &'input str) {
        self.patch = Number::from_digits(patch);
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

#[cfg(feature = "serde")]
use serde::{
    de::{self, Deserialize, Deserializer, Visitor},
    ser::{Serialize, Serializer},
};

#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a semantic version string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

/// Errors when converting into a [`semver::Version`].
#[cfg(feature = "semver")]
#[derive(Debug, thiserror::Error)]
pub enum IntoSemverError {
    /// A version number does not fit into a `u64`.
    #[error("The number `{0}` does not fit into a u64")]
    NumberTooLarge(Number),
    /// The identifiers were rejected by semver.
    #[error(transparent)]
    Semver(#[from] semver::Error),
}

#[cfg(feature = "semver")]
impl TryFrom<Version> for semver::Version {
    type Error = IntoSemverError;

    fn try_from(v: Version) -> Result<Self, Self::Error> {
        fn number(n: Number) -> Result<u64, IntoSemverError> {
            n.as_u64().ok_or(IntoSemverError::NumberTooLarge(n))
        }

        let pre = if v.pre.is_empty() {
            semver::Prerelease::EMPTY
        } else {
            semver::Prerelease::new(&v.pre.to_string())?
        };
        let build = if v.build.is_empty() {
            semver::BuildMetadata::EMPTY
        } else {
            semver::BuildMetadata::new(&v.build.to_string())?
        };
        Ok(semver::Version {
            major: number(v.major)?,
            minor: number(v.minor)?,
            patch: number(v.patch)?,
            pre,
            build,
        })
    }
}

#[cfg(feature = "semver")]
impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        fn identifiers<T: std::iter::FromIterator<String> + Default>(s: &str) -> T {
            if s.is_empty() {
                T::default()
            } else {
                s.split('.').map(String::from).collect()
            }
        }

        Version {
            major: Number::from(v.major),
            minor: Number::from(v.minor),
            patch: Number::from(v.patch),
            pre: identifiers(v.pre.as_str()),
            build: identifiers(v.build.as_str()),
        }
    }
}
