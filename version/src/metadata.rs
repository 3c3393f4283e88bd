use crate::number::{cmp_digits, increment_digits};
use std::{cmp::Ordering, fmt, iter::FromIterator, ops::Deref};
use strict_semver_parser::VersionBuilder;

macro_rules! identifiers {
    ($name:ident) => {
        impl $name {
            /// Constructs an empty segment.
            pub const fn empty() -> Self {
                Self {
                    identifiers: Vec::new(),
                }
            }

            /// Returns true if the segment has no identifiers.
            pub fn is_empty(&self) -> bool {
                self.identifiers.is_empty()
            }

            /// Returns an iterator over the identifiers.
            pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
                self.identifiers.iter().map(String::as_str)
            }

            /// Removes all identifiers.
            pub fn clear(&mut self) {
                self.identifiers.clear();
            }

            /// Adds an identifier to the end, without validating it.
            pub fn push(&mut self, identifier: &str) {
                self.identifiers.push(String::from(identifier));
            }

            /// Moves all identifiers of `other` to the end of this segment.
            pub fn append(&mut self, other: Self) {
                self.identifiers.extend(other.identifiers);
            }
        }

        impl Deref for $name {
            type Target = [String];

            fn deref(&self) -> &Self::Target {
                &self.identifiers[..]
            }
        }

        impl AsRef<[String]> for $name {
            fn as_ref(&self) -> &[String] {
                &self.identifiers[..]
            }
        }

        impl FromIterator<String> for $name {
            fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
                Self {
                    identifiers: iter.into_iter().collect(),
                }
            }
        }

        impl<'a> FromIterator<&'a str> for $name {
            fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
                iter.into_iter().map(String::from).collect()
            }
        }

        /// No validation happens here, see [`crate::Version::is_valid`].
        impl From<Vec<String>> for $name {
            fn from(identifiers: Vec<String>) -> Self {
                Self { identifiers }
            }
        }

        impl From<$name> for Vec<String> {
            fn from(segment: $name) -> Self {
                segment.identifiers
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.identifiers.join("."))
            }
        }
    };
}

/// The pre-release segment of a semantic Version.
///
/// Precedence follows the semver rules:
/// A version without pre-release identifiers has a higher precedence than one with identifiers.
/// Identifiers are compared from left to right. Numeric identifiers compare by value
/// and have a lower precedence than alphanumeric ones, which compare in ASCII order.
/// A larger set of identifiers has a higher precedence if all preceding ones are equal.
///
/// ## Examples
///
/// ```rust
/// # use strict_version::PreRelease;
/// let alpha: PreRelease = vec!["alpha"].into_iter().collect();
/// let alpha_1: PreRelease = vec!["alpha", "1"].into_iter().collect();
/// let beta_11: PreRelease = vec!["beta", "11"].into_iter().collect();
/// let beta_2: PreRelease = vec!["beta", "2"].into_iter().collect();
///
/// assert!(alpha < alpha_1);
/// assert!(beta_2 < beta_11);
/// assert!(beta_11 < PreRelease::empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PreRelease {
    identifiers: Vec<String>,
}

identifiers!(PreRelease);

impl PreRelease {
    /// Returns a copy where the last numeric identifier is incremented by one.
    ///
    /// Returns `None` if there is no numeric identifier.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_version::PreRelease;
    /// let pre: PreRelease = vec!["alpha", "1", "9"].into_iter().collect();
    /// assert_eq!(pre.incremented().unwrap().to_string(), "alpha.1.10");
    ///
    /// let pre: PreRelease = vec!["alpha", "beta"].into_iter().collect();
    /// assert_eq!(pre.incremented(), None);
    /// ```
    pub fn incremented(&self) -> Option<Self> {
        let index = self.identifiers.iter().rposition(|i| is_numeric(i))?;
        let mut next = self.clone();
        next.identifiers[index] = increment_digits(&self.identifiers[index]);
        Some(next)
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self
                .identifiers
                .iter()
                .zip(other.identifiers.iter())
                .map(|(lhs, rhs)| cmp_identifier(lhs, rhs))
                .find(|c| *c != Ordering::Equal)
                .unwrap_or_else(|| self.identifiers.len().cmp(&other.identifiers.len())),
        }
    }
}

fn cmp_identifier(lhs: &str, rhs: &str) -> Ordering {
    match (is_numeric(lhs), is_numeric(rhs)) {
        (true, true) => cmp_digits(lhs, rhs),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => lhs.cmp(rhs),
    }
}

fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

impl<'input> VersionBuilder<'input> for PreRelease {
    type Out = Self;

    fn new() -> Self {
        Self::empty()
    }

    fn add_pre_release(&mut self, pre_release: &'input str) {
        self.push(pre_release);
    }

    fn build(self) -> Self::Out {
        self
    }
}

/// The build metadata of a semantic Version.
///
/// Build metadata does not participate in precedence, which is why this type is not ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Build {
    identifiers: Vec<String>,
}

identifiers!(Build);

impl<'input> VersionBuilder<'input> for Build {
    type Out = Self;

    fn new() -> Self {
        Self::empty()
    }

    fn add_build(&mut self, build: &'input str) {
        self.push(build);
    }

    fn build(self) -> Self::Out {
        self
    }
}
