//! Assemble strict Semantic Versions from validated fragments.
//!
//! Every fragment is parsed on its own and only merged into the version if it is valid,
//! so a failing fragment leaves the builder as it was.
//!
//! ## Examples
//!
//! ```rust
//! # use strict_semver_builder::{Builder, BuildError};
//! # fn main() -> Result<(), BuildError> {
//! let version = Builder::new()
//!     .core("1.2.3")?
//!     .pre_release("rc.1")?
//!     .build_metadata("cafebabe")?
//!     .build();
//! assert_eq!(version.to_string(), "1.2.3-rc.1+cafebabe");
//! # Ok(())
//! # }
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

use strict_semver_parser::OwnedError;
use strict_version::{Build, PreRelease, Version};

/// Errors when a fragment is not valid.
///
/// The wrapped error has positions relative to the fragment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The core is not a valid `major.minor.patch` triple.
    #[error("Invalid core version: {0}")]
    Core(#[source] OwnedError),
    /// The fragment contains invalid pre-release identifiers.
    #[error("Invalid pre-release: {0}")]
    PreRelease(#[source] OwnedError),
    /// The fragment contains invalid build identifiers.
    #[error("Invalid build metadata: {0}")]
    Build(#[source] OwnedError),
}

/// Incrementally builds a [`Version`].
///
/// The core defaults to `0.0.0`.
/// Empty fragments are ignored.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    version: Version,
}

impl Builder {
    /// Constructs a builder for `0.0.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces major, minor, and patch with the numbers of a `major.minor.patch` fragment.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_builder::Builder;
    /// let mut builder = Builder::new();
    /// assert!(builder.core("1.2").is_err());
    /// assert!(builder.core("1.2.3-rc").is_err());
    /// assert_eq!(builder.build().to_string(), "0.0.0");
    /// ```
    pub fn core(&mut self, core: &str) -> Result<&mut Self, BuildError> {
        if core.is_empty() {
            return Ok(self);
        }
        let parsed = strict_semver_parser::parse_core::<Version>(core)
            .map_err(|e| BuildError::Core(e.owned()))?;
        tracing::trace!(fragment = core, "set core");
        self.version.major = parsed.major;
        self.version.minor = parsed.minor;
        self.version.patch = parsed.patch;
        Ok(self)
    }

    /// Appends the `.` separated identifiers of the fragment to the pre-release.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_builder::Builder;
    /// let mut builder = Builder::new();
    /// builder.pre_release("4.5").unwrap().pre_release("6").unwrap();
    /// assert!(builder.pre_release("7.08").is_err());
    /// assert_eq!(builder.build().to_string(), "0.0.0-4.5.6");
    /// ```
    pub fn pre_release(&mut self, fragment: &str) -> Result<&mut Self, BuildError> {
        if fragment.is_empty() {
            return Ok(self);
        }
        let parsed = strict_semver_parser::parse_pre_release::<PreRelease>(fragment)
            .map_err(|e| BuildError::PreRelease(e.owned()))?;
        tracing::trace!(fragment, "append pre-release");
        self.version.pre.append(parsed);
        Ok(self)
    }

    /// Appends the `.` separated identifiers of the fragment to the build metadata.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_builder::Builder;
    /// let mut builder = Builder::new();
    /// builder.build_metadata("7.08").unwrap();
    /// assert!(builder.build_metadata("a_b").is_err());
    /// assert_eq!(builder.build().to_string(), "0.0.0+7.08");
    /// ```
    pub fn build_metadata(&mut self, fragment: &str) -> Result<&mut Self, BuildError> {
        if fragment.is_empty() {
            return Ok(self);
        }
        let parsed = strict_semver_parser::parse_build::<Build>(fragment)
            .map_err(|e| BuildError::Build(e.owned()))?;
        tracing::trace!(fragment, "append build metadata");
        self.version.build.append(parsed);
        Ok(self)
    }

    /// Returns the version built so far.
    pub fn build(&self) -> Version {
        tracing::debug!(to = %self.version, "built version");
        self.version.clone()
    }
}

/// Builds a version out of an optional core and any number of pre-release and build fragments.
///
/// Fragments are appended in order. The first invalid fragment aborts the build.
///
/// ## Examples
///
/// ```rust
/// let version = strict_semver_builder::build(Some("1.2.3"), &["4.5", "6"], &["7.8", "9"]);
/// assert_eq!(version.unwrap().to_string(), "1.2.3-4.5.6+7.8.9");
///
/// let version = strict_semver_builder::build(None, &["alpha.1"], &[]);
/// assert_eq!(version.unwrap().to_string(), "0.0.0-alpha.1");
/// ```
pub fn build(core: Option<&str>, pre: &[&str], build: &[&str]) -> Result<Version, BuildError> {
    let mut builder = Builder::new();
    if let Some(core) = core {
        builder.core(core)?;
    }
    for fragment in pre {
        builder.pre_release(fragment)?;
    }
    for fragment in build {
        builder.build_metadata(fragment)?;
    }
    Ok(builder.build())
}
