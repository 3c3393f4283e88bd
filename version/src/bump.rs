use crate::{Build, Number, Version};
use strict_semver_parser::OwnedError;

/// A single step of a version bump.
///
/// Multiple steps can be applied in order with [`Version::bump`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Bump {
    /// Increment major, reset minor and patch to 0, and remove the pre-release.
    Major,
    /// Increment minor, reset patch to 0, and remove the pre-release.
    Minor,
    /// Increment patch and remove the pre-release.
    Patch,
    /// Remove the pre-release. Fails if there is none.
    Release,
    /// Increment the last numeric pre-release identifier. Fails if there is none.
    NextPreRelease,
    /// Replace the build metadata with the `.` separated identifiers of the value.
    ///
    /// An empty value removes the build metadata.
    Metadata(String),
    /// Restore the build metadata of the version that is being bumped.
    KeepMetadata,
}

/// Errors when bumping a version.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BumpError {
    /// [`Bump::Release`] was applied to a version without pre-release.
    #[error("There is no pre-release to release")]
    NoPreReleaseToRelease,
    /// [`Bump::NextPreRelease`] was applied to a version without numeric pre-release identifier.
    #[error("There is no numeric pre-release identifier to increment")]
    NoPreReleaseToIncrement,
    /// The value of [`Bump::Metadata`] is not valid build metadata.
    #[error("Invalid build metadata: {0}")]
    InvalidMetadata(#[from] OwnedError),
}

impl Version {
    /// Returns a new version with all bump steps applied in order.
    ///
    /// The build metadata is removed before the first step. Use [`Bump::Metadata`] or
    /// [`Bump::KeepMetadata`] to attach metadata to the result.
    /// Without any steps, the major version is bumped.
    ///
    /// If any step fails, no version is returned and `self` is left untouched.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_version::{Bump, BumpError, Version};
    /// let version = Version::parse("1.2.3-rc.1+cafebabe").unwrap();
    ///
    /// assert_eq!(version.bump(&[]).unwrap().to_string(), "2.0.0");
    /// assert_eq!(version.bump(&[Bump::Minor]).unwrap().to_string(), "1.3.0");
    /// assert_eq!(version.bump(&[Bump::NextPreRelease]).unwrap().to_string(), "1.2.3-rc.2");
    /// assert_eq!(
    ///     version.bump(&[Bump::Patch, Bump::KeepMetadata]).unwrap().to_string(),
    ///     "1.2.4+cafebabe"
    /// );
    /// assert_eq!(
    ///     version.bump(&[Bump::Release, Bump::Release]),
    ///     Err(BumpError::NoPreReleaseToRelease)
    /// );
    /// ```
    pub fn bump(&self, steps: &[Bump]) -> Result<Version, BumpError> {
        let default = [Bump::Major];
        let steps = if steps.is_empty() { &default[..] } else { steps };

        let mut next = self.without_build();
        for step in steps {
            step.apply(&mut next, self).map_err(|error| {
                tracing::debug!(from = %self, operation = ?step, %error, "bump failed");
                error
            })?;
            tracing::trace!(operation = ?step, to = %next, "applied bump step");
        }

        tracing::debug!(from = %self, to = %next, "bumped version");
        Ok(next)
    }

    /// Returns a new version with the major version bumped.
    ///
    /// Sets minor and patch to 0, removes pre-release and build identifiers.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_version::Version;
    /// let version = Version::parse("1.2.3-pre+build").unwrap();
    /// assert_eq!(version.bumped_major().to_string(), "2.0.0");
    /// ```
    pub fn bumped_major(&self) -> Version {
        let mut next = self.without_build();
        next.increment_major();
        next
    }

    /// Returns a new version with the minor version bumped.
    ///
    /// Sets patch to 0, removes pre-release and build identifiers.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_version::Version;
    /// let version = Version::parse("1.2.3-pre+build").unwrap();
    /// assert_eq!(version.bumped_minor().to_string(), "1.3.0");
    /// ```
    pub fn bumped_minor(&self) -> Version {
        let mut next = self.without_build();
        next.increment_minor();
        next
    }

    /// Returns a new version with the patch version bumped.
    ///
    /// Removes pre-release and build identifiers.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_version::Version;
    /// let version = Version::parse("1.2.3-pre+build").unwrap();
    /// assert_eq!(version.bumped_patch().to_string(), "1.2.4");
    /// ```
    pub fn bumped_patch(&self) -> Version {
        let mut next = self.without_build();
        next.increment_patch();
        next
    }

    /// Returns the release of this pre-release version, without build identifiers.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_version::Version;
    /// let version = Version::parse("1.2.3-pre+build").unwrap();
    /// assert_eq!(version.released().unwrap().to_string(), "1.2.3");
    ///
    /// let version = Version::parse("1.2.3+build").unwrap();
    /// assert!(version.released().is_err());
    /// ```
    pub fn released(&self) -> Result<Version, BumpError> {
        self.bump(&[Bump::Release])
    }

    /// Returns the next pre-release of this version, without build identifiers.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_version::Version;
    /// let version = Version::parse("1.2.3-alpha.1.72+build").unwrap();
    /// assert_eq!(version.bumped_pre_release().unwrap().to_string(), "1.2.3-alpha.1.73");
    ///
    /// let version = Version::parse("1.2.3-alpha").unwrap();
    /// assert!(version.bumped_pre_release().is_err());
    /// ```
    pub fn bumped_pre_release(&self) -> Result<Version, BumpError> {
        self.bump(&[Bump::NextPreRelease])
    }

    fn without_build(&self) -> Version {
        Version {
            major: self.major.clone(),
            minor: self.minor.clone(),
            patch: self.patch.clone(),
            pre: self.pre.clone(),
            build: Build::empty(),
        }
    }

    fn increment_major(&mut self) {
        self.major = self.major.incremented();
        self.minor = Number::zero();
        self.patch = Number::zero();
        self.pre.clear();
    }

    fn increment_minor(&mut self) {
        self.minor = self.minor.incremented();
        self.patch = Number::zero();
        self.pre.clear();
    }

    fn increment_patch(&mut self) {
        self.patch = self.patch.incremented();
        self.pre.clear();
    }
}

impl Bump {
    fn apply(&self, version: &mut Version, original: &Version) -> Result<(), BumpError> {
        match self {
            Bump::Major => version.increment_major(),
            Bump::Minor => version.increment_minor(),
            Bump::Patch => version.increment_patch(),
            Bump::Release => {
                if version.pre.is_empty() {
                    return Err(BumpError::NoPreReleaseToRelease);
                }
                version.pre.clear();
            }
            Bump::NextPreRelease => {
                version.pre = version
                    .pre
                    .incremented()
                    .ok_or(BumpError::NoPreReleaseToIncrement)?;
            }
            Bump::Metadata(value) if value.is_empty() => version.build.clear(),
            Bump::Metadata(value) => {
                version.build = strict_semver_parser::parse_build::<Build>(value)
                    .map_err(|e| e.owned())?;
            }
            Bump::KeepMetadata => version.build = original.build.clone(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn bump(input: &str, steps: &[Bump]) -> Result<String, BumpError> {
        Version::parse(input).unwrap().bump(steps).map(|v| v.to_string())
    }

    #[test_case("1.0.0", &[] => Ok(String::from("2.0.0")); "default from major")]
    #[test_case("1.2.0", &[] => Ok(String::from("2.0.0")); "default from minor")]
    #[test_case("1.2.3", &[] => Ok(String::from("2.0.0")); "default from patch")]
    #[test_case("1.2.3", &[Bump::Major] => Ok(String::from("2.0.0")); "major")]
    #[test_case("1.2.3", &[Bump::Minor] => Ok(String::from("1.3.0")); "minor")]
    #[test_case("1.2.3", &[Bump::Patch] => Ok(String::from("1.2.4")); "patch")]
    #[test_case("1.2.3-rc.1", &[Bump::Minor] => Ok(String::from("1.3.0")); "minor clears pre-release")]
    #[test_case("1.2.3-rc.1", &[Bump::Release] => Ok(String::from("1.2.3")); "release")]
    #[test_case("1.2.3", &[Bump::Release] => Err(BumpError::NoPreReleaseToRelease); "release without pre-release")]
    #[test_case("1.2.3-rc.1", &[Bump::NextPreRelease] => Ok(String::from("1.2.3-rc.2")); "next pre-release")]
    #[test_case("1.2.3-alpha.1.72", &[Bump::NextPreRelease] => Ok(String::from("1.2.3-alpha.1.73")); "only last numeric")]
    #[test_case("1.2.3-rc", &[Bump::NextPreRelease] => Err(BumpError::NoPreReleaseToIncrement); "no numeric pre-release")]
    #[test_case("1.2.3", &[Bump::NextPreRelease] => Err(BumpError::NoPreReleaseToIncrement); "no pre-release")]
    #[test_case("4.3.2+hello", &[] => Ok(String::from("5.0.0")); "clears metadata")]
    #[test_case("1.0.0+test", &[Bump::Major, Bump::Metadata(String::from("other"))] => Ok(String::from("2.0.0+other")); "attach metadata")]
    #[test_case("1.0.0+test", &[Bump::Metadata(String::from("other")), Bump::Major] => Ok(String::from("2.0.0+other")); "metadata before major")]
    #[test_case("1.0.0+test", &[Bump::Metadata(String::from("a")), Bump::Metadata(String::from("b.c"))] => Ok(String::from("1.0.0+b.c")); "last metadata wins")]
    #[test_case("1.0.0+test", &[Bump::Metadata(String::new())] => Ok(String::from("1.0.0")); "empty metadata")]
    #[test_case("1.0.0+test", &[Bump::Patch, Bump::KeepMetadata] => Ok(String::from("1.0.1+test")); "keep metadata")]
    #[test_case("1.0.0+test", &[Bump::KeepMetadata, Bump::Metadata(String::from("x"))] => Ok(String::from("1.0.0+x")); "metadata after keep")]
    #[test_case("1.2.3-rc.1", &[Bump::Release, Bump::Patch] => Ok(String::from("1.2.4")); "steps are sequential")]
    #[test_case("1.2.3-rc.9", &[Bump::NextPreRelease, Bump::NextPreRelease] => Ok(String::from("1.2.3-rc.11")); "repeated next pre-release")]
    #[test_case("99999999999999999999.0.0", &[Bump::Major] => Ok(String::from("100000000000000000000.0.0")); "huge major")]
    #[test_case("1.2.18446744073709551615", &[Bump::Patch] => Ok(String::from("1.2.18446744073709551616")); "patch beyond u64")]
    fn test_bump(input: &str, steps: &[Bump]) -> Result<String, BumpError> {
        bump(input, steps)
    }

    #[test_case("a_b"; "invalid character")]
    #[test_case("a..b"; "empty identifier")]
    #[test_case("a+b"; "plus")]
    fn test_bump_invalid_metadata(metadata: &str) {
        let version = Version::parse("1.0.0+test").unwrap();
        let error = version
            .bump(&[Bump::Major, Bump::Metadata(String::from(metadata))])
            .unwrap_err();
        assert!(matches!(error, BumpError::InvalidMetadata(_)));
        // the original is still available and untouched
        assert_eq!(version.to_string(), "1.0.0+test");
    }

    #[test]
    fn test_bump_error_source() {
        use std::error::Error as _;

        let error = bump("1.0.0", &[Bump::Metadata(String::from("a_b"))]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid build metadata: Invalid character `_` in build identifier"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_bumped_helpers_equal_bump() {
        let version = Version::parse("1.2.3-rc.1+build").unwrap();
        assert!(version
            .bumped_major()
            .is_identical(&version.bump(&[Bump::Major]).unwrap()));
        assert!(version
            .bumped_minor()
            .is_identical(&version.bump(&[Bump::Minor]).unwrap()));
        assert!(version
            .bumped_patch()
            .is_identical(&version.bump(&[Bump::Patch]).unwrap()));
        assert!(version
            .released()
            .unwrap()
            .is_identical(&version.bump(&[Bump::Release]).unwrap()));
        assert!(version
            .bumped_pre_release()
            .unwrap()
            .is_identical(&version.bump(&[Bump::NextPreRelease]).unwrap()));
    }
}
