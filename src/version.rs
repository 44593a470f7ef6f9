#![forbid(unsafe_code)]

//! Semantic version value type
//!
//! [`Version`] parses, renders and mutates `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`
//! strings following Semantic Versioning 2.0.0. Pre-release and build fields
//! are private so every value in circulation satisfies the grammar; the
//! rendered form always parses back to an equal value.

use crate::error::{OverflowError, ParseError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Numeric identifier without leading zeros
const NUMERIC: &str = r"0|[1-9][0-9]*";

/// Pre-release identifier: numeric without leading zeros, or containing a non-digit
const PRERELEASE_IDENT: &str = r"(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*)";

/// Build identifier: any non-empty run of alphanumerics and hyphens
const BUILD_IDENT: &str = r"[0-9A-Za-z-]+";

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^({NUMERIC})\.({NUMERIC})\.({NUMERIC})(?:-({PRERELEASE_IDENT}(?:\.{PRERELEASE_IDENT})*))?(?:\+({BUILD_IDENT}(?:\.{BUILD_IDENT})*))?$"
    );
    Regex::new(&pattern).expect("version grammar is a valid regex")
});

static PRERELEASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{PRERELEASE_IDENT}(?:\.{PRERELEASE_IDENT})*$"))
        .expect("pre-release grammar is a valid regex")
});

static BUILD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{BUILD_IDENT}(?:\.{BUILD_IDENT})*$"))
        .expect("build grammar is a valid regex")
});

/// One of the three numeric version components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Component {
    /// Capitalized name, as used in progress messages ("Bumping Patch")
    pub fn title(&self) -> &'static str {
        match self {
            Component::Major => "Major",
            Component::Minor => "Minor",
            Component::Patch => "Patch",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// Result of [`Version::advance_prerelease`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The pre-release moved to the next stage
    Advanced,
    /// The current pre-release has no successor; carries the current value
    NothingToDo(String),
}

/// A semantic version
///
/// Equality compares every field including build metadata. Use
/// [`Version::precedence`] for SemVer ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "VersionFields")]
pub struct Version {
    #[serde(rename = "Major")]
    major: u64,
    #[serde(rename = "Minor")]
    minor: u64,
    #[serde(rename = "Patch")]
    patch: u64,
    #[serde(rename = "PreRelease")]
    prerelease: String,
    #[serde(rename = "Build")]
    build: String,
}

/// Unvalidated wire shape of a [`Version`]
#[derive(Deserialize)]
struct VersionFields {
    #[serde(rename = "Major")]
    major: u64,
    #[serde(rename = "Minor")]
    minor: u64,
    #[serde(rename = "Patch")]
    patch: u64,
    #[serde(rename = "PreRelease", default)]
    prerelease: String,
    #[serde(rename = "Build", default)]
    build: String,
}

impl TryFrom<VersionFields> for Version {
    type Error = ParseError;

    fn try_from(fields: VersionFields) -> Result<Self, Self::Error> {
        Version::new(fields.major, fields.minor, fields.patch)
            .with_prerelease(&fields.prerelease)?
            .with_build(&fields.build)
    }
}

impl Version {
    /// Creates `major.minor.patch` with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: String::new(),
            build: String::new(),
        }
    }

    /// Parses a version string
    ///
    /// Surrounding whitespace and a single leading `v` or `V` are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Invalid` if the input does not follow the grammar and
    /// `ParseError::Overflow` if a numeric component does not fit in a `u64`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        let candidate = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);

        let caps = VERSION_RE
            .captures(candidate)
            .ok_or_else(|| ParseError::Invalid {
                input: trimmed.to_string(),
            })?;

        let number = |index: usize, component: Component| -> Result<u64, ParseError> {
            let digits = &caps[index];
            digits.parse::<u64>().map_err(|_| ParseError::Overflow {
                component,
                value: digits.to_string(),
            })
        };

        Ok(Version {
            major: number(1, Component::Major)?,
            minor: number(2, Component::Minor)?,
            patch: number(3, Component::Patch)?,
            prerelease: caps.get(4).map_or("", |m| m.as_str()).to_string(),
            build: caps.get(5).map_or("", |m| m.as_str()).to_string(),
        })
    }

    /// Returns `self` with the pre-release replaced
    pub fn with_prerelease(mut self, prerelease: &str) -> Result<Self, ParseError> {
        validate_prerelease(prerelease)?;
        self.prerelease = prerelease.to_string();
        Ok(self)
    }

    /// Returns `self` with the build metadata replaced
    pub fn with_build(mut self, build: &str) -> Result<Self, ParseError> {
        validate_build(build)?;
        self.build = build.to_string();
        Ok(self)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release identifiers, empty when absent
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// Build metadata, empty when absent
    pub fn build(&self) -> &str {
        &self.build
    }

    /// Increments major and resets everything below it
    pub fn bump_major(&mut self) -> Result<(), OverflowError> {
        self.major = checked_increment(self.major, Component::Major)?;
        self.minor = 0;
        self.patch = 0;
        self.clear_labels();
        Ok(())
    }

    /// Increments minor and resets everything below it
    pub fn bump_minor(&mut self) -> Result<(), OverflowError> {
        self.minor = checked_increment(self.minor, Component::Minor)?;
        self.patch = 0;
        self.clear_labels();
        Ok(())
    }

    /// Increments patch and drops pre-release and build metadata
    pub fn bump_patch(&mut self) -> Result<(), OverflowError> {
        self.patch = checked_increment(self.patch, Component::Patch)?;
        self.clear_labels();
        Ok(())
    }

    /// Bumps the given component
    pub fn bump(&mut self, component: Component) -> Result<(), OverflowError> {
        match component {
            Component::Major => self.bump_major(),
            Component::Minor => self.bump_minor(),
            Component::Patch => self.bump_patch(),
        }
    }

    /// Replaces the whole version with the parsed `new_version`
    ///
    /// On error `self` is left untouched.
    pub fn set_full(&mut self, new_version: &str) -> Result<(), ParseError> {
        *self = Version::parse(new_version)?;
        Ok(())
    }

    /// Sets the pre-release and clears build metadata
    ///
    /// An empty `value` removes the pre-release.
    pub fn set_prerelease(&mut self, value: &str) -> Result<(), ParseError> {
        validate_prerelease(value)?;
        self.prerelease = value.to_string();
        self.build.clear();
        Ok(())
    }

    /// Sets build metadata, leaving every other field alone
    ///
    /// An empty `value` removes the build metadata.
    pub fn set_build(&mut self, value: &str) -> Result<(), ParseError> {
        validate_build(value)?;
        self.build = value.to_string();
        Ok(())
    }

    /// Moves the pre-release to its next stage: none → alpha → beta → rc-1.0
    ///
    /// Any other pre-release is left unchanged and reported as
    /// [`Advance::NothingToDo`].
    pub fn advance_prerelease(&mut self) -> Advance {
        let next = match self.prerelease.as_str() {
            "" => "alpha",
            "alpha" => "beta",
            "beta" => "rc-1.0",
            other => return Advance::NothingToDo(other.to_string()),
        };
        self.prerelease = next.to_string();
        self.build.clear();
        Advance::Advanced
    }

    /// Compares two versions by SemVer 2.0.0 precedence
    ///
    /// Build metadata does not participate. A pre-release version has lower
    /// precedence than the associated normal version.
    pub fn precedence(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| compare_prerelease(&self.prerelease, &other.prerelease))
    }

    fn clear_labels(&mut self) {
        self.prerelease.clear();
        self.build.clear();
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

/// Checks a pre-release string; the empty string is accepted
pub fn validate_prerelease(value: &str) -> Result<(), ParseError> {
    if value.is_empty() || PRERELEASE_RE.is_match(value) {
        Ok(())
    } else {
        Err(ParseError::InvalidPrerelease {
            value: value.to_string(),
        })
    }
}

/// Checks a build metadata string; the empty string is accepted
pub fn validate_build(value: &str) -> Result<(), ParseError> {
    if value.is_empty() || BUILD_RE.is_match(value) {
        Ok(())
    } else {
        Err(ParseError::InvalidBuild {
            value: value.to_string(),
        })
    }
}

fn checked_increment(value: u64, component: Component) -> Result<u64, OverflowError> {
    value.checked_add(1).ok_or(OverflowError { component })
}

fn compare_prerelease(left: &str, right: &str) -> Ordering {
    match (left.is_empty(), right.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let mut left = left.split('.');
            let mut right = right.split('.');
            loop {
                match (left.next(), right.next()) {
                    (None, None) => return Ordering::Equal,
                    (None, Some(_)) => return Ordering::Less,
                    (Some(_), None) => return Ordering::Greater,
                    (Some(a), Some(b)) => match compare_identifier(a, b) {
                        Ordering::Equal => continue,
                        ordering => return ordering,
                    },
                }
            }
        }
    }
}

fn compare_identifier(left: &str, right: &str) -> Ordering {
    let is_numeric = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match (is_numeric(left), is_numeric(right)) {
        // No leading zeros, so a longer number is a larger one
        (true, true) => left.len().cmp(&right.len()).then_with(|| left.cmp(right)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => left.cmp(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse_core() {
        let version = v("1.2.3");
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 2);
        assert_eq!(version.patch(), 3);
        assert_eq!(version.prerelease(), "");
        assert_eq!(version.build(), "");
    }

    #[test]
    fn test_parse_prerelease_and_build() {
        let version = v("1.0.0-beta+exp.sha.5114f85");
        assert_eq!(version.prerelease(), "beta");
        assert_eq!(version.build(), "exp.sha.5114f85");

        let version = v("1.0.0-alpha.1");
        assert_eq!(version.prerelease(), "alpha.1");
        assert_eq!(version.build(), "");

        let version = v("1.0.0+20130313144700");
        assert_eq!(version.prerelease(), "");
        assert_eq!(version.build(), "20130313144700");
    }

    #[test]
    fn test_parse_strips_whitespace_and_v_prefix() {
        assert_eq!(v("  1.2.3\n"), Version::new(1, 2, 3));
        assert_eq!(v("v1.2.3"), Version::new(1, 2, 3));
        assert_eq!(v("V1.2.3\r\n"), Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_strips_only_one_v() {
        assert!(Version::parse("vv1.2.3").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = Version::parse("not-a-version").unwrap_err();
        assert_eq!(
            err,
            ParseError::Invalid {
                input: "not-a-version".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_malformed_versions() {
        for input in [
            "",
            "1",
            "1.2",
            "1.2.3.4",
            "01.2.3",
            "1.02.3",
            "1.2.03",
            "-1.2.3",
            "1.2.3-",
            "1.2.3+",
            "1.2.3-01",
            "1.2.3-alpha..1",
            "1.2.3+build..1",
            "1.2.3-al pha",
            "1.2.3+bu_ild",
            "1.2.3 4",
        ] {
            assert!(
                Version::parse(input).is_err(),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        // Arabic-Indic digit one
        assert!(Version::parse("\u{0661}.2.3").is_err());
    }

    #[test]
    fn test_parse_allows_leading_zero_in_alphanumeric_prerelease() {
        assert_eq!(v("1.2.3-0alpha").prerelease(), "0alpha");
        assert_eq!(v("1.2.3-alpha-01").prerelease(), "alpha-01");
        assert_eq!(v("1.2.3-0").prerelease(), "0");
    }

    #[test]
    fn test_parse_allows_leading_zero_in_build() {
        assert_eq!(v("1.2.3+001").build(), "001");
        assert_eq!(v("1.2.3+exp.007").build(), "exp.007");
    }

    #[test]
    fn test_parse_overflow_is_an_error() {
        let err = Version::parse("18446744073709551616.0.0").unwrap_err();
        assert_eq!(
            err,
            ParseError::Overflow {
                component: Component::Major,
                value: "18446744073709551616".to_string()
            }
        );

        // u64::MAX itself fits
        assert_eq!(v("0.0.18446744073709551615").patch(), u64::MAX);
    }

    #[test]
    fn test_render_canonical() {
        assert_eq!(v("1.2.3").to_string(), "1.2.3");
        assert_eq!(v("1.2.3-rc.1").to_string(), "1.2.3-rc.1");
        assert_eq!(v("1.2.3+exp.7").to_string(), "1.2.3+exp.7");
        assert_eq!(v("v1.2.3-rc.1+exp.7").to_string(), "1.2.3-rc.1+exp.7");
    }

    #[test]
    fn test_render_parse_round_trip() {
        for input in [
            "0.0.0",
            "0.1.0",
            "10.20.30",
            "1.0.0-alpha",
            "1.0.0-alpha.beta.1",
            "1.0.0-0.3.7",
            "1.0.0-x.7.z.92",
            "1.0.0-x-y-z.--",
            "1.0.0+21AF26D3----117B344092BD",
            "1.0.0-rc.1+build.1",
            "2.0.0-rc-1.0",
        ] {
            let version = v(input);
            assert_eq!(Version::parse(&version.to_string()), Ok(version));
        }
    }

    #[test]
    fn test_bump_patch_clears_labels() {
        let mut version = v("1.2.3-alpha+build.5");
        version.bump_patch().unwrap();
        assert_eq!(version.to_string(), "1.2.4");
    }

    #[test]
    fn test_bump_minor() {
        let mut version = v("1.2.3");
        version.bump_minor().unwrap();
        assert_eq!(version.to_string(), "1.3.0");
    }

    #[test]
    fn test_bump_major() {
        let mut version = v("1.2.3-rc.1");
        version.bump_major().unwrap();
        assert_eq!(version.to_string(), "2.0.0");
    }

    #[test]
    fn test_bump_dispatch() {
        let mut version = v("0.9.9");
        version.bump(Component::Minor).unwrap();
        assert_eq!(version, Version::new(0, 10, 0));
    }

    #[test]
    fn test_bump_overflow_leaves_version_unchanged() {
        let mut version = Version::new(u64::MAX, 4, 5);
        let err = version.bump_major().unwrap_err();
        assert_eq!(err.component, Component::Major);
        assert_eq!(version, Version::new(u64::MAX, 4, 5));
    }

    #[test]
    fn test_set_full() {
        let mut version = v("1.2.3");
        version.set_full("4.5.6-beta+7").unwrap();
        assert_eq!(version.to_string(), "4.5.6-beta+7");
    }

    #[test]
    fn test_set_full_invalid_keeps_value() {
        let mut version = v("1.2.3");
        assert!(version.set_full("4.5").is_err());
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test]
    fn test_set_prerelease_clears_build() {
        let mut version = v("1.2.3+exp.7");
        version.set_prerelease("rc.1").unwrap();
        assert_eq!(version.to_string(), "1.2.3-rc.1");
    }

    #[test]
    fn test_set_prerelease_empty_clears() {
        let mut version = v("1.2.3-rc.1");
        version.set_prerelease("").unwrap();
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test]
    fn test_set_prerelease_rejects_invalid() {
        let mut version = v("1.2.3");
        let err = version.set_prerelease("01").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidPrerelease {
                value: "01".to_string()
            }
        );
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test]
    fn test_set_build_keeps_prerelease() {
        let mut version = v("1.2.3-beta");
        version.set_build("exp.7").unwrap();
        assert_eq!(version.to_string(), "1.2.3-beta+exp.7");

        version.set_build("").unwrap();
        assert_eq!(version.to_string(), "1.2.3-beta");
    }

    #[test]
    fn test_set_build_rejects_invalid() {
        let mut version = v("1.2.3");
        assert!(version.set_build("has space").is_err());
        assert!(version.set_build("a..b").is_err());
        assert!(version.set_build("b113571\n").is_err());
    }

    #[test]
    fn test_advance_prerelease_stages() {
        let mut version = v("1.2.3+build");
        assert_eq!(version.advance_prerelease(), Advance::Advanced);
        assert_eq!(version.to_string(), "1.2.3-alpha");
        assert_eq!(version.advance_prerelease(), Advance::Advanced);
        assert_eq!(version.to_string(), "1.2.3-beta");
        assert_eq!(version.advance_prerelease(), Advance::Advanced);
        assert_eq!(version.to_string(), "1.2.3-rc-1.0");
    }

    #[test]
    fn test_advance_prerelease_nothing_to_do() {
        let mut version = v("1.2.3-rc-1.0+exp");
        assert_eq!(
            version.advance_prerelease(),
            Advance::NothingToDo("rc-1.0".to_string())
        );
        assert_eq!(version.to_string(), "1.2.3-rc-1.0+exp");
    }

    #[test]
    fn test_precedence_spec_example_chain() {
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
            "1.0.1",
            "1.1.0",
            "2.0.0",
        ];
        for pair in chain.windows(2) {
            assert_eq!(
                v(pair[0]).precedence(&v(pair[1])),
                Ordering::Less,
                "{} < {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_precedence_ignores_build() {
        assert_eq!(
            v("1.0.0+a").precedence(&v("1.0.0+b")),
            Ordering::Equal
        );
        assert_ne!(v("1.0.0+a"), v("1.0.0+b"));
    }

    #[test]
    fn test_serde_json_shape() {
        let json = serde_json::to_string(&v("1.2.3-rc.1+exp")).unwrap();
        assert_eq!(
            json,
            r#"{"Major":1,"Minor":2,"Patch":3,"PreRelease":"rc.1","Build":"exp"}"#
        );
    }

    #[test]
    fn test_serde_rejects_invalid_labels() {
        let json = r#"{"Major":1,"Minor":2,"Patch":3,"PreRelease":"01","Build":""}"#;
        assert!(serde_json::from_str::<Version>(json).is_err());
    }

    #[test]
    fn test_from_str() {
        let version: Version = "2.0.0".parse().unwrap();
        assert_eq!(version, Version::new(2, 0, 0));
    }

    #[test]
    fn test_component_names() {
        assert_eq!(Component::Patch.to_string(), "patch");
        assert_eq!(Component::Major.title(), "Major");
    }
}
