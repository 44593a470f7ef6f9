//! Library-level tests for the version type, output views and store
//!
//! NOTE: One test changes the current directory and uses the serial_test
//! attribute so it does not interfere with others.

#[macro_use]
mod common;

use common::TestResult;
use semver_cli::cli::common::resolve_dir;
use semver_cli::output::{self, OutputFormat};
use semver_cli::{Advance, Component, ParseError, Store, Version};
use serial_test::serial;
use std::cmp::Ordering;
use tempfile::TempDir;

const SAMPLES: &[&str] = &[
    "0.0.0",
    "0.1.0",
    "1.2.3",
    "10.20.30",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-0.3.7",
    "1.0.0-x.7.z.92",
    "1.0.0-x-y-z.--",
    "1.0.0-alpha+001",
    "1.0.0+20130313144700",
    "1.0.0-beta+exp.sha.5114f85",
    "1.0.0+21AF26D3----117B344092BD",
    "1.0.0-rc-1.0",
    "1.0.0-00a",
    "18446744073709551615.0.0",
];

#[test]
fn test_render_parse_round_trip() -> TestResult {
    for sample in SAMPLES {
        let version = Version::parse(sample)?;
        assert_eq!(version.to_string(), *sample);
        assert_eq!(Version::parse(&version.to_string())?, version);
    }
    Ok(())
}

#[test]
fn test_json_round_trip() -> TestResult {
    for sample in SAMPLES {
        let version = Version::parse(sample)?;
        let json = output::format(&version, OutputFormat::Json);
        let decoded: Version = serde_json::from_str(&json)?;
        assert_eq!(decoded, version);
    }
    Ok(())
}

#[test]
fn test_plain_format_is_idempotent() -> TestResult {
    let version = Version::parse("4.5.6-rc.2+b.9")?;
    assert_eq!(
        output::format(&version, OutputFormat::Plain),
        output::format(&version, OutputFormat::Plain)
    );
    Ok(())
}

#[test]
fn test_rejects_invalid_versions() {
    let invalid = [
        "not-a-version",
        "",
        "1",
        "1.2",
        "1.2.3.4",
        "01.2.3",
        "1.02.3",
        "1.2.3-",
        "1.2.3+",
        "1.2.3-01",
        "1.2.3-alpha..1",
        "1.2.3+exp..1",
        "vv1.2.3",
        "1.2.3 beta",
    ];
    for input in invalid {
        assert!(Version::parse(input).is_err(), "{input:?} should not parse");
    }
}

#[test]
fn test_overflow_is_an_error() {
    let err = Version::parse("18446744073709551616.0.0").unwrap_err();
    assert!(matches!(err, ParseError::Overflow { component: Component::Major, .. }));
}

#[test]
fn test_bump_rules() -> TestResult {
    let mut version = Version::parse("1.2.3-alpha+exp")?;
    version.bump_patch()?;
    assert_eq!(version.to_string(), "1.2.4");

    let mut version = Version::parse("1.2.3")?;
    version.bump_minor()?;
    assert_eq!(version.to_string(), "1.3.0");

    let mut version = Version::parse("1.2.3")?;
    version.bump_major()?;
    assert_eq!(version.to_string(), "2.0.0");
    Ok(())
}

#[test]
fn test_clear_then_advance_from_beta() -> TestResult {
    let mut version = Version::parse("1.0.0-beta")?;
    version.set_prerelease("beta")?;
    assert_eq!(version.advance_prerelease(), Advance::Advanced);
    assert_eq!(version.to_string(), "1.0.0-rc-1.0");

    version.set_prerelease("")?;
    assert_eq!(version.advance_prerelease(), Advance::Advanced);
    assert_eq!(version.prerelease(), "alpha");
    Ok(())
}

#[test]
fn test_build_set_and_clear() -> TestResult {
    let mut version = Version::parse("1.2.3")?;
    version.set_build("exp.7")?;
    assert_eq!(version.to_string(), "1.2.3+exp.7");
    version.set_build("")?;
    assert_eq!(version.to_string(), "1.2.3");
    Ok(())
}

#[test]
fn test_precedence_ignores_build() -> TestResult {
    let ordered = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
    ];
    for pair in ordered.windows(2) {
        let lower = Version::parse(pair[0])?;
        let higher = Version::parse(pair[1])?;
        assert_eq!(lower.precedence(&higher), Ordering::Less, "{pair:?}");
    }

    let a = Version::parse("1.0.0+a")?;
    let b = Version::parse("1.0.0+b")?;
    assert_eq!(a.precedence(&b), Ordering::Equal);
    assert_ne!(a, b);
    Ok(())
}

#[test]
fn test_store_round_trip() -> TestResult {
    let temp_dir = TempDir::new()?;
    let store = Store::in_dir(temp_dir.path());
    let version = Version::parse("7.8.9-rc.1+meta")?;

    store.write(&version)?;
    assert_eq!(assert_some!(store.read()?), version);
    Ok(())
}

#[test]
#[serial]
fn test_resolve_dir_defaults_to_current_dir() {
    let temp_dir = assert_ok!(TempDir::new());
    let original_dir = assert_ok!(std::env::current_dir());

    assert_ok!(std::env::set_current_dir(temp_dir.path()));
    let resolved = resolve_dir(None);
    assert_ok!(std::env::set_current_dir(&original_dir));

    let resolved = assert_ok!(resolved);
    assert_eq!(
        assert_ok!(resolved.canonicalize()),
        assert_ok!(temp_dir.path().canonicalize())
    );
}
