//! Configuration file parsing and validation

pub mod semver_toml;

pub use semver_toml::{CONFIG_FILE, ColorOption, Config, InitConfig, OutputConfig, VersionConfig};
