//! Configuration file support for repograde.
//!
//! Loads settings from `~/.repograde/config.toml` with the following precedence:
//! CLI arguments > Environment variables > Config file
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.repograde/config.toml
//!
//! [analysis]
//! # Technology table used instead of the built-in one
//! technology_table = "/path/to/technologies.toml"
//!
//! [output]
//! # "json" or "summary"
//! format = "summary"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment fallback for `--table`.
pub const TECHNOLOGY_TABLE_ENV: &str = "REPOGRADE_TECHNOLOGY_TABLE";
/// Environment fallback for `--format`.
pub const FORMAT_ENV: &str = "REPOGRADE_FORMAT";

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings for the `analyze` and `table` commands.
#[derive(Debug, Default, Deserialize)]
pub struct AnalysisConfig {
    /// Path to a custom technology table.
    pub technology_table: Option<String>,
}

/// Output settings.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Default output format.
    pub format: Option<String>,
}

/// Returns the path to the config file (~/.repograde/config.toml).
fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".repograde").join("config.toml"))
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Err` if the file exists but fails to parse.
pub fn load_config() -> Result<Option<Config>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!(
        target: "repograde::config",
        path = %path.display(),
        "Loaded configuration file"
    );

    Ok(Some(config))
}

/// Applies configuration file settings to environment variables.
///
/// Only sets variables that are not already set, so clap's `env` fallbacks
/// resolve CLI > ENV > config file. Must run before parsing arguments.
pub fn apply_config_to_env() {
    match load_config() {
        Ok(Some(config)) => apply(&config),
        Ok(None) => {}
        Err(e) => tracing::warn!(
            target: "repograde::config",
            error = %e,
            "Ignoring unreadable configuration file"
        ),
    }
}

fn apply(config: &Config) {
    fn set_if_absent(key: &str, value: &str) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
            tracing::trace!(
                target: "repograde::config",
                key,
                "Set environment variable from config file"
            );
        }
    }

    if let Some(ref table) = config.analysis.technology_table {
        set_if_absent(TECHNOLOGY_TABLE_ENV, table);
    }

    if let Some(ref format) = config.output.format {
        set_if_absent(FORMAT_ENV, format);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repograde_test_utils::{env_guard, set_env_var, TestFixture};

    #[test]
    fn config_path_returns_expected_location() {
        let path = config_path().unwrap();
        assert!(path.ends_with(".repograde/config.toml"));
    }

    #[test]
    fn parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.analysis.technology_table.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [analysis]
            technology_table = "/etc/repograde/techs.toml"

            [output]
            format = "summary"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.analysis.technology_table.as_deref(),
            Some("/etc/repograde/techs.toml")
        );
        assert_eq!(config.output.format.as_deref(), Some("summary"));
    }

    #[test]
    fn missing_config_file_is_none() {
        let _lock = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _home = fixture.home_guard();
        assert!(load_config().unwrap().is_none());
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let _lock = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _home = fixture.home_guard();
        fixture.write_config("[output\nformat = ").unwrap();
        let err = load_config().unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn environment_wins_over_config_file() {
        let _lock = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _home = fixture.home_guard();
        fixture
            .write_config(
                "[output]\nformat = \"summary\"\n[analysis]\ntechnology_table = \"t.toml\"\n",
            )
            .unwrap();
        let _format = set_env_var(FORMAT_ENV, Some("json"));
        let _table = set_env_var(TECHNOLOGY_TABLE_ENV, None);

        apply_config_to_env();

        assert_eq!(std::env::var(FORMAT_ENV).unwrap(), "json");
        assert_eq!(std::env::var(TECHNOLOGY_TABLE_ENV).unwrap(), "t.toml");
    }
}
