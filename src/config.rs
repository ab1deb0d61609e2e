//! Optional TOML configuration, layered under the command-line flags.
//!
//! ```toml
//! target = "src/codes.rs"
//! strict = true
//!
//! [clipboard]
//! program = "wl-paste"
//! args = ["--no-newline"]
//! ```

use crate::source::ClipboardSource;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File rewritten when neither the config nor `--file` names one.
pub const DEFAULT_TARGET: &str = "src/codes.rs";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub target: Option<PathBuf>,
    #[serde(default)]
    pub strict: Option<bool>,
    #[serde(default)]
    pub clipboard: Option<ClipboardConfig>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClipboardConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn target(&self) -> PathBuf {
        self.target
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET))
    }

    pub fn clipboard_source(&self) -> ClipboardSource {
        match &self.clipboard {
            Some(clipboard) => ClipboardSource {
                program: clipboard.program.clone(),
                args: clipboard.args.clone(),
            },
            None => ClipboardSource::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.target(), PathBuf::from("src/codes.rs"));
        assert_eq!(config.clipboard_source(), ClipboardSource::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::parse(
            r#"
target = "lib/codes.rs"
strict = true

[clipboard]
program = "wl-paste"
args = ["--no-newline"]
"#,
        )
        .unwrap();

        assert_eq!(config.target(), PathBuf::from("lib/codes.rs"));
        assert_eq!(config.strict, Some(true));
        assert_eq!(
            config.clipboard_source(),
            ClipboardSource {
                program: "wl-paste".to_string(),
                args: vec!["--no-newline".to_string()],
            }
        );
    }

    #[test]
    fn clipboard_args_default_to_empty() {
        let config = Config::parse("[clipboard]\nprogram = \"pbpaste\"\n").unwrap();
        assert!(config.clipboard_source().args.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("taget = \"typo.rs\"\n").is_err());
    }

    #[test]
    fn load_names_the_missing_file() {
        let err = Config::load(Path::new("no/such/update-codes.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("no/such/update-codes.toml"));
    }
}
