//! Optional TOML configuration shared by the command-line tools
//!
//! ```toml
//! [tokens]
//! on_error = "continue"
//!
//! [verbs]
//! annotate = "verb"
//! ```

use crate::error::ConfigError;
use crate::verb::SlotKind;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// What a session does when a value cannot be decoded or encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// End the session with the error
    #[default]
    Stop,
    /// Print the error and read the next value
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Annotation {
    #[default]
    None,
    Verb,
    Object,
}

impl Annotation {
    pub fn slot_kind(self) -> Option<SlotKind> {
        match self {
            Annotation::None => None,
            Annotation::Verb => Some(SlotKind::VerbSyntax),
            Annotation::Object => Some(SlotKind::ObjectDescription),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub on_error: ErrorPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VerbConfig {
    pub annotate: Annotation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tokens: TokenConfig,
    pub verbs: VerbConfig,
}

/// Parsed command line of a tool
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    pub config_path: Option<PathBuf>,
    pub help: bool,
}

impl CommandLine {
    /// Parse the arguments that follow the program name
    pub fn parse<I, S>(args: I) -> Result<CommandLine, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cmd = CommandLine::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => cmd.help = true,
                "-c" | "--config" => {
                    let path = args.next().ok_or(ConfigError::MissingValue(arg))?;
                    cmd.config_path = Some(PathBuf::from(path));
                }
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }
        Ok(cmd)
    }

    /// Load the config named on the command line, or the defaults
    pub fn config(&self) -> Result<Config, ConfigError> {
        match &self.config_path {
            Some(path) => Config::load(path),
            None => Ok(Config::default()),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        debug!("Loading config: {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Config::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tokens.on_error, ErrorPolicy::Stop);
        assert_eq!(config.verbs.annotate.slot_kind(), None);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            [tokens]
            on_error = "continue"

            [verbs]
            annotate = "object"
            "#,
        )
        .unwrap();
        assert_eq!(config.tokens.on_error, ErrorPolicy::Continue);
        assert_eq!(
            config.verbs.annotate.slot_kind(),
            Some(SlotKind::ObjectDescription)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        assert!(Config::parse("[tokens]\non_error = \"retry\"\n").is_err());
    }

    #[test]
    fn test_command_line() {
        let cmd = CommandLine::parse(["--config", "tools.toml"]).unwrap();
        assert_eq!(cmd.config_path, Some(PathBuf::from("tools.toml")));
        assert!(!cmd.help);

        assert!(CommandLine::parse(["-h"]).unwrap().help);
        assert!(matches!(
            CommandLine::parse(["--config"]),
            Err(ConfigError::MissingValue(_))
        ));
        assert!(matches!(
            CommandLine::parse(["--verbose"]),
            Err(ConfigError::UnknownArgument(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/zvocab.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
