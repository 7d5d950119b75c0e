use crate::error::{Result, ScmVersionError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "scmversion.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".scmversion.toml";

/// Represents the complete configuration for scm-version.
///
/// Contains tag naming, commit marker tokens, and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub markers: MarkersConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_tag_message() -> String {
    "Version {version}".to_string()
}

fn default_major_marker() -> String {
    "#major".to_string()
}

fn default_minor_marker() -> String {
    "#minor".to_string()
}

fn default_true() -> bool {
    true
}

/// How version tags are named, annotated and published.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    /// Text in front of the version in tag names (e.g. "v")
    #[serde(default)]
    pub prefix: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    /// Annotation message; `{version}` is replaced by the new version
    #[serde(default = "default_tag_message")]
    pub message: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            prefix: String::new(),
            remote: default_remote(),
            message: default_tag_message(),
        }
    }
}

impl TagsConfig {
    /// Annotation message for a version
    pub fn tag_message(&self, version: &str) -> String {
        self.message.replace("{version}", version)
    }
}

/// Tokens searched for in commit summaries.
///
/// Matching is case-sensitive substring search.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MarkersConfig {
    #[serde(default = "default_major_marker")]
    pub major: String,

    #[serde(default = "default_minor_marker")]
    pub minor: String,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        MarkersConfig {
            major: default_major_marker(),
            minor: default_minor_marker(),
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Fetch branches and tags from the remote before resolving
    #[serde(default = "default_true")]
    pub fetch: bool,

    /// Push the created tag to the remote
    #[serde(default = "default_true")]
    pub push: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            fetch: true,
            push: true,
        }
    }
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| ScmVersionError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `scmversion.toml` in current directory
/// 3. `.scmversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        Path::new(path).to_path_buf()
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        Path::new(LOCAL_CONFIG_FILE).to_path_buf()
    } else {
        match dirs::config_dir().map(|dir| dir.join(USER_CONFIG_FILE)) {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        }
    };

    tracing::debug!("Loading configuration from {}", path.display());

    let content = fs::read_to_string(&path).map_err(|e| {
        ScmVersionError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tags.prefix, "");
        assert_eq!(config.tags.remote, "origin");
        assert_eq!(config.markers.major, "#major");
        assert_eq!(config.markers.minor, "#minor");
        assert!(config.behavior.fetch);
        assert!(config.behavior.push);
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_partial_section() {
        let config = parse_config("[tags]\nprefix = \"v\"\n").unwrap();
        assert_eq!(config.tags.prefix, "v");
        assert_eq!(config.tags.remote, "origin");
        assert_eq!(config.tags.message, "Version {version}");
    }

    #[test]
    fn test_parse_invalid() {
        let result = parse_config("[tags\nprefix = ");
        assert!(matches!(result, Err(ScmVersionError::Config(_))));
    }

    #[test]
    fn test_tag_message() {
        let tags = TagsConfig {
            message: "Release {version} ({version})".to_string(),
            ..TagsConfig::default()
        };
        assert_eq!(tags.tag_message("1.2.3"), "Release 1.2.3 (1.2.3)");
    }
}
