//! Configuration file support
//!
//! Loads the project description from `readme.toml`.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::{GenerateError, Result};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "readme.toml";

/// Default base URL of the documentation link
pub const DEFAULT_DOCS_BASE: &str = "https://godoc.org/pkg/github.com";

static PROJECT_SLUG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$").expect("project slug pattern compiles")
});

static BADGE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("badge id pattern compiles"));

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadmeConfig {
    /// Repository slug, `owner/name`
    pub project: String,
    /// Sentence completing "Package <name> ..."
    #[serde(default)]
    pub summary: String,
    /// Paragraphs following the summary
    #[serde(default)]
    pub description: Vec<String>,
    /// Items of the numbered feature list
    #[serde(default)]
    pub features: Vec<String>,
    /// Output file, relative to the configuration file
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Base URL the documentation link is built from
    #[serde(default = "default_docs_base")]
    pub docs_base: String,
    #[serde(default)]
    pub badges: BadgesConfig,
    /// Usage example cut from a source file
    #[serde(default)]
    pub example: Option<ExampleConfig>,
    #[serde(default)]
    pub help: HelpConfig,
}

/// Badge selection
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgesConfig {
    pub travis: bool,
    pub codecov: bool,
    /// Code Climate badge id; no badge when absent
    pub codeclimate: Option<String>,
}

impl Default for BadgesConfig {
    fn default() -> Self {
        Self {
            travis: true,
            codecov: true,
            codeclimate: None,
        }
    }
}

/// Line range of the usage example
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExampleConfig {
    /// Source file, relative to the configuration file
    pub file: PathBuf,
    /// First line, 1-based
    pub start: usize,
    /// Number of lines; to the end of the file when absent
    #[serde(default)]
    pub count: Option<usize>,
}

/// Command whose help output is embedded
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelpConfig {
    /// Program to run; readme-gen's own help is rendered in-process when absent
    pub program: Option<String>,
    pub args: Vec<String>,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            program: None,
            args: vec!["-h".to_string()],
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("README.md")
}

fn default_docs_base() -> String {
    DEFAULT_DOCS_BASE.to_string()
}

impl ReadmeConfig {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GenerateError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| GenerateError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), project = %config.project, "loaded config");
        Ok(config)
    }

    /// Check values that the TOML schema cannot express
    pub fn validate(&self) -> Result<()> {
        if !PROJECT_SLUG.is_match(&self.project) {
            return Err(GenerateError::InvalidConfig(format!(
                "project must look like `owner/name`, got {:?}",
                self.project
            )));
        }

        if let Some(id) = &self.badges.codeclimate {
            if !BADGE_ID.is_match(id) {
                return Err(GenerateError::InvalidConfig(format!(
                    "codeclimate badge id must be alphanumeric, got {id:?}"
                )));
            }
        }

        if let Some(example) = &self.example {
            if example.start == 0 {
                return Err(GenerateError::InvalidConfig(
                    "example.start is 1-based and must not be 0".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Last segment of the project slug
    pub fn name(&self) -> &str {
        self.project.rsplit('/').next().unwrap_or(&self.project)
    }
}
