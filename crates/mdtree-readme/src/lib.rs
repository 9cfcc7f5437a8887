//! # mdtree-readme
//!
//! Generate a project README from a small TOML description: CI badges, a
//! documentation link, feature list, a usage example cut from a source file
//! and the help text of a command-line tool, rendered as Markdown by `mdtree`.
//!
//! ```text
//! readme.toml ─▶ example lines ─┐
//!                help capture  ─┼─▶ element tree ─▶ Markdown ─▶ README.md
//!                badges        ─┘
//! ```
//!
//! Generation is all-or-nothing: the first failure is returned and nothing is
//! retried.

pub mod badges;
pub mod cli;
pub mod config;
pub mod document;
pub mod help;
pub mod source;

use std::path::PathBuf;

use mdtree::RenderError;

pub use config::ReadmeConfig;
pub use document::{generate, readme_document, write_readme};

/// Error type for README generation
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("cannot read source lines from {}: {reason}", .path.display())]
    SourceRead { path: PathBuf, reason: String },

    #[error("help command `{command}` failed: {reason}")]
    CommandExecution { command: String, reason: String },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("cannot create {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot load config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
