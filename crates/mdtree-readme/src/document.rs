//! Assembling the README element tree and writing it out.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mdtree::builder::{body, h2, html, li, ol, p, pre};
use mdtree::{Element, Node};

use crate::badges::{badges, docs_link};
use crate::help::{capture_help, expand_tabs, render_clap_help};
use crate::source::load_lines;
use crate::{cli, GenerateError, ReadmeConfig, Result};

/// Build the README tree.
///
/// `example` and `usage` are embedded verbatim; tab expansion is the
/// caller's job.
pub fn readme_document(config: &ReadmeConfig, example: Option<&str>, usage: &str) -> Node {
    let mut page = body();

    for (i, badge) in badges(&config.badges, &config.project).into_iter().enumerate() {
        if i > 0 {
            page.add_child(" ");
        }
        page.add_child(badge);
    }

    let mut intro = p()
        .with_text("Package ")
        .with_child(docs_link(config));
    if !config.summary.is_empty() {
        intro = intro.with_text(format!(" {}", config.summary));
    }
    page.add_child(intro);

    for paragraph in &config.description {
        page.add_child(p().with_text(paragraph.as_str()));
    }

    if !config.features.is_empty() {
        let items = config.features.iter().map(|f| li().with_text(f.as_str()));
        page.add_child(ol().with_children(items));
    }

    page = match example {
        Some(example) => page.with_children([
            h2().with_text("Example"),
            pre().with_text(example),
            p().with_text("Output"),
            pre().with_text(usage),
        ]),
        None => page.with_children([h2().with_text("Usage"), pre().with_text(usage)]),
    };

    html().with_child(page).into()
}

/// Gather the example and help text, then render the README to `sink`.
///
/// Relative paths in `config` and the help command's working directory are
/// resolved against `base_dir`.
pub fn generate<W: Write>(config: &ReadmeConfig, base_dir: &Path, sink: W) -> Result<()> {
    let example = match &config.example {
        Some(ex) => {
            let lines = load_lines(&base_dir.join(&ex.file), ex.start, ex.count)?;
            Some(expand_tabs(&lines))
        }
        None => None,
    };

    let usage = match &config.help.program {
        Some(program) => capture_help(program, &config.help.args, base_dir)?,
        None => render_clap_help(&mut cli::command()),
    };
    let usage = expand_tabs(&usage);

    let doc = readme_document(config, example.as_deref(), &usage);
    tracing::info!(
        project = %config.project,
        badges = badge_count(&doc),
        example = example.is_some(),
        "rendering readme"
    );

    mdtree::render(&doc, sink)?;
    Ok(())
}

/// Create or truncate `path` and write the README into it.
pub fn write_readme(config: &ReadmeConfig, base_dir: &Path, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| GenerateError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    generate(config, base_dir, BufWriter::new(file))?;
    tracing::info!(path = %path.display(), "wrote readme");
    Ok(())
}

fn badge_count(doc: &Node) -> usize {
    fn body_of(node: &Node) -> Option<&Element> {
        node.as_element()?.element_children().find(|el| el.tag() == "body")
    }
    body_of(doc)
        .map(|b| b.element_children().filter(|el| el.tag() == "a").count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BadgesConfig, ExampleConfig, HelpConfig};
    use mdtree::builder::text;
    use pretty_assertions::assert_eq;

    fn config() -> ReadmeConfig {
        toml::from_str(
            r#"
project = "gregoryv/cmdline"
summary = "provides a way to parse command line arguments"
description = ["This package fixes opinionated issues with using the flag package."]
features = ["Skip pointer variations", "Include required arguments"]

[badges]
codeclimate = "3dbee57c607ffec60702"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_full_document() {
        let markdown = mdtree::to_markdown(&readme_document(
            &config(),
            Some("cli := cmdline.New(os.Args...)\n"),
            "Usage: adduser [OPTIONS]\n",
        ));

        let expected = "\
[![Build Status](https://travis-ci.org/gregoryv/cmdline.svg?branch=master)](https://travis-ci.org/gregoryv/cmdline) \
[![Code coverage](https://codecov.io/gh/gregoryv/cmdline/branch/master/graph/badge.svg)](https://codecov.io/gh/gregoryv/cmdline) \
[![Maintainability](https://api.codeclimate.com/v1/badges/3dbee57c607ffec60702/maintainability)](https://codeclimate.com/github/gregoryv/cmdline/maintainability)

Package [cmdline](https://godoc.org/pkg/github.com/gregoryv/cmdline) provides a way to parse command line arguments

This package fixes opinionated issues with using the flag package.

1. Skip pointer variations
2. Include required arguments

## Example

```
cli := cmdline.New(os.Args...)
```

Output

```
Usage: adduser [OPTIONS]
```
";
        assert_eq!(markdown, expected);
    }

    #[test]
    fn test_without_example_uses_usage_heading() {
        let mut config = config();
        config.badges = BadgesConfig {
            travis: false,
            codecov: false,
            codeclimate: None,
        };
        config.description.clear();
        config.features.clear();
        config.summary.clear();

        let markdown = mdtree::to_markdown(&readme_document(&config, None, "Usage: x\n"));
        assert_eq!(
            markdown,
            "Package [cmdline](https://godoc.org/pkg/github.com/gregoryv/cmdline)\n\n## Usage\n\n```\nUsage: x\n```\n"
        );
    }

    #[test]
    fn test_generate_with_in_process_help() {
        let mut config = config();
        config.help = HelpConfig::default();

        let mut out = Vec::new();
        generate(&config, Path::new("."), &mut out).unwrap();
        let markdown = String::from_utf8(out).unwrap();

        assert!(markdown.contains("## Usage"));
        assert!(markdown.contains("readme-gen"));
        assert!(markdown.contains("--config"));
    }

    #[test]
    fn test_generate_missing_example_is_source_error() {
        let mut config = config();
        config.example = Some(ExampleConfig {
            file: "does-not-exist.rs".into(),
            start: 1,
            count: None,
        });

        let err = generate(&config, Path::new("/nonexistent"), Vec::new()).unwrap_err();
        assert!(matches!(err, GenerateError::SourceRead { .. }));
    }

    #[test]
    fn test_write_readme_into_missing_directory() {
        let err = write_readme(
            &config(),
            Path::new("."),
            Path::new("/nonexistent/dir/README.md"),
        )
        .unwrap_err();
        assert!(matches!(err, GenerateError::CreateOutput { .. }));
    }

    #[test]
    fn test_badge_count() {
        let doc = readme_document(&config(), None, "");
        assert_eq!(badge_count(&doc), 3);
        assert_eq!(badge_count(&text("x")), 0);
    }
}
