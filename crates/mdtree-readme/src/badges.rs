//! Badge and documentation links for the README header.

use mdtree::builder::{a, img};
use mdtree::Element;

use crate::config::{BadgesConfig, ReadmeConfig};

const TRAVIS_BASE: &str = "https://travis-ci.org";
const CODECOV_BASE: &str = "https://codecov.io/gh";
const CODECLIMATE_BASE: &str = "https://codeclimate.com/github";
const CODECLIMATE_API: &str = "https://api.codeclimate.com/v1";

/// Join URL segments with exactly one `/` between them.
///
/// Unlike filesystem path cleaning this leaves the scheme's `//` alone.
pub fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.trim_matches('/');
        if !segment.is_empty() {
            url.push('/');
            url.push_str(segment);
        }
    }
    url
}

fn badge(href: String, src: String, alt: &str) -> Element {
    a(&href).with_child(img(&src, alt))
}

pub fn travis_badge(project: &str) -> Element {
    badge(
        join_url(TRAVIS_BASE, &[project]),
        join_url(TRAVIS_BASE, &[&format!("{project}.svg?branch=master")]),
        "Build Status",
    )
}

pub fn codecov_badge(project: &str) -> Element {
    badge(
        join_url(CODECOV_BASE, &[project]),
        join_url(CODECOV_BASE, &[project, "branch/master/graph/badge.svg"]),
        "Code coverage",
    )
}

pub fn codeclimate_badge(project: &str, badge_id: &str) -> Element {
    badge(
        join_url(CODECLIMATE_BASE, &[project, "maintainability"]),
        join_url(CODECLIMATE_API, &["badges", badge_id, "maintainability"]),
        "Maintainability",
    )
}

/// Link to the package documentation, labelled with the project name
pub fn docs_link(config: &ReadmeConfig) -> Element {
    a(&join_url(&config.docs_base, &[config.project.as_str()])).with_text(config.name())
}

/// The configured badges, in display order
pub fn badges(config: &BadgesConfig, project: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if config.travis {
        out.push(travis_badge(project));
    }
    if config.codecov {
        out.push(codecov_badge(project));
    }
    if let Some(id) = &config.codeclimate {
        out.push(codeclimate_badge(project, id));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdtree::{to_markdown, Node};

    fn markdown(el: Element) -> String {
        to_markdown(&Node::from(el))
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://a.io/", &["/x/y/", "z"]), "https://a.io/x/y/z");
        assert_eq!(join_url("https://a.io", &["", "z"]), "https://a.io/z");
        assert_eq!(join_url("https://a.io", &[]), "https://a.io");
    }

    #[test]
    fn test_travis_badge() {
        assert_eq!(
            markdown(travis_badge("gregoryv/cmdline")),
            "[![Build Status](https://travis-ci.org/gregoryv/cmdline.svg?branch=master)](https://travis-ci.org/gregoryv/cmdline)\n"
        );
    }

    #[test]
    fn test_codecov_badge() {
        let el = codecov_badge("x/y");
        assert_eq!(el.attr("href"), Some("https://codecov.io/gh/x/y"));
        let image = el.element_children().next().unwrap();
        assert_eq!(
            image.attr("src"),
            Some("https://codecov.io/gh/x/y/branch/master/graph/badge.svg")
        );
        assert_eq!(image.attr("alt"), Some("Code coverage"));
    }

    #[test]
    fn test_codeclimate_badge() {
        assert_eq!(
            markdown(codeclimate_badge("gregoryv/cmdline", "3dbee57c607ffec60702")),
            "[![Maintainability](https://api.codeclimate.com/v1/badges/3dbee57c607ffec60702/maintainability)](https://codeclimate.com/github/gregoryv/cmdline/maintainability)\n"
        );
    }

    #[test]
    fn test_docs_link() {
        let config: ReadmeConfig = toml::from_str(r#"project = "gregoryv/cmdline""#).unwrap();
        assert_eq!(
            markdown(docs_link(&config)),
            "[cmdline](https://godoc.org/pkg/github.com/gregoryv/cmdline)\n"
        );

        let config: ReadmeConfig = toml::from_str(
            "project = \"x/y\"\ndocs_base = \"https://docs.rs/\"\n",
        )
        .unwrap();
        assert_eq!(markdown(docs_link(&config)), "[y](https://docs.rs/x/y)\n");
    }

    #[test]
    fn test_badges_follow_config() {
        let config = BadgesConfig {
            travis: false,
            codecov: true,
            codeclimate: Some("abc".to_string()),
        };
        let alts: Vec<String> = badges(&config, "x/y")
            .iter()
            .filter_map(|b| b.element_children().next())
            .filter_map(|i| i.attr("alt").map(str::to_string))
            .collect();
        assert_eq!(alts, vec!["Code coverage", "Maintainability"]);
    }
}
