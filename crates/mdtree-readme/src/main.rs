//! readme-gen: generate README.md from a readme.toml project description

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use mdtree_readme::cli::Cli;
use mdtree_readme::{generate, write_readme, ReadmeConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = ReadmeConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    // Paths in the config are relative to its directory
    let base_dir = cli
        .config
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    if cli.stdout {
        let stdout = io::stdout();
        generate(&config, base_dir, stdout.lock()).context("Failed to generate README")?;
        return Ok(());
    }

    let output = match &cli.output {
        Some(path) => path.clone(),
        None => base_dir.join(&config.output),
    };

    write_readme(&config, base_dir, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if !cli.quiet {
        eprintln!("Wrote {}", output.display());
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` refines the level chosen by `-v`/`-q`
fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
