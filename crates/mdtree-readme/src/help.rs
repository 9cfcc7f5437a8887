//! Capturing the help text of a command-line tool.

use std::path::Path;
use std::process::Command;

use crate::{GenerateError, Result};

/// Run `program` with `args` and return what it printed.
///
/// Many tools print help to stderr and exit non-zero after doing so, so
/// stdout and stderr are concatenated and a failed exit is only an error
/// when nothing was printed at all.
pub fn capture_help(program: &str, args: &[String], working_dir: &Path) -> Result<String> {
    let command_line = std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");

    tracing::debug!(command = %command_line, dir = %working_dir.display(), "capturing help");

    let output = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .output()
        .map_err(|e| GenerateError::CommandExecution {
            command: command_line.clone(),
            reason: e.to_string(),
        })?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        if text.trim().is_empty() {
            return Err(GenerateError::CommandExecution {
                command: command_line,
                reason: format!("exited with {} and printed nothing", output.status),
            });
        }
        tracing::warn!(command = %command_line, status = %output.status, "help command exited unsuccessfully");
    }

    Ok(text)
}

/// Help text of a clap command, rendered without running a process
pub fn render_clap_help(command: &mut clap::Command) -> String {
    command.render_help().to_string()
}

/// Replace every tab with four spaces.
pub fn expand_tabs(text: &str) -> String {
    text.replace('\t', "    ")
}
