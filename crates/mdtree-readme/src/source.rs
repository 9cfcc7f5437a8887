//! Line ranges cut from source files.

use std::path::Path;

use crate::{GenerateError, Result};

/// Read `count` lines of `path` starting at the 1-based line `start`.
///
/// With `count` absent everything from `start` to the end of the file is
/// returned. Every returned line ends with `\n`, including a final line that
/// lacked one in the file. Asking for lines past the end is an error rather
/// than a silently shorter example.
pub fn load_lines(path: &Path, start: usize, count: Option<usize>) -> Result<String> {
    let source_error = |reason: String| GenerateError::SourceRead {
        path: path.to_path_buf(),
        reason,
    };

    if start == 0 {
        return Err(source_error("line numbers start at 1".to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| source_error(e.to_string()))?;
    let total = content.lines().count();

    if start > total {
        return Err(source_error(format!(
            "start line {start} is past the end of the file ({total} lines)"
        )));
    }

    let available = total - start + 1;
    let take = match count {
        Some(n) if n > available => {
            return Err(source_error(format!(
                "requested {n} lines from line {start} but only {available} remain"
            )));
        }
        Some(n) => n,
        None => available,
    };

    let mut out = String::new();
    for line in content.lines().skip(start - 1).take(take) {
        out.push_str(line);
        out.push('\n');
    }

    tracing::debug!(path = %path.display(), start, lines = take, "loaded source lines");
    Ok(out)
}
