//! The three ways of filling a [`DoubleVector`]: a file of comma-separated
//! numbers, an interactive prompt, and the command line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use double_vector::DoubleVector;
use thiserror::Error;
use tracing::{debug, warn};

pub const PROMPT: &str = "Enter a number (or 'q' to quit): ";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("\"{path}\" is not a valid filename")]
    InvalidFilename {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid Data Entry: {0}")]
    InvalidEntry(String),

    #[error("command-line argument \"{0}\" is not a number")]
    InvalidArgument(String),
}

/// Reads the longest number at the start of `text`, after leading
/// whitespace, ignoring whatever follows: `"2.5kg"` is 2.5 and `"3 4"` is 3.
pub fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    text.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
}

/// Opens `path` and appends every number it holds. Returns how many were added.
pub fn read_file(path: &Path, values: &mut DoubleVector) -> Result<usize> {
    let file = File::open(path).map_err(|source| InputError::InvalidFilename {
        path: path.display().to_string(),
        source,
    })?;
    let added = read_csv(BufReader::new(file), values)
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    debug!(?path, added, "loaded numbers from file");
    Ok(added)
}

/// Appends the numbers of each comma-separated line. Each token contributes
/// its [`leading_number`]; tokens without one are skipped.
pub fn read_csv<R: BufRead>(reader: R, values: &mut DoubleVector) -> Result<usize> {
    let mut added = 0;
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match leading_number(token) {
                Some(num) => {
                    values.push_back(num)?;
                    added += 1;
                }
                None => warn!(line = lineno + 1, token, "skipping malformed number"),
            }
        }
    }
    Ok(added)
}

/// Prompts on `prompt` and reads one number per line from `reader` until a
/// line starting with `q` or the end of input.
///
/// Each line contributes its [`leading_number`] and the rest is discarded. A
/// line that does not start with a number ends the session with
/// [`InputError::InvalidEntry`] naming its first word.
pub fn read_interactive<R: BufRead, W: Write>(
    mut reader: R,
    mut prompt: W,
    values: &mut DoubleVector,
) -> Result<usize> {
    let mut added = 0;
    let mut line = String::new();
    loop {
        write!(prompt, "{PROMPT}")?;
        prompt.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let entry = line.trim_start();
        if entry.starts_with('q') {
            break;
        }
        let Some(token) = entry.split_whitespace().next() else {
            continue;
        };
        let num =
            leading_number(entry).ok_or_else(|| InputError::InvalidEntry(token.to_string()))?;
        values.push_back(num)?;
        added += 1;
    }
    debug!(added, "read numbers interactively");
    Ok(added)
}

/// Appends the [`leading_number`] of each argument. An argument without one
/// fails with [`InputError::InvalidArgument`].
pub fn read_args<S: AsRef<str>>(args: &[S], values: &mut DoubleVector) -> Result<usize> {
    for arg in args {
        let arg = arg.as_ref();
        let num =
            leading_number(arg).ok_or_else(|| InputError::InvalidArgument(arg.to_string()))?;
        values.push_back(num)?;
    }
    debug!(added = args.len(), "read numbers from the command line");
    Ok(args.len())
}
