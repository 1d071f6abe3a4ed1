//! Compact index-range notation such as `3-7,9,12-14`.
//!
//! Selections are written one-based and inclusive, and expanded to zero-based indices.
//! An expression may be given inline or as the path of a file holding one.

use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Invalid index '{0}'. Expected a positive integer.")]
    InvalidToken(String),
    #[error("Malformed range '{0}'. Expected 'a-b' with positive integers.")]
    InvalidRange(String),
    #[error("Descending range '{token}': start {start} is greater than end {end}.")]
    DescendingRange { token: String, start: usize, end: usize },
    #[error("Index 0 in '{0}' is not valid; selections are one-based.")]
    ZeroIndex(String),
}

/// Where the text of a selection came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSource {
    /// The input named a readable file; this is its content, lines joined by commas.
    File(String),
    /// The input is the expression itself.
    Literal(String),
}

impl SelectionSource {
    pub fn text(&self) -> &str {
        match self {
            Self::File(text) | Self::Literal(text) => text,
        }
    }
}

fn join_fragments<S: AsRef<str>>(fragments: &[S]) -> String {
    fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
        .replace(",,", ",")
}

/// Treats `input` as a path if it names a readable file, otherwise as the expression.
///
/// A file that exists but cannot be read as text falls back to the literal branch.
pub fn resolve_source(input: &str) -> SelectionSource {
    let path = Path::new(input);
    if input.is_empty() || !path.is_file() {
        return SelectionSource::Literal(input.to_string());
    }
    match fs::read_to_string(path) {
        Ok(content) => {
            let lines: Vec<&str> = content.lines().collect();
            debug!(path = input, "Reading selection from file");
            SelectionSource::File(join_fragments(&lines))
        }
        Err(e) => {
            debug!(path = input, error = %e, "Selection file unreadable, using it as a literal");
            SelectionSource::Literal(input.to_string())
        }
    }
}

fn parse_one_based(value: &str, token: &str) -> Result<usize, SelectionError> {
    let parsed: usize = value
        .parse()
        .map_err(|_| SelectionError::InvalidToken(token.to_string()))?;
    if parsed == 0 {
        return Err(SelectionError::ZeroIndex(token.to_string()));
    }
    Ok(parsed)
}

/// Expands a compact expression to one-based values, without touching the filesystem.
pub fn extend_compact_list(expression: &str) -> Result<Vec<usize>, SelectionError> {
    let mut extended = Vec::new();
    for token in expression.replace(',', " ").split_whitespace() {
        match token.split_once('-') {
            Some((start, end)) => {
                if start.is_empty() || end.is_empty() || end.contains('-') {
                    return Err(SelectionError::InvalidRange(token.to_string()));
                }
                let range_error = |_| SelectionError::InvalidRange(token.to_string());
                let start = parse_one_based(start, token).map_err(range_error)?;
                let end = parse_one_based(end, token).map_err(range_error)?;
                if start > end {
                    return Err(SelectionError::DescendingRange {
                        token: token.to_string(),
                        start,
                        end,
                    });
                }
                extended.extend(start..=end);
            }
            None => extended.push(parse_one_based(token, token)?),
        }
    }
    Ok(extended)
}

/// Expands selection fragments into zero-based indices.
///
/// Fragments are joined with commas. If the result names a file, the file's content is
/// used as the expression instead.
///
/// # Examples
///
/// ```
/// use cubeio::core::selection::expand_selection;
///
/// assert_eq!(expand_selection(&["3-5,8"]).unwrap(), vec![2, 3, 4, 7]);
/// assert_eq!(expand_selection(&["1", "4-5"]).unwrap(), vec![0, 3, 4]);
/// ```
pub fn expand_selection<S: AsRef<str>>(fragments: &[S]) -> Result<Vec<usize>, SelectionError> {
    let joined = join_fragments(fragments);
    let source = resolve_source(&joined);
    let one_based = extend_compact_list(source.text())?;
    Ok(one_based.into_iter().map(|i| i - 1).collect())
}

pub fn expand_selection_str(expression: &str) -> Result<Vec<usize>, SelectionError> {
    expand_selection(&[expression])
}

/// Renders zero-based indices in compact one-based notation, merging ascending runs.
pub fn compact_selection(indices: &[usize]) -> String {
    let mut parts = Vec::new();
    let mut iter = indices.iter().map(|&i| i + 1).peekable();
    while let Some(start) = iter.next() {
        let mut end = start;
        while iter.peek() == Some(&(end + 1)) {
            end += 1;
            iter.next();
        }
        parts.push(if start == end {
            start.to_string()
        } else {
            format!("{}-{}", start, end)
        });
    }
    parts.join(",")
}
