use super::files::FileNotFound;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    NotFound(#[from] FileNotFound),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Format error on line {line}: {message}")]
    Format { line: usize, message: String },
}

/// A non-empty row of a whitespace-delimited table, with its 1-based line number.
pub(crate) struct Row {
    pub line: usize,
    pub fields: Vec<String>,
}

impl Row {
    pub fn error(&self, message: impl Into<String>) -> TableError {
        TableError::Format {
            line: self.line,
            message: message.into(),
        }
    }

    pub fn float(&self, index: usize) -> Result<f64, TableError> {
        let value = &self.fields[index];
        value
            .parse()
            .map_err(|_| self.error(format!("invalid number '{}' in column {}", value, index + 1)))
    }
}

/// Splits a plain-text table into rows. Anything after `#` is a comment; blank lines
/// are skipped.
pub(crate) fn read_rows(reader: &mut impl BufRead) -> Result<Vec<Row>, TableError> {
    let mut rows = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.split('#').next().unwrap_or("");
        let fields: Vec<String> = content.split_whitespace().map(str::to_string).collect();
        if fields.is_empty() {
            continue;
        }
        rows.push(Row {
            line: line_num + 1,
            fields,
        });
    }
    Ok(rows)
}
