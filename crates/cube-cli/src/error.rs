use cubeio::core::io::cube::CubeError;
use cubeio::core::io::files::FileNotFound;
use cubeio::core::io::table::TableError;
use cubeio::core::selection::SelectionError;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    MissingFile(#[from] FileNotFound),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid selection: {0}")]
    Selection(#[from] SelectionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Keeps a missing input distinct from a malformed one.
    pub fn from_cube(path: &Path, error: CubeError) -> Self {
        match error {
            CubeError::NotFound(missing) => Self::MissingFile(missing),
            other => Self::FileParsing {
                path: path.to_path_buf(),
                source: other.into(),
            },
        }
    }

    pub fn from_table(path: &Path, error: TableError) -> Self {
        match error {
            TableError::NotFound(missing) => Self::MissingFile(missing),
            other => Self::FileParsing {
                path: path.to_path_buf(),
                source: other.into(),
            },
        }
    }
}
