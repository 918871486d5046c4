//! Error types for lookup table loading.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    #[error("data directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {file}{}: {source}", line_suffix(.line))]
    Csv {
        file: String,
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    #[error("duplicate key '{key}' in {file}")]
    DuplicateKey { file: String, key: String },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|line| format!(" line {line}")).unwrap_or_default()
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(file: &str, source: csv::Error) -> Self {
        Self::Csv {
            file: file.to_string(),
            line: source.position().map(csv::Position::line),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StandardsError>;
