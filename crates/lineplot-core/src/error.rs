// File: crates/lineplot-core/src/error.rs
// Summary: Error taxonomy for loading series and producing figures.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a style format string such as `"o--"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("unrecognized character {0:?} in style")]
    UnknownChar(char),
    #[error("style {0:?} sets the {1} more than once")]
    Duplicate(String, &'static str),
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{}:{line}: {reason}", path.display())]
    Parse { path: PathBuf, line: u64, reason: String },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid style: {0}")]
    Style(#[from] StyleError),

    #[error("render failed: {0}")]
    Render(String),

    #[error("unsupported output format {ext:?} for {}", path.display())]
    UnsupportedFormat { path: PathBuf, ext: String },
}

impl PlotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T, E = PlotError> = std::result::Result<T, E>;
