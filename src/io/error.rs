use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at line ~{line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("network file '{name}' not found in any search directory")]
    NetNotFound { name: String },

    #[error("network includes form a cycle: {0}")]
    IncludeCycle(String),

    #[error("layer table needs at least two rows (a surface and a core), found {0}")]
    TooFewLayers(usize),

    #[error(transparent)]
    Blend(#[from] crate::blend::Error),

    #[error(transparent)]
    Model(#[from] crate::model::error::Error),
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }
}
