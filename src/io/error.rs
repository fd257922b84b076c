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

    #[error("malformed {format} input: {details} (at line ~{line})")]
    MalformedInput {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("invalid TOML description: {0}")]
    Toml(#[from] toml::de::Error),

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

    pub fn malformed(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::MalformedInput {
            format,
            line,
            details: details.into(),
        }
    }
}
