use std::{io, path::PathBuf};

use thiserror::Error;

/// Broad failure classes a caller may want to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lookup,
    Network,
    Parse,
    Io,
    EmptyInput,
}

/// Errors produced while fetching weather or writing the CSV log.
#[derive(Debug, Error)]
pub enum Error {
    /// City is not in the coordinate table.
    #[error("Unknown city '{city}'. Known cities: {known}.")]
    UnknownCity { city: String, known: String },

    /// The request never produced a response (DNS, TLS, connection, body read).
    #[error("Request to OpenWeather {endpoint} failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status.
    #[error("OpenWeather {endpoint} request failed with status {status}: {body}")]
    HttpStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Failed to parse OpenWeather response: {0}")]
    Parse(String),

    #[error("Failed to write {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write CSV row to {}: {}", .path.display(), .source)]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("No records to write")]
    EmptyInput,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownCity { .. } => ErrorKind::Lookup,
            Error::Network { .. } | Error::HttpStatus { .. } => ErrorKind::Network,
            Error::Parse(_) => ErrorKind::Parse,
            Error::Io { .. } | Error::Csv { .. } => ErrorKind::Io,
            Error::EmptyInput => ErrorKind::EmptyInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
