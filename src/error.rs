// src/error.rs
use thiserror::Error;

/// Everything the scraper can report to a caller.
///
/// Row-level anomalies never show up here; those rows are skipped.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required parameter: {0}")]
    MissingParam(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Match not found")]
    MatchNotFound,

    #[error("No matches found for player")]
    PlayerNotFound,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status the service answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::MissingParam(_) | Error::Config(_) => 400,
            Error::MatchNotFound | Error::PlayerNotFound => 404,
            Error::Http(_) | Error::Status { .. } | Error::Parse(_) | Error::Io(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
