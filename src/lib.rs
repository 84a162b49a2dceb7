// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod scrape;
pub mod specs;

#[cfg(feature = "server")]
pub mod server;

pub use error::{Error, Result};
pub use extract::{extract, extract_document, MatchRecord, PlayerMatches, Report, ScoreReport};
