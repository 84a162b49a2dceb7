// src/specs/mod.rs
//! # Page "specs"
//!
//! Knows how the draw-results page is laid out and turns it into a neutral
//! [`draw::Document`]: ordered sections (one per round), each holding ordered
//! rows of owned [`crate::core::Cell`] snapshots.
//!
//! ## What lives here
//! - **Pure HTML decomposition** of a fetched page via `scraper`.
//! - **Round boundary detection**: a spanning `roundname` header cell inside the
//!   table, or a heading element sitting right before a round's sub-table.
//!   Both markups occur on the same site depending on tournament phase.
//!
//! ## What does **not** live here
//! - Column offsets, name/flag cleanup, match lookup and history: see `extract`.
//! - Fetching: see `core::net` / `scrape`.
//!
//! ## Conventions
//! - Never fail on odd markup; unknown rows are kept and the extractors decide.
//! - Rows made only of `<th>` cells are column headers and are dropped here.
//! - Specs are testable offline against inline snippets or `tests/fixtures/`.
pub mod draw;

pub use draw::{Decompose, Document, DrawPage, Row, Section};
