// src/extract/mod.rs
//! Match lookup and player history over a decomposed draw page.
//!
//! One walk over every row feeds both the target-match locator and the
//! history builder. Rows the extractors cannot read are skipped, never fatal.

pub mod flags;
pub mod history;
pub mod locate;
pub mod names;
pub mod record;
pub mod round;
pub mod row;

use serde::{Deserialize, Serialize};

use crate::config::{ExtractOptions, ScoreRequest};
use crate::error::{Error, Result};
use crate::specs::{Decompose, Document, DrawPage};

use history::{participation, HistoryBuilder};
use locate::Locator;
use round::RoundTracker;
use row::extract_row;

pub use record::MatchRecord;
pub use round::{abbreviate, Round};

/// Target match plus the tracked player's earlier results.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    #[serde(flatten)]
    pub record: MatchRecord,
    pub player_history: Vec<String>,
}

/// Every match a tracked player appears in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatches {
    pub all_matches: Vec<MatchRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_history: Option<Vec<String>>,
}

/// What a request produces: one match, or a player's matches when no match id was given.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Match(ScoreReport),
    Player(PlayerMatches),
}

/// Parse `html` with the default page layout and extract.
pub fn extract(html: &str, request: &ScoreRequest, options: &ExtractOptions) -> Result<Report> {
    extract_with(&DrawPage, html, request, options)
}

pub fn extract_with(
    layout: &dyn Decompose,
    html: &str,
    request: &ScoreRequest,
    options: &ExtractOptions,
) -> Result<Report> {
    request.validate()?;
    let doc = layout.decompose(html)?;
    extract_document(&doc, request, options)
}

/// Walk an already decomposed document.
pub fn extract_document(
    doc: &Document,
    request: &ScoreRequest,
    options: &ExtractOptions,
) -> Result<Report> {
    request.validate()?;

    let mut rounds = RoundTracker::new();
    let mut locator = request
        .match_id
        .as_deref()
        .map(|id| Locator::new(id, options.match_mode, options.flag_mode));
    let mut history = request
        .identity()
        .map(|identity| HistoryBuilder::new(identity, options.history_format));
    let mut matches: Vec<MatchRecord> = Vec::new();
    let mut skipped = 0usize;

    for section in &doc.sections {
        rounds.enter(&section.title);

        for row in &section.rows {
            let Some(fields) = extract_row(row, options.column_schema) else {
                skipped += 1;
                continue;
            };

            if let Some(loc) = locator.as_mut() {
                if loc.offer(row, &fields) {
                    // the target never counts as history
                    continue;
                }
            }

            let Some(h) = history.as_mut() else { continue };
            h.offer(&fields, rounds.current());

            if locator.is_none() && participation(&fields, h.identity()).is_some() {
                matches.push(MatchRecord::from_fields(&fields, options.flag_mode));
            }
        }
    }
    logd!("Extract: {skipped} rows skipped");

    let entries = history.map(HistoryBuilder::into_entries);

    match locator {
        Some(loc) => Ok(Report::Match(ScoreReport {
            record: loc.finish()?,
            player_history: entries.unwrap_or_default(),
        })),
        None if matches.is_empty() => Err(Error::PlayerNotFound),
        None => Ok(Report::Player(PlayerMatches {
            all_matches: matches,
            match_history: entries,
        })),
    }
}
