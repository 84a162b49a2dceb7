// src/extract/locate.rs
use crate::config::{FlagMode, MatchMode};
use crate::error::{Error, Result};
use crate::specs::Row;

use super::record::MatchRecord;
use super::row::RowFields;

/// Whether `row` is the match `target` under `mode`.
pub fn is_target(mode: MatchMode, target: &str, row: &Row, fields: &RowFields<'_>) -> bool {
    match mode {
        MatchMode::Equals => fields.match_id == target,
        MatchMode::Contains => row.text.contains(target),
    }
}

/// Finds the target match. The first hit is kept; later hits are ignored.
#[derive(Debug)]
pub struct Locator<'t> {
    target: &'t str,
    mode: MatchMode,
    flags: FlagMode,
    found: Option<MatchRecord>,
}

impl<'t> Locator<'t> {
    pub fn new(target: &'t str, mode: MatchMode, flags: FlagMode) -> Self {
        Self { target, mode, flags, found: None }
    }

    pub fn matches(&self, row: &Row, fields: &RowFields<'_>) -> bool {
        is_target(self.mode, self.target, row, fields)
    }

    /// Offer a row; returns true if it is the target (found now or earlier).
    pub fn offer(&mut self, row: &Row, fields: &RowFields<'_>) -> bool {
        if !self.matches(row, fields) {
            return false;
        }
        if self.found.is_none() {
            let mut record = MatchRecord::from_fields(fields, self.flags);
            record.match_id = s!(self.target);
            logd!("Target {} found: {} vs {}", self.target, record.player1, record.player2);
            self.found = Some(record);
        }
        true
    }

    pub fn finish(self) -> Result<MatchRecord> {
        self.found.ok_or(Error::MatchNotFound)
    }
}
