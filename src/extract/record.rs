// src/extract/record.rs
use serde::{Deserialize, Serialize};

use crate::config::FlagMode;

use super::flags::resolve_flag;
use super::row::RowFields;

/// One match as served to clients. Field order follows the JSON payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub match_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_time: String,
    pub race_to: String,
    pub player1: String,
    pub flag1: String,
    pub score1: String,
    pub score2: String,
    pub flag2: String,
    pub player2: String,
    pub table: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl MatchRecord {
    pub fn from_fields(f: &RowFields<'_>, flags: FlagMode) -> Self {
        Self {
            match_id: f.match_id.clone(),
            start_time: f.time.clone(),
            race_to: f.race_to.clone(),
            player1: f.a.name.clone(),
            flag1: resolve_flag(f.a.flag_src, flags),
            score1: f.a.score.clone(),
            score2: f.b.score.clone(),
            flag2: resolve_flag(f.b.flag_src, flags),
            player2: f.b.name.clone(),
            table: f.table.clone(),
            round: f.round.clone(),
            status: f.status.clone(),
        }
    }
}
