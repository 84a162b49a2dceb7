// src/extract/history.rs
use crate::config::consts::{WALKOVER, WINNER_MARK};
use crate::config::{HistoryFormat, Identity, Seat};
use crate::core::sanitize::contains_ci;

use super::names::surname;
use super::round::Round;
use super::row::{RowFields, Side};

/// Which side of a row the tracked player is on. With a link identity,
/// side A wins when both sides link to the player.
pub fn participation(fields: &RowFields<'_>, identity: &Identity) -> Option<Seat> {
    match identity {
        Identity::Side(seat) => Some(*seat),
        Identity::Link(token) if fields.a.links_to(token) => Some(Seat::A),
        Identity::Link(token) if fields.b.links_to(token) => Some(Seat::B),
        Identity::Link(_) => None,
    }
}

fn is_walkover(name: &str) -> bool {
    contains_ci(name, WALKOVER)
}

/// Ordered history lines for one tracked player.
#[derive(Debug)]
pub struct HistoryBuilder {
    identity: Identity,
    format: HistoryFormat,
    entries: Vec<String>,
}

impl HistoryBuilder {
    pub fn new(identity: Identity, format: HistoryFormat) -> Self {
        Self { identity, format, entries: Vec::new() }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Append a line for `fields` if the player took part and the match was played.
    pub fn offer(&mut self, fields: &RowFields<'_>, round: &Round) -> bool {
        if !fields.a.is_complete() || !fields.b.is_complete() {
            return false;
        }
        if is_walkover(&fields.a.name) || is_walkover(&fields.b.name) {
            return false;
        }
        let (me, them) = match participation(fields, &self.identity) {
            Some(Seat::A) => (&fields.a, &fields.b),
            Some(Seat::B) => (&fields.b, &fields.a),
            None => return false,
        };

        let line = format_line(self.format, me, them);
        let entry = if round.abbreviation.is_empty() {
            line
        } else {
            format!("{}: {}", round.abbreviation, line)
        };
        self.entries.push(entry);
        true
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

/// "Doe 9 - 3 Smith", with the tracked player's side first.
fn format_line(format: HistoryFormat, me: &Side<'_>, them: &Side<'_>) -> String {
    let (my_name, their_name) = match format {
        HistoryFormat::SurnameOnly => (surname(&me.name), surname(&them.name)),
        _ => (me.name.as_str(), them.name.as_str()),
    };
    let mut left = join!(my_name, " ", &me.score);
    let mut right = join!(&them.score, " ", their_name);

    if format == HistoryFormat::WinnerBold {
        let scores = (me.score.parse::<i64>(), them.score.parse::<i64>());
        if let (Ok(mine), Ok(theirs)) = scores {
            if mine > theirs {
                left = join!(WINNER_MARK, &left, WINNER_MARK);
            } else if theirs > mine {
                right = join!(WINNER_MARK, &right, WINNER_MARK);
            }
        }
    }
    join!(left, " - ", &right)
}
