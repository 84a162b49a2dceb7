// src/config/options.rs
use std::str::FromStr;

use crate::config::consts::player_link_token;
use crate::error::Error;

/// Column layouts the draw page emits, by minimum cell count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColumnSchema {
    Ten,
    #[default]
    Twelve,
    Fourteen,
}

impl ColumnSchema {
    pub fn min_cells(self) -> usize {
        match self {
            ColumnSchema::Ten => 10,
            ColumnSchema::Twelve => 12,
            ColumnSchema::Fourteen => 14,
        }
    }

    /// Widest schema a row of `cells` cells satisfies.
    pub fn detect(cells: usize) -> Option<Self> {
        [ColumnSchema::Fourteen, ColumnSchema::Twelve, ColumnSchema::Ten]
            .into_iter()
            .find(|s| cells >= s.min_cells())
    }
}

impl FromStr for ColumnSchema {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "10" => Ok(ColumnSchema::Ten),
            "12" => Ok(ColumnSchema::Twelve),
            "14" => Ok(ColumnSchema::Fourteen),
            other => Err(Error::Config(format!("Unknown column schema: {other} (10, 12 or 14)"))),
        }
    }
}

/// How a row is recognised as the target match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Match id cell equals the target.
    #[default]
    Equals,
    /// Whole row text contains the target.
    Contains,
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equals" | "eq" => Ok(MatchMode::Equals),
            "contains" => Ok(MatchMode::Contains),
            other => Err(Error::Config(format!("Unknown match mode: {other}"))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryFormat {
    #[default]
    Plain,
    WinnerBold,
    SurnameOnly,
}

impl FromStr for HistoryFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(HistoryFormat::Plain),
            "winner-bold" | "bold" => Ok(HistoryFormat::WinnerBold),
            "surname-only" | "surname" => Ok(HistoryFormat::SurnameOnly),
            other => Err(Error::Config(format!("Unknown history format: {other}"))),
        }
    }
}

/// What a flag image becomes in the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlagMode {
    #[default]
    Url,
    CountryCode,
}

impl FromStr for FlagMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "url" => Ok(FlagMode::Url),
            "code" | "country" => Ok(FlagMode::CountryCode),
            other => Err(Error::Config(format!("Unknown flag mode: {other}"))),
        }
    }
}

/// One half of a match row: A is the player-1 columns, B the player-2 columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seat {
    A,
    B,
}

impl FromStr for Seat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "1" => Ok(Seat::A),
            "b" | "2" => Ok(Seat::B),
            other => Err(Error::Config(format!("Unknown side: {other} (a or b)"))),
        }
    }
}

/// How the tracked player is recognised in a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identity {
    /// Profile link token, `/player/show/{id}/`.
    Link(String),
    /// The caller says which side the player sits on.
    Side(Seat),
}

impl Identity {
    pub fn player(player_id: &str) -> Self {
        Identity::Link(player_link_token(player_id))
    }
}

/// Per-deployment extraction knobs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub column_schema: ColumnSchema,
    pub match_mode: MatchMode,
    pub history_format: HistoryFormat,
    pub flag_mode: FlagMode,
}

/// What one invocation asks for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreRequest {
    pub match_id: Option<String>,
    pub player_id: Option<String>,
    /// Fixed side for the tracked player; wins over `player_id`.
    pub side: Option<Seat>,
}

impl ScoreRequest {
    pub fn new(match_id: Option<String>, player_id: Option<String>) -> Self {
        fn clean(v: Option<String>) -> Option<String> {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        }
        Self { match_id: clean(match_id), player_id: clean(player_id), side: None }
    }

    pub fn with_side(mut self, side: Option<Seat>) -> Self {
        self.side = side;
        self
    }

    /// Who history is built for, if anyone.
    pub fn identity(&self) -> Option<Identity> {
        match (self.side, self.player_id.as_deref()) {
            (Some(seat), _) => Some(Identity::Side(seat)),
            (None, Some(id)) => Some(Identity::player(id)),
            (None, None) => None,
        }
    }

    /// A request needs a match id or a tracked player.
    pub fn validate(&self) -> Result<(), Error> {
        if self.match_id.is_none() && self.identity().is_none() {
            return Err(Error::MissingParam("matchId"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_schema_from_cell_count() {
        assert_eq!(ColumnSchema::detect(9), None);
        assert_eq!(ColumnSchema::detect(10), Some(ColumnSchema::Ten));
        assert_eq!(ColumnSchema::detect(11), Some(ColumnSchema::Ten));
        assert_eq!(ColumnSchema::detect(12), Some(ColumnSchema::Twelve));
        assert_eq!(ColumnSchema::detect(16), Some(ColumnSchema::Fourteen));
    }

    #[test]
    fn parses_option_strings() {
        assert_eq!("14".parse::<ColumnSchema>().unwrap(), ColumnSchema::Fourteen);
        assert!("13".parse::<ColumnSchema>().is_err());
        assert_eq!("Contains".parse::<MatchMode>().unwrap(), MatchMode::Contains);
        assert_eq!("winner-bold".parse::<HistoryFormat>().unwrap(), HistoryFormat::WinnerBold);
        assert_eq!("code".parse::<FlagMode>().unwrap(), FlagMode::CountryCode);
    }

    #[test]
    fn blank_ids_count_as_missing() {
        let req = ScoreRequest::new(Some(s!("  ")), None);
        assert_eq!(req.match_id, None);
        assert!(matches!(req.validate(), Err(Error::MissingParam(_))));

        let req = ScoreRequest::new(None, Some(s!(" 3355 ")));
        assert_eq!(req.player_id.as_deref(), Some("3355"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn side_flag_is_an_identity_of_its_own() {
        let req = ScoreRequest::new(None, Some(s!("3355")));
        assert_eq!(req.identity(), Some(Identity::Link(s!("/player/show/3355/"))));

        let req = req.with_side(Some(Seat::B));
        assert_eq!(req.identity(), Some(Identity::Side(Seat::B)));

        let req = ScoreRequest::default().with_side(Some(Seat::A));
        assert!(req.validate().is_ok());

        assert_eq!("B".parse::<Seat>().unwrap(), Seat::B);
        assert!(matches!("left".parse::<Seat>(), Err(Error::Config(_))));
    }
}
