// src/config/mod.rs
pub mod consts;
pub mod options;

pub use options::{
    ColumnSchema, ExtractOptions, FlagMode, HistoryFormat, Identity, MatchMode, ScoreRequest, Seat,
};
