// src/extract/row.rs
// Column offsets per schema. Every read goes through `Row::cell`, so a short
// row just yields empty fields past its end.

use crate::config::ColumnSchema;
use crate::core::Cell;
use crate::specs::Row;

use super::names::{first_name, resolve_name};

const MATCH_ID: usize = 0;
const TIME: usize = 1;
const RACE_TO: usize = 3;
const PLAYER1: usize = 4;
const FLAG1: usize = 5;
const SCORE1: usize = 6;
const SCORE2: usize = 8;

struct Offsets {
    player2: &'static [usize],
    flag2: &'static [usize],
    table: usize,
    round: Option<usize>,
    status: Option<usize>,
}

fn offsets(schema: ColumnSchema) -> Offsets {
    match schema {
        ColumnSchema::Ten => Offsets {
            player2: &[9],
            flag2: &[8, 9],
            table: 10,
            round: None,
            status: None,
        },
        ColumnSchema::Twelve => Offsets {
            player2: &[9, 10],
            flag2: &[8, 9, 10],
            table: 11,
            round: None,
            status: None,
        },
        // table number and status icon share the last cell
        ColumnSchema::Fourteen => Offsets {
            player2: &[9, 10],
            flag2: &[8, 9, 10],
            table: 13,
            round: Some(12),
            status: Some(13),
        },
    }
}

/// One player's half of a row.
#[derive(Debug)]
pub struct Side<'a> {
    pub name: String,
    pub score: String,
    pub flag_src: Option<&'a str>,
    cells: Vec<&'a Cell>,
}

impl Side<'_> {
    /// Whether any of this side's player cells links to `token`.
    pub fn links_to(&self, token: &str) -> bool {
        self.cells.iter().any(|c| c.links_to(token))
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.score.is_empty()
    }
}

/// Semantic view of one match row.
#[derive(Debug)]
pub struct RowFields<'a> {
    pub schema: ColumnSchema,
    pub match_id: String,
    pub time: String,
    pub race_to: String,
    pub a: Side<'a>,
    pub b: Side<'a>,
    pub table: String,
    pub round: Option<String>,
    pub status: Option<String>,
}

fn text_at(row: &Row, i: usize) -> String {
    row.cell(i).map(Cell::plain).unwrap_or_default()
}

fn cells_at<'a>(row: &'a Row, idx: &[usize]) -> Vec<&'a Cell> {
    idx.iter().filter_map(|&i| row.cell(i)).collect()
}

/// Map a row onto fields, or `None` for header, spacer and short rows.
///
/// The row's own cell count picks the layout; `min` is the narrowest layout
/// this deployment accepts.
pub fn extract_row(row: &Row, min: ColumnSchema) -> Option<RowFields<'_>> {
    let schema = ColumnSchema::detect(row.cells.len())?;
    if schema < min || row.cells.iter().all(Cell::is_empty) {
        return None;
    }
    let off = offsets(schema);

    let p1_cells = cells_at(row, &[PLAYER1]);
    let p2_cells = cells_at(row, off.player2);

    let a = Side {
        name: p1_cells.first().map(|c| resolve_name(c)).unwrap_or_default(),
        score: text_at(row, SCORE1),
        flag_src: row.cell(FLAG1).and_then(Cell::image_src),
        cells: p1_cells,
    };
    let b = Side {
        name: first_name(p2_cells.iter().copied()),
        score: text_at(row, SCORE2),
        flag_src: off.flag2.iter().find_map(|&i| row.cell(i).and_then(Cell::image_src)),
        cells: p2_cells,
    };

    Some(RowFields {
        schema,
        match_id: text_at(row, MATCH_ID),
        time: row.cell(TIME).map(|c| c.nested.clone()).unwrap_or_default(),
        race_to: text_at(row, RACE_TO),
        a,
        b,
        table: text_at(row, off.table),
        round: off.round.map(|i| text_at(row, i)),
        status: off
            .status
            .map(|i| row.cell(i).and_then(Cell::title).map(String::from).unwrap_or_default()),
    })
}
