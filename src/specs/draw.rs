// src/specs/draw.rs
use std::time::Instant;

use scraper::{ElementRef, Html, Selector};

use crate::core::html::{element_text, row_cells, selector};
use crate::core::Cell;
use crate::error::Result;

/// A page reduced to rounds and rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub sections: Vec<Section>,
}

/// One round's worth of rows. Rows seen before any boundary sit in a section
/// with an empty title.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub rows: Vec<Row>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
    /// Whole-row visible text, whitespace-collapsed.
    pub text: String,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        let text = cells.iter().map(Cell::plain).filter(|t| !t.is_empty()).collect::<Vec<_>>().join(" ");
        Self { cells, text }
    }

    pub fn cell(&self, i: usize) -> Option<&Cell> {
        self.cells.get(i)
    }
}

impl Document {
    pub fn parse(html: &str) -> Result<Self> {
        DrawPage.decompose(html)
    }

    /// Rows in document order, each with its section title.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &Row)> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter().map(move |r| (s.title.as_str(), r)))
    }

    fn open_section(&mut self, title: String) {
        // An untitled lead-in with no rows carries nothing
        if let Some(last) = self.sections.last() {
            if last.title.is_empty() && last.rows.is_empty() {
                self.sections.pop();
            }
        }
        self.sections.push(Section { title, rows: Vec::new() });
    }

    fn push_row(&mut self, row: Row) {
        if self.sections.is_empty() {
            self.sections.push(Section::default());
        }
        if let Some(section) = self.sections.last_mut() {
            section.rows.push(row);
        }
    }
}

/// Turns raw HTML into a [`Document`]. Swap implementations for other markups.
pub trait Decompose {
    fn decompose(&self, html: &str) -> Result<Document>;
}

/// The EPBF draw-results page.
#[derive(Clone, Copy, Debug, Default)]
pub struct DrawPage;

impl Decompose for DrawPage {
    fn decompose(&self, html: &str) -> Result<Document> {
        let t = Instant::now();
        let page = Html::parse_document(html);
        let walk = selector("h1, h2, h3, h4, h5, h6, tr")?;
        let table = selector("table")?;
        let roundname = selector("td.roundname, th.roundname")?;

        let mut doc = Document::default();
        let mut rows = 0usize;

        // select() yields matches in document order, so headings and rows interleave
        for el in page.select(&walk) {
            if el.value().name() != "tr" {
                if heading_opens_round(el, &table, &roundname) {
                    let title = element_text(el);
                    if !title.is_empty() {
                        doc.open_section(title);
                    }
                }
                continue;
            }

            let cells = row_cells(el);
            if let Some(title) = round_header(&cells) {
                doc.open_section(title);
                continue;
            }
            if cells.is_empty() || only_header_cells(el) {
                continue;
            }
            doc.push_row(Row::new(cells));
            rows += 1;
        }

        logd!(
            "Draw: {} sections, {} rows decomposed in {:?}",
            doc.sections.len(),
            rows,
            t.elapsed()
        );
        Ok(doc)
    }
}

/// Title of a `roundname` header row. Other spanning rows (notes, breaks,
/// spacers) stay inside the current round.
fn round_header(cells: &[Cell]) -> Option<String> {
    let cell = cells.iter().find(|c| c.has_class("roundname"))?;
    let title = cell.plain();
    (!title.is_empty()).then_some(title)
}

/// A heading directly before a table (or a wrapper holding one) names that
/// table's round, unless the table carries its own `roundname` rows. A page
/// title above such a table is not a round.
fn heading_opens_round(heading: ElementRef<'_>, table: &Selector, roundname: &Selector) -> bool {
    let Some(next) = heading.next_siblings().filter_map(ElementRef::wrap).next() else {
        return false;
    };
    let target = if next.value().name() == "table" {
        Some(next)
    } else {
        next.select(table).next()
    };
    target.is_some_and(|t| t.select(roundname).next().is_none())
}

fn only_header_cells(tr: ElementRef<'_>) -> bool {
    tr.children()
        .filter_map(ElementRef::wrap)
        .all(|c| c.value().name() == "th")
}
