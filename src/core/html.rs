// src/core/html.rs
// Owned snapshots of DOM cells, so the extractors never touch `scraper` types.

use scraper::{ElementRef, Node, Selector};

use super::sanitize::normalize_ws;
use crate::error::{Error, Result};

/// Elements whose start breaks the visible text onto a new line.
const LINE_BREAKERS: [&str; 6] = ["br", "div", "p", "li", "tr", "table"];

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("selector {css:?}: {e}")))
}

/// One `<td>`/`<th>`, reduced to what the row extractors read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Visible text, line boundaries kept as `\n`.
    pub text: String,
    /// Text of the first nested element (e.g. the time inside a `<span>`).
    pub nested: String,
    pub links: Vec<String>,
    pub images: Vec<String>,
    /// `title` attributes of nested elements, in document order.
    pub titles: Vec<String>,
    pub classes: Vec<String>,
}

impl Cell {
    pub fn from_element(el: ElementRef<'_>) -> Self {
        let mut cell = Cell {
            classes: el.value().classes().map(str::to_string).collect(),
            ..Cell::default()
        };

        // descendants() yields the cell itself first
        for node in el.descendants().skip(1) {
            match node.value() {
                Node::Text(t) => cell.text.push_str(t),
                Node::Element(e) => {
                    if LINE_BREAKERS.contains(&e.name()) {
                        cell.text.push('\n');
                    }
                    match e.name() {
                        "a" => {
                            if let Some(href) = e.attr("href") {
                                cell.links.push(s!(href.trim()));
                            }
                        }
                        "img" => {
                            if let Some(src) = e.attr("src") {
                                cell.images.push(s!(src.trim()));
                            }
                        }
                        _ => {}
                    }
                    if let Some(title) = e.attr("title") {
                        cell.titles.push(normalize_ws(title));
                    }
                }
                _ => {}
            }
        }

        cell.nested = el
            .children()
            .filter_map(ElementRef::wrap)
            .next()
            .map(|child| normalize_ws(&child.text().collect::<String>()))
            .unwrap_or_default();

        cell
    }

    /// Whitespace-collapsed text.
    pub fn plain(&self) -> String {
        normalize_ws(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c.eq_ignore_ascii_case(class))
    }

    /// First non-blank `<img src>`.
    pub fn image_src(&self) -> Option<&str> {
        self.images.iter().map(String::as_str).find(|s| !s.is_empty())
    }

    /// First non-blank nested `title` attribute.
    pub fn title(&self) -> Option<&str> {
        self.titles.iter().map(String::as_str).find(|s| !s.is_empty())
    }

    /// Any `<a href>` in the cell containing `token`.
    pub fn links_to(&self, token: &str) -> bool {
        !token.is_empty() && self.links.iter().any(|href| href.contains(token))
    }
}

/// Direct `<td>`/`<th>` children of a row. Cells of nested tables are not included.
pub fn row_cells(tr: ElementRef<'_>) -> Vec<Cell> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .map(Cell::from_element)
        .collect()
}

/// All visible text of an element, whitespace-collapsed.
pub fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}
