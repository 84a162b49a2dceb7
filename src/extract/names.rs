// src/extract/names.rs
use crate::core::sanitize::{last_word, lines};
use crate::core::Cell;

/// Display name from a player cell.
///
/// Cells stack a seed/rank or country code above or below the name, so the
/// first line with an interior space ("first last") wins; otherwise the first
/// non-empty line; otherwise `""`.
pub fn resolve_name(cell: &Cell) -> String {
    name_from_text(&cell.text)
}

pub fn name_from_text(text: &str) -> String {
    let mut first = None;
    for line in lines(text) {
        if line.contains(' ') {
            return s!(line);
        }
        first.get_or_insert(line);
    }
    first.map(String::from).unwrap_or_default()
}

/// First non-empty resolved name among fallback cells.
pub fn first_name<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> String {
    cells
        .into_iter()
        .map(resolve_name)
        .find(|n| !n.is_empty())
        .unwrap_or_default()
}

/// Surname for compact history lines.
pub fn surname(name: &str) -> &str {
    last_word(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(text: &str) -> Cell {
        Cell { text: s!(text), ..Cell::default() }
    }

    #[test]
    fn prefers_line_with_a_space() {
        assert_eq!(name_from_text("12\nJohn Smith"), "John Smith");
        assert_eq!(name_from_text("  POL \n  Jan  Kowalski  \n 3"), "Jan  Kowalski");
    }

    #[test]
    fn falls_back_to_first_line_then_empty() {
        assert_eq!(name_from_text("Smith"), "Smith");
        assert_eq!(name_from_text("\n 7 \nSmith"), "7");
        assert_eq!(name_from_text(""), "");
        assert_eq!(name_from_text(" \n \n"), "");
    }

    #[test]
    fn first_name_skips_empty_cells() {
        let cells = [cell(" "), cell("5\nAnna Nowak")];
        assert_eq!(first_name(&cells), "Anna Nowak");
        assert_eq!(first_name(&[cell(""), cell("")]), "");
    }

    #[test]
    fn surname_is_last_token() {
        assert_eq!(surname("Joshua Filler"), "Filler");
        assert_eq!(surname("Filler"), "Filler");
    }
}
