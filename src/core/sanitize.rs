// src/core/sanitize.rs

/// Collapse whitespace runs (including newlines and nbsp) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Trimmed, non-empty lines of a multi-line cell text.
pub fn lines(s: &str) -> impl Iterator<Item = &str> {
    s.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// ASCII case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
}

/// Last whitespace-separated token ("John Smith" → "Smith").
pub fn last_word(s: &str) -> &str {
    s.split_whitespace().last().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_nbsp_and_newlines() {
        assert_eq!(normalize_ws("  John\u{a0}\n  Smith \t"), "John Smith");
        assert_eq!(normalize_ws("   "), "");
    }

    #[test]
    fn lines_skip_blank_rows() {
        let got: Vec<&str> = lines("\n  12 \n\n John Smith\n ").collect();
        assert_eq!(got, vec!["12", "John Smith"]);
    }

    #[test]
    fn contains_ci_ignores_case() {
        assert!(contains_ci("WalkOver", "walkover"));
        assert!(contains_ci("(walkover)", "WALKOVER"));
        assert!(!contains_ci("Walker", "walkover"));
    }

    #[test]
    fn last_word_of_name() {
        assert_eq!(last_word("Jan van Berg"), "Berg");
        assert_eq!(last_word("Smith"), "Smith");
        assert_eq!(last_word(""), "");
    }
}
