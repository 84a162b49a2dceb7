// src/extract/round.rs

/// The bracket round rows are currently being read under.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Round {
    pub title: String,
    pub abbreviation: String,
}

impl Round {
    pub fn new(title: &str) -> Self {
        let title = title.trim();
        Self { title: s!(title), abbreviation: abbreviate(title) }
    }
}

/// Current-round state for one walk over a document.
#[derive(Debug, Default)]
pub struct RoundTracker {
    current: Round,
}

impl RoundTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cross a round boundary. An empty title keeps the implicit untitled round.
    pub fn enter(&mut self, title: &str) {
        if title.trim() == self.current.title {
            return;
        }
        self.current = Round::new(title);
        logd!("Round: {:?} => {:?}", self.current.title, self.current.abbreviation);
    }

    pub fn current(&self) -> &Round {
        &self.current
    }
}

fn known(title: &str) -> Option<&'static str> {
    let code = match title {
        "Round 1" => "R1",
        "Round 2" => "R2",
        "Winners Round 1" => "WR1",
        "Winners Round 2" => "WR2",
        "Winners Round 3" => "WR3",
        "Winners Qualification" => "WQ",
        "Losers Round 1" => "LR1",
        "Losers Round 2" => "LR2",
        "Losers Round 3" => "LR3",
        "Losers Round 4" => "LR4",
        "Losers Round 5" => "LR5",
        "Losers Round 6" => "LR6",
        "Losers Qualification" => "LQ",
        "SE - Last 128" => "L128",
        "SE - Last 64" => "L64",
        "SE - Last 32" => "L32",
        "SE - Last 16" => "L16",
        "SE - Quarter Finals" | "Quarter Finals" => "QF",
        "SE - Semi Finals" | "Semi Finals" => "SF",
        "SE - Final" | "Final" => "F",
        _ => return None,
    };
    Some(code)
}

/// Short code for a round title: static table first, then initials + numbers.
pub fn abbreviate(title: &str) -> String {
    let title = title.trim();
    if let Some(code) = known(title) {
        return s!(code);
    }
    let code = initials(title);
    if !title.is_empty() {
        logd!("Unknown round title {title:?}, abbreviated to {code:?}");
    }
    code
}

/// "Group Stage 2" → "GS2", "SE - Last 8 (Table 1)" → "L8".
/// Mixed tokens like "1st" or "R2" are skipped.
fn initials(title: &str) -> String {
    let title = title.strip_prefix("SE - ").unwrap_or(title);
    let title = title.split('(').next().unwrap_or(title);

    let mut out = String::new();
    for token in title.split_whitespace() {
        if is_number(token) {
            out.push_str(token);
        } else if is_word(token) {
            if let Some(first) = token.chars().find(|c| c.is_alphabetic()) {
                out.extend(first.to_uppercase());
            }
        }
    }
    out
}

/// Letters only, hyphens allowed ("Pre-Qualification").
fn is_word(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && token.chars().all(|c| c.is_alphabetic() || c == '-')
}

/// "16" or a fraction like "1/16".
fn is_number(token: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match token.split_once('/') {
        Some((a, b)) => all_digits(a) && all_digits(b),
        None => all_digits(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_titles_use_the_table() {
        assert_eq!(abbreviate("Winners Round 1"), "WR1");
        assert_eq!(abbreviate("  SE - Quarter Finals "), "QF");
        assert_eq!(abbreviate("SE - Final"), "F");
        assert_eq!(abbreviate("Losers Qualification"), "LQ");
    }

    #[test]
    fn unknown_titles_fall_back_to_initials() {
        assert_eq!(abbreviate("Group Stage 2"), "GS2");
        assert_eq!(abbreviate("SE - Last 8"), "L8");
        assert_eq!(abbreviate("Winners Round 4 (Table 1-8)"), "WR4");
        assert_eq!(abbreviate("Pre-Qualification Round 1/16"), "PR1/16");
        assert_eq!(abbreviate("Stage R2"), "S");
        assert_eq!(abbreviate("1st Round"), "R");
    }

    #[test]
    fn titles_without_letters_or_digits_are_empty() {
        assert_eq!(abbreviate(""), "");
        assert_eq!(abbreviate("- -- ()"), "");
    }

    #[test]
    fn tracker_starts_untitled_and_follows_boundaries() {
        let mut t = RoundTracker::new();
        assert_eq!(t.current(), &Round::default());

        t.enter("Winners Round 1");
        assert_eq!(t.current().abbreviation, "WR1");

        t.enter("SE - Final");
        assert_eq!(t.current().title, "SE - Final");
        assert_eq!(t.current().abbreviation, "F");
    }
}
