// tests/extract_e2e.rs
use draw_scrape::config::{ExtractOptions, FlagMode, HistoryFormat, MatchMode, ScoreRequest, Seat};
use draw_scrape::specs::Document;
use draw_scrape::{extract, Error, Report};

const ROUNDS: &str = include_str!("fixtures/draw_rounds.html");

fn request(match_id: Option<&str>, player_id: Option<&str>) -> ScoreRequest {
    ScoreRequest::new(match_id.map(String::from), player_id.map(String::from))
}

fn match_report(out: Report) -> draw_scrape::ScoreReport {
    match out {
        Report::Match(r) => r,
        Report::Player(_) => panic!("expected a match report"),
    }
}

#[test]
fn final_with_first_round_history() {
    let out = extract(ROUNDS, &request(Some("SE20"), Some("3355")), &ExtractOptions::default()).unwrap();
    let report = match_report(out);

    let rec = &report.record;
    assert_eq!(rec.match_id, "SE20");
    assert_eq!(rec.start_time, "18:30");
    assert_eq!(rec.race_to, "9");
    assert_eq!(rec.player1, "Jan Kowalski");
    assert_eq!(rec.flag1, "https://www.epbf.com/img/flags/pl.png");
    assert_eq!(rec.score1, "5");
    assert_eq!(rec.score2, "3");
    assert_eq!(rec.flag2, "https://www.epbf.com/img/flags/at.png");
    assert_eq!(rec.player2, "Lukas Gruber");
    assert_eq!(rec.table, "1");
    assert_eq!(rec.round, None);
    assert_eq!(rec.status, None);

    // Q1 sits before the first round header; W3 is a walkover and W4 does
    // not involve the player
    assert_eq!(
        report.player_history,
        vec![
            "Jan Kowalski 5 - 1 Piet Smit",
            "WR1: Jan Kowalski 7 - 4 Max Mustermann",
            "WR1: Jan Kowalski 7 - 2 Tom Jansen",
        ]
    );
}

#[test]
fn history_is_empty_without_a_player() {
    let out = extract(ROUNDS, &request(Some("W4"), None), &ExtractOptions::default()).unwrap();
    let report = match_report(out);
    assert_eq!(report.record.player1, "Ola Berg");
    assert_eq!(report.record.flag2, "https://www.epbf.com/img/flags/fi.png");
    assert!(report.player_history.is_empty());
}

#[test]
fn target_row_is_not_part_of_history() {
    let out = extract(ROUNDS, &request(Some("W2"), Some("3355")), &ExtractOptions::default()).unwrap();
    let report = match_report(out);
    assert_eq!(report.record.player1, "Tom Jansen");
    assert_eq!(report.record.player2, "Jan Kowalski");
    assert_eq!(
        report.player_history,
        vec![
            "Jan Kowalski 5 - 1 Piet Smit",
            "WR1: Jan Kowalski 7 - 4 Max Mustermann",
            "F: Jan Kowalski 5 - 3 Lukas Gruber",
        ]
    );
}

#[test]
fn unknown_match_is_not_found() {
    let err = extract(ROUNDS, &request(Some("SE21"), Some("3355")), &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MatchNotFound));
    assert_eq!(err.status_code(), 404);
}

#[test]
fn contains_mode_accepts_reformatted_ids() {
    let opts = ExtractOptions { match_mode: MatchMode::Contains, ..ExtractOptions::default() };
    let out = extract(ROUNDS, &request(Some("Gruber"), None), &opts).unwrap();
    let report = match_report(out);
    // the record reports the requested id
    assert_eq!(report.record.match_id, "Gruber");
    assert_eq!(report.record.player1, "Jan Kowalski");
}

#[test]
fn winner_bold_history() {
    let opts = ExtractOptions { history_format: HistoryFormat::WinnerBold, ..ExtractOptions::default() };
    let out = extract(ROUNDS, &request(Some("SE20"), Some("5120")), &opts).unwrap();
    let report = match_report(out);
    assert_eq!(report.player_history, vec!["WR1: Tom Jansen 2 - **7 Jan Kowalski**"]);
}

#[test]
fn player_matches_include_walkovers_but_history_does_not() {
    let opts = ExtractOptions { flag_mode: FlagMode::CountryCode, ..ExtractOptions::default() };
    let out = extract(ROUNDS, &request(None, Some("3355")), &opts).unwrap();
    let Report::Player(p) = out else { panic!("expected player matches") };

    let ids: Vec<&str> = p.all_matches.iter().map(|m| m.match_id.as_str()).collect();
    assert_eq!(ids, vec!["Q1", "W1", "W2", "W3", "SE20"]);
    assert_eq!(p.all_matches[1].flag1, "pl");
    assert_eq!(p.all_matches[1].flag2, "de");
    assert_eq!(
        p.match_history.unwrap(),
        vec![
            "Jan Kowalski 5 - 1 Piet Smit",
            "WR1: Jan Kowalski 7 - 4 Max Mustermann",
            "WR1: Jan Kowalski 7 - 2 Tom Jansen",
            "F: Jan Kowalski 5 - 3 Lukas Gruber",
        ]
    );
}

#[test]
fn json_payload_shape() {
    let out = extract(ROUNDS, &request(Some("SE20"), Some("3355")), &ExtractOptions::default()).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    for key in ["matchId", "raceTo", "player1", "flag1", "score1", "score2", "flag2", "player2", "table", "playerHistory"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }

    let out = extract(ROUNDS, &request(None, Some("3355")), &ExtractOptions::default()).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["allMatches"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["matchHistory"].as_array().map(Vec::len), Some(4));
}

#[test]
fn page_title_and_note_rows_leave_rounds_alone() {
    let doc = Document::parse(ROUNDS).unwrap();
    let titles: Vec<&str> = doc.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["", "Winners Round 1", "SE - Final"]);
}

#[test]
fn side_flag_without_player_links() {
    let req = request(None, None).with_side(Some(Seat::B));
    let Report::Player(p) = extract(ROUNDS, &req, &ExtractOptions::default()).unwrap() else {
        panic!("expected player matches");
    };
    // every readable row has a side B, the walkover included
    let ids: Vec<&str> = p.all_matches.iter().map(|m| m.match_id.as_str()).collect();
    assert_eq!(ids, vec!["Q1", "W1", "W2", "W3", "W4", "SE20"]);
    assert_eq!(
        p.match_history.unwrap(),
        vec![
            "Piet Smit 1 - 5 Jan Kowalski",
            "WR1: Max Mustermann 4 - 7 Jan Kowalski",
            "WR1: Jan Kowalski 7 - 2 Tom Jansen",
            "WR1: Ari Virtanen 5 - 7 Ola Berg",
            "F: Lukas Gruber 3 - 5 Jan Kowalski",
        ]
    );
}
