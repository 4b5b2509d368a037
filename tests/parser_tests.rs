use rpetlog::config::Vocabulary;
use rpetlog::core::parser::{LogParser, ParseSkip};
use rpetlog::models::location::Location;

mod common;
use common::{at, four_type_a, test_config};

#[test]
fn test_parse_basic_line() {
    let cfg = test_config();
    let parser = LogParser::new(&cfg.vocabulary).unwrap();

    let rec = parser
        .parse_line("18/12/2023, 07:10 - X: 07:10 TypeA outside")
        .expect("line should parse");

    assert_eq!(rec.timestamp(), at(2023, 12, 18, 7, 10));
    assert_eq!(rec.label, "TypeA");
    assert_eq!(rec.location, Location::Known("outside".into()));
}

#[test]
fn test_event_time_wins_over_export_time() {
    let cfg = test_config();
    let parser = LogParser::new(&cfg.vocabulary).unwrap();

    let rec = parser
        .parse_line("18/12/2023, 07:25 - X: 07:10 TypeA")
        .unwrap();
    assert_eq!(rec.time_str(), "07:10");
    assert_eq!(rec.location, Location::Unknown);
}

#[test]
fn test_skip_reasons() {
    let cfg = test_config();
    let parser = LogParser::new(&cfg.vocabulary).unwrap();

    assert_eq!(parser.parse_line("   "), Err(ParseSkip::Blank));
    assert_eq!(
        parser.parse_line(
            "18/12/2023, 06:00 - Messages and calls are end-to-end encrypted. No one outside of this chat can read them."
        ),
        Err(ParseSkip::SystemNotice)
    );
    assert_eq!(
        parser.parse_line("18/12/2023, 07:10 X: 07:10 TypeA"),
        Err(ParseSkip::MissingDateSeparator)
    );
    assert_eq!(
        parser.parse_line("18/12/2023, 07:10 - X 07:10 TypeA"),
        Err(ParseSkip::MissingSenderSeparator)
    );
    assert_eq!(
        parser.parse_line("yesterday, 07:10 - X: 07:10 TypeA"),
        Err(ParseSkip::InvalidDate("yesterday".into()))
    );
    assert_eq!(
        parser.parse_line("18/12/2023, 07:10 - X: good morning"),
        Err(ParseSkip::InvalidTime("good".into()))
    );
}

#[test]
fn test_edit_marker_is_stripped() {
    let cfg = test_config();
    let parser = LogParser::new(&cfg.vocabulary).unwrap();

    let rec = parser
        .parse_line("19/12/2023, 12:50 - Dana: 12:45 TypeA TypeB <This message was edited> outside")
        .unwrap();

    assert_eq!(rec.label, "TypeA TypeB");
    assert_eq!(rec.location, Location::Known("outside".into()));
    assert!(cfg.vocabulary.is_combined(&rec.label));
}

#[test]
fn test_message_without_label() {
    let cfg = test_config();
    let parser = LogParser::new(&cfg.vocabulary).unwrap();

    let rec = parser.parse_line("18/12/2023, 07:10 - X: 07:10").unwrap();
    assert_eq!(rec.label, "");
    assert_eq!(rec.location, Location::Unknown);
}

#[test]
fn test_location_found_inside_label() {
    let cfg = test_config();
    let parser = LogParser::new(&cfg.vocabulary).unwrap();

    let rec = parser
        .parse_line("18/12/2023, 07:10 - X: 07:10 TypeA inside again")
        .unwrap();
    assert_eq!(rec.label, "TypeA again");
    assert_eq!(rec.location, Location::Known("inside".into()));
}

#[test]
fn test_hebrew_default_vocabulary() {
    let vocab = Vocabulary::default();
    let parser = LogParser::new(&vocab).unwrap();

    let rec = parser
        .parse_line("\u{200f}18/12/2023, 07:12 - דנה: 07:10 פיפי וקקי בחוץ")
        .unwrap();

    assert_eq!(rec.label, "פיפי וקקי");
    assert_eq!(rec.location, Location::Known("בחוץ".into()));
    assert!(vocab.is_combined(&rec.label));
}

#[test]
fn test_date_formats() {
    let cfg = test_config();
    let parser = LogParser::new(&cfg.vocabulary).unwrap();

    for l in [
        "18/12/23, 07:10 - X: 07:10 TypeA",
        "18.12.2023, 07:10 - X: 07:10 TypeA",
        "[18/12/2023, 07:10:00] - X: 07:10 TypeA",
        "2023-12-18 - X: 7:10 TypeA",
    ] {
        let rec = parser.parse_line(l).unwrap_or_else(|e| panic!("{l}: {e}"));
        assert_eq!(rec.timestamp(), at(2023, 12, 18, 7, 10), "{l}");
    }
}

#[test]
fn test_bad_lines_never_abort_the_batch() {
    let cfg = test_config();
    let parser = LogParser::new(&cfg.vocabulary).unwrap();

    let text = format!(
        "garbage\n{}\n\n32/13/2023, 07:10 - X: 07:10 TypeA\n- : \n\u{feff}",
        four_type_a()
    );
    let records = parser.parse(&text);

    assert_eq!(records.len(), 4);
    // input order is kept
    assert_eq!(records[0].time_str(), "07:10");
    assert_eq!(records[3].time_str(), "19:10");
}
