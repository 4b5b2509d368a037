use rpetlog::core::logic::Core;
use rpetlog::core::predictor::{Predictor, majority_location};
use rpetlog::errors::AppError;
use rpetlog::models::event_kind::EventKind;
use rpetlog::models::event_record::EventRecord;
use rpetlog::models::location::Location;
use rpetlog::models::prediction::Outcome;
use rpetlog::utils::time::minutes_between;

mod common;
use common::{at, four_type_a, line, test_config};

fn parse(text: &str) -> Vec<EventRecord> {
    Core::parse(text, &test_config()).expect("parser")
}

#[test]
fn test_regular_series_forecast() {
    let cfg = test_config();
    let records = parse(&four_type_a());
    let predictor = Predictor::new(&cfg.predictor, &cfg.vocabulary, cfg.seed);

    let p = predictor
        .predict(&records, EventKind::Pee, at(2023, 12, 18, 20, 0))
        .expect("prediction");

    assert_eq!(p.at, at(2023, 12, 18, 23, 10));
    assert_eq!(p.weekday(), "Monday");
    assert_eq!(p.location, Some(Location::Known("outside".into())));
    assert_eq!(p.last_event, at(2023, 12, 18, 19, 10));
    assert!(!p.is_stale);
}

#[test]
fn test_empty_input_is_no_data() {
    let cfg = test_config();
    let predictor = Predictor::new(&cfg.predictor, &cfg.vocabulary, cfg.seed);

    let err = predictor
        .predict(&[], EventKind::Pee, at(2023, 12, 18, 20, 0))
        .unwrap_err();
    assert!(matches!(err, AppError::NoData));
}

#[test]
fn test_unknown_kind_has_no_valid_events() {
    let cfg = test_config();
    let records = parse(&four_type_a());
    let predictor = Predictor::new(&cfg.predictor, &cfg.vocabulary, cfg.seed);

    let err = predictor
        .predict(&records, EventKind::Poop, at(2023, 12, 18, 20, 0))
        .unwrap_err();
    assert!(matches!(err, AppError::NoValidEvents(_)));
}

#[test]
fn test_single_record_is_insufficient_history() {
    let text = format!("{}\n{}", four_type_a(), line("18/12/2023", "09:00", "TypeB outside"));
    let forecast = Core::forecast(&parse(&text), &test_config(), at(2023, 12, 18, 20, 0), 42);

    let poop = forecast
        .outcomes
        .iter()
        .find(|o| o.kind() == EventKind::Poop)
        .expect("poop outcome");

    match poop {
        Outcome::Failed { message, .. } => assert!(message.contains("Not enough poop events")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn test_past_prediction_moves_to_the_future() {
    let cfg = test_config();
    let records = parse(&four_type_a());
    let predictor = Predictor::new(&cfg.predictor, &cfg.vocabulary, cfg.seed);
    let now = at(2023, 12, 19, 6, 0);

    let p = predictor.predict(&records, EventKind::Pee, now).unwrap();

    assert_eq!(p.at, at(2023, 12, 19, 7, 0));
    // last record is from the previous day
    assert!(p.is_stale);
}

#[test]
fn test_stale_input_surfaces_warning() {
    let now = at(2023, 12, 19, 15, 10); // 20 hours after the last event
    let forecast = Core::forecast(&parse(&four_type_a()), &test_config(), now, 42);

    let pee = forecast
        .outcomes
        .iter()
        .find_map(Outcome::prediction)
        .expect("pee prediction");
    assert!(pee.is_stale);
    assert!(pee.at > now);

    let warning = forecast.stale_warning.expect("warning");
    assert!(warning.contains("18/12/2023 19:10"));
}

#[test]
fn test_recent_input_has_no_warning() {
    let forecast = Core::forecast(
        &parse(&four_type_a()),
        &test_config(),
        at(2023, 12, 18, 20, 0),
        42,
    );
    assert!(forecast.stale_warning.is_none());
}

#[test]
fn test_interval_cap() {
    let text = [
        line("18/12/2023", "00:00", "TypeB"),
        line("18/12/2023", "10:00", "TypeB"),
        line("18/12/2023", "20:00", "TypeB"),
        line("19/12/2023", "06:00", "TypeB"),
    ]
    .join("\n");
    let cfg = test_config();
    let predictor = Predictor::new(&cfg.predictor, &cfg.vocabulary, cfg.seed);

    let p = predictor
        .predict(&parse(&text), EventKind::Poop, at(2023, 12, 19, 6, 30))
        .unwrap();

    assert_eq!(p.at, at(2023, 12, 19, 15, 0));
    assert_eq!(p.location, None);
}

#[test]
fn test_pee_offset_floor() {
    let text = [
        line("18/12/2023", "10:00", "TypeA"),
        line("18/12/2023", "10:01", "TypeA"),
        line("18/12/2023", "10:02", "TypeA"),
    ]
    .join("\n");
    let cfg = test_config();
    let predictor = Predictor::new(&cfg.predictor, &cfg.vocabulary, cfg.seed);

    let p = predictor
        .predict(&parse(&text), EventKind::Pee, at(2023, 12, 18, 10, 5))
        .unwrap();

    assert_eq!(p.at, at(2023, 12, 18, 11, 2));
}

#[test]
fn test_combined_event_pulls_forecast_earlier() {
    let text = [
        line("18/12/2023", "08:00", "TypeA outside"),
        line("18/12/2023", "12:00", "TypeA outside"),
        line("18/12/2023", "14:00", "TypeA TypeB outside"),
    ]
    .join("\n");
    let cfg = test_config();
    let predictor = Predictor::new(&cfg.predictor, &cfg.vocabulary, cfg.seed);
    let records = parse(&text);

    // ensemble says 17:00, last combined event + 2h says 16:00
    let p = predictor
        .predict(&records, EventKind::Pee, at(2023, 12, 18, 14, 30))
        .unwrap();
    assert_eq!(p.at, at(2023, 12, 18, 16, 0));

    // combined candidate already past: now + 1h (17:30) loses to the ensemble
    let p = predictor
        .predict(&records, EventKind::Pee, at(2023, 12, 18, 16, 30))
        .unwrap();
    assert_eq!(p.at, at(2023, 12, 18, 17, 0));
}

#[test]
fn test_combined_event_counts_for_both_kinds() {
    let text = [
        line("18/12/2023", "08:00", "TypeB"),
        line("18/12/2023", "14:00", "TypeA TypeB"),
    ]
    .join("\n");
    let cfg = test_config();
    let predictor = Predictor::new(&cfg.predictor, &cfg.vocabulary, cfg.seed);
    let records = parse(&text);

    assert_eq!(predictor.series(&records, EventKind::Poop).len(), 2);
    assert_eq!(predictor.series(&records, EventKind::Pee).len(), 1);
}

#[test]
fn test_prediction_is_future_and_capped() {
    let cfg = test_config();
    let predictor = Predictor::new(&cfg.predictor, &cfg.vocabulary, cfg.seed);

    let series: [&[&str]; 4] = [
        &["06:00", "07:30", "11:00", "12:10", "16:45", "18:00", "23:30"],
        &["00:05", "09:40", "19:55"],
        &["05:00", "05:20", "05:45", "06:30", "07:00", "07:10", "08:00"],
        &["01:00", "02:00", "12:30", "13:00", "22:50", "23:59"],
    ];

    for times in series {
        let text = times
            .iter()
            .map(|t| line("20/12/2023", t, "TypeA"))
            .collect::<Vec<_>>()
            .join("\n");
        let records = parse(&text);
        let last = records.iter().map(EventRecord::timestamp).max().unwrap();
        let now = last + chrono::Duration::minutes(1);

        let p = predictor.predict(&records, EventKind::Pee, now).unwrap();
        let offset = minutes_between(last, p.at);

        assert!(p.at > now, "{times:?}");
        assert!((60..=540).contains(&offset), "{times:?}: offset {offset}");
    }
}

#[test]
fn test_same_input_same_output() {
    let text = [
        "06:00", "07:30", "11:00", "12:10", "16:45", "18:00", "20:30",
    ]
    .iter()
    .map(|t| line("20/12/2023", t, "TypeA TypeB inside"))
    .collect::<Vec<_>>()
    .join("\n");
    let cfg = test_config();
    let now = at(2023, 12, 20, 21, 0);

    let first = Core::run_cycle(&text, &cfg, now, 7).unwrap();
    let second = Core::run_cycle(&text, &cfg, now, 7).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_seeded_jitter_is_bounded_and_repeatable() {
    let mut cfg = test_config();
    let records = parse(&four_type_a());
    let now = at(2023, 12, 18, 20, 0);

    let plain = Predictor::new(&cfg.predictor, &cfg.vocabulary, 1)
        .predict(&records, EventKind::Pee, now)
        .unwrap();

    cfg.predictor.jitter_minutes = 15;
    let predictor = Predictor::new(&cfg.predictor, &cfg.vocabulary, 1);
    let a = predictor.predict(&records, EventKind::Pee, now).unwrap();
    let b = predictor.predict(&records, EventKind::Pee, now).unwrap();

    assert_eq!(a, b);
    assert!(minutes_between(plain.at, a.at).abs() <= 15);
}

#[test]
fn test_majority_location_ties_go_to_first_seen() {
    let text = [
        line("18/12/2023", "07:00", "TypeA"),
        line("18/12/2023", "08:00", "TypeA inside"),
        line("18/12/2023", "09:00", "TypeA outside"),
        line("18/12/2023", "10:00", "TypeA outside"),
        line("18/12/2023", "11:00", "TypeA inside"),
    ]
    .join("\n");
    let records = parse(&text);
    let refs: Vec<&EventRecord> = records.iter().collect();

    assert_eq!(
        majority_location(&refs),
        Some(Location::Known("inside".into()))
    );
    assert_eq!(majority_location(&refs[..1]), None);
}
