use chrono::{NaiveDate, NaiveDateTime};
use rcheckin::core::checkin::{
    CheckinLogic, CheckinOutcome, CheckinSubmission, ERR_ID_FORMAT, ERR_NAME_BLANK,
};
use rcheckin::core::clock::FixedClock;
use rcheckin::core::window::CheckinWindow;
use rcheckin::store::CheckinStore;
use std::path::Path;

mod common;
use common::setup_test_store;

fn default_window() -> CheckinWindow {
    CheckinWindow::from_bounds("18:30:00", "19:30:00").expect("valid window")
}

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .expect("valid date")
        .and_hms_opt(h, m, s)
        .expect("valid time")
}

fn submission(name: &str, id: &str) -> CheckinSubmission {
    CheckinSubmission {
        name: name.to_string(),
        id_number: id.to_string(),
        latitude: None,
        longitude: None,
    }
}

fn apply(
    store: &CheckinStore,
    when: NaiveDateTime,
    sub: &CheckinSubmission,
) -> CheckinOutcome {
    CheckinLogic::apply(store, &default_window(), &FixedClock(when), sub).expect("pipeline")
}

#[test]
fn accepts_valid_submission_inside_window() {
    let store_path = setup_test_store("accepts_valid_inside");
    let store = CheckinStore::new(&store_path);

    let outcome = apply(&store, at(18, 45, 0), &submission("Jane Doe", "123456"));
    match outcome {
        CheckinOutcome::Accepted { record, message } => {
            assert_eq!(message, "Jane Doe, you are checked in at 18:45:00.");
            assert_eq!(record.name, "Jane Doe");
            assert_eq!(record.id_number, "123456");
            assert_eq!(record.timestamp, "2026-03-02 18:45:00");
            assert_eq!(record.latitude, "N/A");
            assert_eq!(record.longitude, "N/A");
        }
        CheckinOutcome::Rejected { error } => panic!("unexpected rejection: {error}"),
    }

    let records = store.load_all().expect("load");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Jane Doe");
    assert_eq!(records[0].timestamp, "2026-03-02 18:45:00");
}

#[test]
fn rejects_malformed_ids_and_writes_nothing() {
    let store_path = setup_test_store("rejects_malformed_ids");
    let store = CheckinStore::new(&store_path);

    // Letters, wrong lengths, empty, and non-ASCII digits all fail.
    for bad_id in ["12a456", "12345", "1234567", "", "12 456", "１２３４５６"] {
        let outcome = apply(&store, at(18, 45, 0), &submission("Jane Doe", bad_id));
        assert_eq!(
            outcome,
            CheckinOutcome::Rejected {
                error: ERR_ID_FORMAT.to_string()
            },
            "id {bad_id:?} should be rejected"
        );
    }

    // No append happened, so the file was never created.
    assert!(!Path::new(&store_path).exists());
    assert_eq!(store.load_all().expect("load").len(), 0);
}

#[test]
fn id_is_trimmed_before_validation() {
    let store_path = setup_test_store("id_trimmed");
    let store = CheckinStore::new(&store_path);

    let outcome = apply(&store, at(19, 0, 0), &submission("Jane Doe", "  123456  "));
    match outcome {
        CheckinOutcome::Accepted { record, .. } => assert_eq!(record.id_number, "123456"),
        CheckinOutcome::Rejected { error } => panic!("unexpected rejection: {error}"),
    }
}

#[test]
fn rejects_blank_name_after_valid_id() {
    let store_path = setup_test_store("rejects_blank_name");
    let store = CheckinStore::new(&store_path);

    for blank in ["", "   ", "\t"] {
        let outcome = apply(&store, at(18, 45, 0), &submission(blank, "123456"));
        assert_eq!(
            outcome,
            CheckinOutcome::Rejected {
                error: ERR_NAME_BLANK.to_string()
            }
        );
    }
    assert!(!Path::new(&store_path).exists());
}

#[test]
fn id_error_wins_when_both_id_and_name_are_invalid() {
    let store_path = setup_test_store("id_error_first");
    let store = CheckinStore::new(&store_path);

    let outcome = apply(&store, at(18, 45, 0), &submission("", "12a456"));
    assert_eq!(
        outcome,
        CheckinOutcome::Rejected {
            error: ERR_ID_FORMAT.to_string()
        }
    );
}

#[test]
fn rejects_outside_window_with_configured_bounds_in_message() {
    let store_path = setup_test_store("rejects_outside_window");
    let store = CheckinStore::new(&store_path);

    for when in [at(18, 29, 59), at(19, 30, 1), at(20, 0, 0), at(9, 0, 0)] {
        let outcome = apply(&store, when, &submission("Jane Doe", "123456"));
        assert_eq!(
            outcome,
            CheckinOutcome::Rejected {
                error: "Check-in is only allowed between 6:30 PM and 7:30 PM.".to_string()
            },
            "time {when} should fall outside the window"
        );
    }
    assert!(!Path::new(&store_path).exists());
}

#[test]
fn window_bounds_are_inclusive() {
    let store_path = setup_test_store("window_bounds_inclusive");
    let store = CheckinStore::new(&store_path);

    for (when, id) in [(at(18, 30, 0), "111111"), (at(19, 30, 0), "222222")] {
        let outcome = apply(&store, when, &submission("Jane Doe", id));
        assert!(
            matches!(outcome, CheckinOutcome::Accepted { .. }),
            "time {when} should be accepted"
        );
    }
    assert_eq!(store.count().expect("count"), 2);
}

#[test]
fn sub_second_after_window_end_is_rejected() {
    let store_path = setup_test_store("sub_second_after_end");
    let store = CheckinStore::new(&store_path);

    let when = NaiveDate::from_ymd_opt(2026, 3, 2)
        .expect("valid date")
        .and_hms_milli_opt(19, 30, 0, 500)
        .expect("valid time");
    let outcome = CheckinLogic::apply(
        &store,
        &default_window(),
        &FixedClock(when),
        &submission("Jane Doe", "123456"),
    )
    .expect("pipeline");

    assert!(matches!(outcome, CheckinOutcome::Rejected { .. }));
}

#[test]
fn name_is_trimmed_and_coordinates_pass_through() {
    let store_path = setup_test_store("name_trim_coords");
    let store = CheckinStore::new(&store_path);

    let sub = CheckinSubmission {
        name: "  Jane Doe  ".to_string(),
        id_number: "123456".to_string(),
        latitude: Some(" 45.464211 ".to_string()),
        longitude: Some("9.191383".to_string()),
    };
    let outcome =
        CheckinLogic::apply(&store, &default_window(), &FixedClock(at(18, 45, 0)), &sub)
            .expect("pipeline");

    match outcome {
        CheckinOutcome::Accepted { record, message } => {
            assert!(message.starts_with("Jane Doe,"));
            assert_eq!(record.name, "Jane Doe");
            assert_eq!(record.latitude, "45.464211");
            assert_eq!(record.longitude, "9.191383");
        }
        CheckinOutcome::Rejected { error } => panic!("unexpected rejection: {error}"),
    }
}

#[test]
fn blank_coordinate_fields_are_stored_as_placeholder() {
    let store_path = setup_test_store("blank_coords_placeholder");
    let store = CheckinStore::new(&store_path);

    let sub = CheckinSubmission {
        name: "Jane Doe".to_string(),
        id_number: "123456".to_string(),
        latitude: Some("".to_string()),
        longitude: Some("   ".to_string()),
    };
    let outcome =
        CheckinLogic::apply(&store, &default_window(), &FixedClock(at(18, 45, 0)), &sub)
            .expect("pipeline");

    match outcome {
        CheckinOutcome::Accepted { record, .. } => {
            assert_eq!(record.latitude, "N/A");
            assert_eq!(record.longitude, "N/A");
        }
        CheckinOutcome::Rejected { error } => panic!("unexpected rejection: {error}"),
    }
}

#[test]
fn repeated_checkins_append_in_order() {
    let store_path = setup_test_store("repeated_appends");
    let store = CheckinStore::new(&store_path);

    for (minute, id) in [(31u32, "111111"), (40, "222222"), (55, "333333")] {
        let outcome = apply(&store, at(18, minute, 0), &submission("Jane Doe", id));
        assert!(matches!(outcome, CheckinOutcome::Accepted { .. }));
    }

    let records = store.load_all().expect("load");
    let ids: Vec<&str> = records.iter().map(|r| r.id_number.as_str()).collect();
    assert_eq!(ids, ["111111", "222222", "333333"]);
}

#[test]
fn window_parse_accepts_short_and_full_forms() {
    let window = CheckinWindow::parse("18:30-19:30").expect("parse");
    assert_eq!(window.label_12h(), "6:30 PM - 7:30 PM");

    let window = CheckinWindow::parse("08:00:00 - 08:05:30").expect("parse");
    assert_eq!(window.to_string(), "08:00:00-08:05:30");
}

#[test]
fn window_rejects_inverted_and_garbage_bounds() {
    assert!(CheckinWindow::parse("19:30:00-18:30:00").is_err());
    assert!(CheckinWindow::parse("18:30:00").is_err());
    assert!(CheckinWindow::from_bounds("25:00:00", "26:00:00").is_err());
    // Equal bounds are a valid one-second window.
    assert!(CheckinWindow::from_bounds("18:30:00", "18:30:00").is_ok());
}
