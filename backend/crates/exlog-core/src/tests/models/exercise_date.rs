use crate::{CoreError, ExerciseDate, format_date};

use chrono::{NaiveDate, TimeZone, Utc};
use googletest::prelude::*;

#[test]
fn given_iso_date_when_parsed_then_date_only() {
    let parsed = ExerciseDate::parse("2023-01-15").unwrap();

    assert_that!(
        parsed,
        eq(ExerciseDate::DateOnly(
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
        ))
    );
}

#[test]
fn given_iso_date_with_padding_whitespace_when_parsed_then_date_only() {
    let parsed = ExerciseDate::parse(" 2023-01-15 ").unwrap();

    assert!(matches!(parsed, ExerciseDate::DateOnly(_)));
}

#[test]
fn given_impossible_calendar_date_when_parsed_then_invalid_date() {
    let result = ExerciseDate::parse("2023-02-30");

    assert!(matches!(result, Err(CoreError::InvalidDate { .. })));
}

#[test]
fn given_rfc3339_with_offset_when_parsed_then_normalized_to_utc() {
    let parsed = ExerciseDate::parse("2023-01-15T23:30:00-05:00").unwrap();

    assert_that!(
        parsed,
        eq(ExerciseDate::Instant(
            Utc.with_ymd_and_hms(2023, 1, 16, 4, 30, 0).unwrap()
        ))
    );
}

#[test]
fn given_naive_date_time_when_parsed_then_read_as_utc() {
    let with_t = ExerciseDate::parse("2023-01-15T10:30:00").unwrap();
    let with_space = ExerciseDate::parse("2023-01-15 10:30:00.250").unwrap();

    assert_that!(
        with_t.to_instant(),
        eq(Utc.with_ymd_and_hms(2023, 1, 15, 10, 30, 0).unwrap())
    );
    assert_that!(with_space.calendar_date(), eq(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()));
}

#[test]
fn given_rfc2822_when_parsed_then_instant() {
    let parsed = ExerciseDate::parse("Sun, 15 Jan 2023 10:30:00 GMT").unwrap();

    assert_that!(
        parsed.to_instant(),
        eq(Utc.with_ymd_and_hms(2023, 1, 15, 10, 30, 0).unwrap())
    );
}

#[test]
fn given_garbage_when_parsed_then_invalid_date_carries_input() {
    let result = ExerciseDate::parse("next tuesday");

    match result {
        Err(CoreError::InvalidDate { value, .. }) => assert_eq!(value, "next tuesday"),
        other => panic!("expected InvalidDate, got {:?}", other),
    }
}

#[test]
fn given_short_year_pattern_when_parsed_then_invalid_date() {
    assert!(ExerciseDate::parse("23-01-15").is_err());
    assert!(ExerciseDate::parse("2023-1-15").is_err());
}

#[test]
fn given_date_only_when_converted_to_instant_then_utc_midnight() {
    let date = ExerciseDate::parse("2024-02-29").unwrap();

    assert_that!(
        date.to_instant(),
        eq(Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap())
    );
}

#[test]
fn given_missing_or_blank_input_when_parse_or_now_then_instant_near_now() {
    let before = Utc::now();
    let absent = ExerciseDate::parse_or_now(None).unwrap();
    let blank = ExerciseDate::parse_or_now(Some("   ")).unwrap();
    let after = Utc::now();

    for value in [absent, blank] {
        assert!(matches!(value, ExerciseDate::Instant(_)));
        assert!(value.to_instant() >= before && value.to_instant() <= after);
    }
}

#[test]
fn given_present_input_when_parse_or_now_then_parsed() {
    let parsed = ExerciseDate::parse_or_now(Some("2023-01-15")).unwrap();

    assert!(matches!(parsed, ExerciseDate::DateOnly(_)));
}

#[test]
fn given_naive_date_time_without_seconds_when_parsed_then_read_as_utc() {
    let with_t = ExerciseDate::parse("2023-01-15T10:30").unwrap();
    let with_space = ExerciseDate::parse("2023-01-15 10:30").unwrap();

    assert_that!(
        with_t.to_instant(),
        eq(Utc.with_ymd_and_hms(2023, 1, 15, 10, 30, 0).unwrap())
    );
    assert_that!(with_space, eq(with_t));
}

#[test]
fn given_display_form_when_parsed_then_same_calendar_date() {
    let parsed = ExerciseDate::parse("Sun Jan 15 2023").unwrap();
    let unpadded = ExerciseDate::parse("Mon Jan 1 2024").unwrap();

    assert_that!(
        parsed,
        eq(ExerciseDate::DateOnly(
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
        ))
    );
    assert_that!(
        unpadded,
        eq(ExerciseDate::DateOnly(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        ))
    );
}

#[test]
fn given_formatted_date_when_parsed_again_then_formats_identically() {
    let original = ExerciseDate::parse("2024-02-29").unwrap();
    let formatted = format_date(&original);

    let reparsed = ExerciseDate::parse(&formatted).unwrap();

    assert_that!(format_date(&reparsed), eq(&formatted));
}

#[test]
fn given_display_form_with_wrong_weekday_when_parsed_then_invalid_date() {
    let result = ExerciseDate::parse("Mon Jan 15 2023");

    assert!(matches!(result, Err(CoreError::InvalidDate { .. })));
}

#[test]
fn given_slash_separated_date_when_parsed_then_date_only() {
    let parsed = ExerciseDate::parse("2023/01/15").unwrap();

    assert_that!(
        parsed,
        eq(ExerciseDate::DateOnly(
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
        ))
    );
}

#[test]
fn given_month_name_date_when_parsed_then_date_only() {
    let full = ExerciseDate::parse("January 15, 2023").unwrap();
    let short = ExerciseDate::parse("Jan 15, 2023").unwrap();

    assert_that!(
        full,
        eq(ExerciseDate::DateOnly(
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
        ))
    );
    assert_that!(short, eq(full));
}
