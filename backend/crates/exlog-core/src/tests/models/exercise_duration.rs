use crate::ExerciseDuration;

use googletest::prelude::*;

#[test]
fn given_plain_integer_when_parsed_then_minutes() {
    assert_that!(ExerciseDuration::parse("30"), eq(ExerciseDuration::Minutes(30)));
}

#[test]
fn given_integer_prefix_when_parsed_then_trailing_text_ignored() {
    assert_that!(ExerciseDuration::parse("45min"), eq(ExerciseDuration::Minutes(45)));
    assert_that!(ExerciseDuration::parse("12.9"), eq(ExerciseDuration::Minutes(12)));
    assert_that!(ExerciseDuration::parse("  7 "), eq(ExerciseDuration::Minutes(7)));
}

#[test]
fn given_signed_input_when_parsed_then_sign_applied() {
    assert_that!(ExerciseDuration::parse("-5"), eq(ExerciseDuration::Minutes(-5)));
    assert_that!(ExerciseDuration::parse("+5"), eq(ExerciseDuration::Minutes(5)));
}

#[test]
fn given_non_numeric_input_when_parsed_then_invalid() {
    assert_that!(ExerciseDuration::parse("abc"), eq(ExerciseDuration::Invalid));
    assert_that!(ExerciseDuration::parse(""), eq(ExerciseDuration::Invalid));
    assert_that!(ExerciseDuration::parse("-"), eq(ExerciseDuration::Invalid));
}

#[test]
fn given_durations_when_serialized_then_number_or_null() {
    let valid = serde_json::to_value(ExerciseDuration::Minutes(30)).unwrap();
    let invalid = serde_json::to_value(ExerciseDuration::Invalid).unwrap();

    assert_eq!(valid, serde_json::json!(30));
    assert_eq!(invalid, serde_json::Value::Null);
}

#[test]
fn given_stored_value_when_converted_then_null_is_invalid() {
    assert_that!(ExerciseDuration::from(Some(20)), eq(ExerciseDuration::Minutes(20)));
    assert_that!(ExerciseDuration::from(None), eq(ExerciseDuration::Invalid));
    assert!(ExerciseDuration::Invalid.minutes().is_none());
}
