use crate::{ExerciseDuration, LogEntry, User};

use chrono::Utc;
use googletest::prelude::*;

fn entry(description: &str) -> LogEntry {
    LogEntry::new(
        description.to_string(),
        ExerciseDuration::Minutes(10),
        Utc::now(),
    )
}

#[test]
fn given_new_user_then_count_zero_and_logs_empty() {
    let user = User::new("alice".to_string());

    assert_that!(user.username, eq("alice"));
    assert_that!(user.count, eq(0));
    assert_that!(user.logs, is_empty());
}

#[test]
fn given_user_when_appended_then_count_and_logs_grow_by_one() {
    let mut user = User::new("alice".to_string());

    user.append(entry("run"));

    assert_that!(user.count, eq(1));
    assert_that!(user.logs.len(), eq(1));
}

#[test]
fn given_same_entry_appended_twice_then_two_entries_in_order() {
    let mut user = User::new("alice".to_string());
    let first = entry("run");

    user.append(first.clone());
    user.append(first.clone());
    user.append(entry("swim"));

    assert_that!(user.count, eq(3));
    assert_that!(user.logs[0], eq(&first));
    assert_that!(user.logs[1], eq(&first));
    assert_that!(user.logs[2].description, eq("swim"));
}

#[test]
fn given_users_when_created_then_ids_differ() {
    let a = User::new("alice".to_string());
    let b = User::new("alice".to_string());

    assert_that!(a.id, not(eq(b.id)));
    assert_eq!(a.summary().username, b.summary().username);
}
