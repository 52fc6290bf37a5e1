use crate::{DbError, Result as DbErrorResult};

use exlog_core::{ExerciseDuration, LogEntry, User, UserSummary};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct UserRow {
    id: String,
    username: String,
    exercise_count: i64,
}

#[derive(FromRow)]
struct LogEntryRow {
    description: String,
    duration: Option<i64>,
    date: i64,
}

/// Store accessor for users and the exercise log each one owns.
///
/// A user is loaded and saved as a whole: `save` rewrites the user row and the full
/// log inside one transaction. There is no version check, the last save wins.
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All users, oldest first
    pub async fn list(&self) -> DbErrorResult<Vec<UserSummary>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, username, exercise_count
              FROM users
              ORDER BY created_at ASC, rowid ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|r| {
                Ok(UserSummary {
                    id: parse_user_id(&r.id)?,
                    username: r.username,
                })
            })
            .collect()
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
              INSERT INTO users (id, username, exercise_count, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(user.count)
        .bind(Utc::now().timestamp_millis())
        .execute(&mut *tx)
        .await?;

        Self::insert_logs(&mut tx, user).await?;
        tx.commit().await?;

        Ok(())
    }

    /// Load a user with its full log in append order.
    /// `Ok(None)` means no such user; store failures are `Err`.
    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, username, exercise_count
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let log_rows = sqlx::query_as::<_, LogEntryRow>(
            r#"
              SELECT description, duration, date
              FROM exercise_logs
              WHERE user_id = ?
              ORDER BY position ASC
              "#,
        )
        .bind(&id_str)
        .fetch_all(&self.pool)
        .await?;

        let logs = log_rows
            .into_iter()
            .map(|r| {
                Ok(LogEntry {
                    description: r.description,
                    duration: ExerciseDuration::from(r.duration),
                    date: date_from_millis(r.date)?,
                })
            })
            .collect::<DbErrorResult<Vec<_>>>()?;

        Ok(Some(User {
            id: parse_user_id(&row.id)?,
            username: row.username,
            count: row.exercise_count,
            logs,
        }))
    }

    /// Persist the whole user, replacing the stored log with `user.logs`.
    ///
    /// # Errors
    /// `DbError::UserMissing` if the user row is gone; any SQL failure rolls the
    /// transaction back.
    pub async fn save(&self, user: User) -> DbErrorResult<User> {
        let id = user.id.to_string();
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
              UPDATE users
              SET username = ?, exercise_count = ?
              WHERE id = ?
              "#,
        )
        .bind(&user.username)
        .bind(user.count)
        .bind(&id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(DbError::UserMissing {
                user_id: id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        sqlx::query("DELETE FROM exercise_logs WHERE user_id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await?;

        Self::insert_logs(&mut tx, &user).await?;
        tx.commit().await?;

        Ok(user)
    }

    async fn insert_logs(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        user: &User,
    ) -> DbErrorResult<()> {
        let user_id = user.id.to_string();

        for (position, entry) in user.logs.iter().enumerate() {
            sqlx::query(
                r#"
                  INSERT INTO exercise_logs (user_id, position, description, duration, date)
                  VALUES (?, ?, ?, ?, ?)
                  "#,
            )
            .bind(&user_id)
            .bind(position as i64)
            .bind(&entry.description)
            .bind(entry.duration.minutes())
            .bind(entry.date.timestamp_millis())
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}

#[track_caller]
fn parse_user_id(value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::CorruptRow {
        table: "users",
        message: format!("invalid id '{}': {}", value, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn date_from_millis(millis: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::CorruptRow {
        table: "exercise_logs",
        message: format!("date out of range: {}", millis),
        location: ErrorLocation::from(Location::caller()),
    })
}
