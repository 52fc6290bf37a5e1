pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;

use sqlx::migrate::Migrator;

/// Embedded schema migrations for the user store
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Bring the schema up to date
pub async fn migrate(pool: &sqlx::SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
