use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] exlog_config::ConfigError),

    #[error("Database error: {0}")]
    Db(#[from] exlog_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to prepare {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
