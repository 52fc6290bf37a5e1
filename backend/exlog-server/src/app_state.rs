use crate::ApiMetrics;

use exlog_config::ApiConfig;

use std::path::PathBuf;

use sqlx::SqlitePool;

/// Shared state handed to every HTTP handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub api_config: ApiConfig,
    pub metrics: ApiMetrics,
    /// Static assets served for paths no route matches
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(pool: SqlitePool, api_config: ApiConfig) -> Self {
        Self {
            pool,
            api_config,
            metrics: ApiMetrics::new(),
            static_dir: None,
        }
    }

    pub fn with_static_dir(mut self, static_dir: Option<PathBuf>) -> Self {
        self.static_dir = static_dir;
        self
    }
}
