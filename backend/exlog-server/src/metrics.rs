use metrics::counter;

/// Metrics collector for the REST API
#[derive(Clone)]
pub struct ApiMetrics {
    prefix: &'static str,
}

impl ApiMetrics {
    pub fn new() -> Self {
        Self { prefix: "exlog_api" }
    }

    pub fn user_created(&self) {
        counter!(format!("{}.users.created", self.prefix)).increment(1);
    }

    pub fn exercise_appended(&self) {
        counter!(format!("{}.exercises.appended", self.prefix)).increment(1);
    }

    /// Record a log query and how many entries it returned
    pub fn log_queried(&self, returned: usize) {
        counter!(format!("{}.logs.queried", self.prefix)).increment(1);
        counter!(format!("{}.logs.entries_returned", self.prefix)).increment(returned as u64);
    }

    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}
