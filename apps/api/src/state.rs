use std::sync::Arc;

use crate::job_fit::analyzer::JobFitAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the cached scoring rules; shared so the cache outlives each request.
    pub analyzer: Arc<JobFitAnalyzer>,
}
