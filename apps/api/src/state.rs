use std::sync::Arc;

use crate::recommendation::RecommendationContext;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Catalog, tips and model artifacts. Immutable after startup.
    pub engine: Arc<RecommendationContext>,
}
