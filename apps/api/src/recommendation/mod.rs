// Recommendation engine
// Implements: catalog validation, weighted match scoring, ranking, improvement advice.
// Group prediction lives in `inference` and is advisory only; it never filters careers.

pub mod advisor;
pub mod catalog;
pub mod engine;
pub mod handlers;
pub mod ranking;
pub mod scoring;

pub use engine::RecommendationContext;
