//! # insight-core
//!
//! Foundation crate for the review insight pipeline.
//! Defines the data model, gateway and model traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::InsightConfig;
pub use errors::{InsightError, InsightResult};
pub use models::{
    Axis, AxisResult, CategorizationResult, PendingKind, Polarity, PolarityResult,
    PolarityWeights, Review, ReviewScope, RunSummary,
};
