//! # insight-pipeline
//!
//! The batch orchestrator. A run selects a page of pending reviews, scores
//! them with the polarity classifier and the lexicon at the same time, and
//! writes both results back per review.

pub mod backfill;
pub mod engine;
pub mod pipeline;

pub use engine::Processor;
pub use pipeline::RunStage;
