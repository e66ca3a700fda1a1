//! # insight-polarity
//!
//! Turns an opaque text-classification model into normalized three-way
//! polarity results.
//!
//! The model is built lazily, once per [`PolarityClassifier`] handle, and
//! shared by every batch afterwards.

pub mod classifier;
pub mod labels;
pub mod normalize;
pub mod providers;
pub mod truncate;

pub use classifier::{ModelLoader, PolarityClassifier};
pub use labels::map_label;
pub use normalize::{neutral_default, normalize};
pub use providers::create_model;
pub use truncate::truncate_chars;
