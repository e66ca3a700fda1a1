//! # insight-lexicon
//!
//! Keyword lexicon scoring along three independent axes.
//! Pure and deterministic: no model, no I/O.

pub mod lexicon;
pub mod scorer;

pub use lexicon::{AxisLexicon, Lexicon, LexiconBuilder};
pub use scorer::LexiconScorer;
