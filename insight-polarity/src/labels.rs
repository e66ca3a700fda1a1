//! Raw model label vocabulary.
//!
//! Models disagree on how they name their classes. The table below covers
//! the spellings seen in practice; anything else is treated as neutral.

use insight_core::models::Polarity;
use tracing::debug;

const LABEL_TABLE: &[(&str, Polarity)] = &[
    ("POSITIVE", Polarity::Positive),
    ("POS", Polarity::Positive),
    ("LABEL_2", Polarity::Positive),
    ("NEGATIVE", Polarity::Negative),
    ("NEG", Polarity::Negative),
    ("LABEL_0", Polarity::Negative),
    ("NEUTRAL", Polarity::Neutral),
    ("NEU", Polarity::Neutral),
    ("LABEL_1", Polarity::Neutral),
];

/// Map a raw model label to a polarity. ASCII case is ignored.
/// Unrecognized labels map to [`Polarity::Neutral`].
pub fn map_label(raw: &str) -> Polarity {
    let key = raw.trim().to_ascii_uppercase();
    match LABEL_TABLE.iter().find(|(name, _)| *name == key) {
        Some((_, polarity)) => *polarity,
        None => {
            debug!(label = raw, "unrecognized model label, treating as neutral");
            Polarity::Neutral
        }
    }
}
