use std::fmt;

use serde::{Deserialize, Serialize};

/// Narrowing applied by the gateway when selecting pending reviews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewScope {
    #[default]
    All,
    /// Reviews of a single teacher.
    BySubject(i64),
    /// Reviews whose course name contains the pattern, case-insensitively.
    ByCourse(String),
}

impl fmt::Display for ReviewScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewScope::All => f.write_str("all"),
            ReviewScope::BySubject(id) => write!(f, "subject:{id}"),
            ReviewScope::ByCourse(name) => write!(f, "course:{name}"),
        }
    }
}

/// Which result block a pending query looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingKind {
    Polarity,
    Categorization,
}
