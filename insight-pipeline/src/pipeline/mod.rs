//! Run stages: Fetching → Scoring → Persisting → Done.

pub mod persist;
pub mod score;

use std::fmt;

/// Where a run currently is. Emitted as the `stage` field of debug events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Fetching,
    Scoring,
    Persisting,
    Done,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunStage::Fetching => "fetching",
            RunStage::Scoring => "scoring",
            RunStage::Persisting => "persisting",
            RunStage::Done => "done",
        })
    }
}
