mod categorization;
mod polarity;
mod report;
mod review;
mod run_summary;
mod scope;
mod stats;

pub use categorization::{Axis, AxisResult, CategorizationBlock, CategorizationResult};
pub use polarity::{Polarity, PolarityBlock, PolarityResult, PolarityWeights, RawPrediction};
pub use report::{CourseCount, LabelCounts, ScopeReport};
pub use review::{Review, ReviewAnalysis};
pub use run_summary::{RecordFailure, RunSummary};
pub use scope::{PendingKind, ReviewScope};
pub use stats::PipelineStats;
