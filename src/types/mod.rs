//! Core types for Word Lab

mod keyword;
mod snapshot;
mod stats;
mod transform;

pub use keyword::Keyword;
pub use snapshot::AnalysisSnapshot;
pub use stats::TextStats;
pub use transform::TextTransform;
