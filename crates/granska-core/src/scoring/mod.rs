pub mod engine;
pub mod outcome;

pub use engine::{estimate_shortlist, radar_data, score_ats, score_job_fit, shortlist_bucket};
pub use outcome::{CompositeKind, CompositeScore, Criterion, Grade, RadarCategory, ShortlistEstimate};
