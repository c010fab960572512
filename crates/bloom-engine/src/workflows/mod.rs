pub mod hunt;
pub mod intake;

pub use hunt::{rank_deals, DealCandidate, HuntCriteria, HuntReport, ScoredDeal};
pub use intake::{IntakeError, MetricsImporter};
