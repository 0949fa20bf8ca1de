//! Job matching: catalog handling and skill-overlap scoring

pub mod catalog;
pub mod scorer;

pub use catalog::{JobCatalog, JobPosting};
pub use scorer::{JobMatches, MatchResult, MatchScorer};
