//! Resume matcher library
//!
//! Turns resume documents into candidate profiles and ranks job postings against a
//! candidate's skills.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{ErrorKind, Result, ResumeMatcherError};
pub use input::InputManager;
pub use matching::{JobCatalog, JobMatches, JobPosting, MatchResult, MatchScorer};
pub use processing::document::{ExtractedText, RawDocument};
pub use processing::profile::{CandidateProfile, ProfileAssembler};
