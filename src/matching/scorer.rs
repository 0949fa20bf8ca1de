//! Skill-overlap scoring of candidates against job postings

use crate::config::MatchingConfig;
use crate::error::{Result, ResumeMatcherError};
use crate::matching::catalog::{JobCatalog, JobPosting};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub match_score: f64,
    pub required_skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Ranked matches, shaped the way the matching endpoint returns them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobMatches {
    pub matches: Vec<MatchResult>,
}

pub struct MatchScorer {
    min_score: f64,
    max_results: usize,
}

impl MatchScorer {
    pub fn new() -> Self {
        Self {
            min_score: 30.0,
            max_results: 10,
        }
    }

    pub fn from_config(config: &MatchingConfig) -> Self {
        Self {
            min_score: config.min_score,
            max_results: config.max_results,
        }
    }

    /// Score every posting, keep those strictly above the threshold and return the best
    /// ones, highest first. Equal scores keep catalog order.
    pub fn rank(&self, candidate_skills: &[String], catalog: &JobCatalog) -> Result<JobMatches> {
        let candidate: Vec<&str> = candidate_skills
            .iter()
            .map(|skill| skill.trim())
            .filter(|skill| !skill.is_empty())
            .collect();

        if candidate.is_empty() {
            return Err(ResumeMatcherError::InvalidInput("No skills provided".to_string()));
        }

        let candidate_lower = lowercase_set(&candidate);

        let mut matches: Vec<MatchResult> = catalog
            .postings()
            .iter()
            .map(|posting| self.score_posting(&candidate, &candidate_lower, posting))
            .filter(|result| result.match_score > self.min_score)
            .collect();

        matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        matches.truncate(self.max_results);

        debug!("{} of {} postings matched", matches.len(), catalog.len());
        Ok(JobMatches { matches })
    }

    fn score_posting(&self, candidate: &[&str], candidate_lower: &HashSet<String>, posting: &JobPosting) -> MatchResult {
        let required: Vec<&str> = posting.required_skills.iter().map(String::as_str).collect();
        let required_lower = lowercase_set(&required);

        let mut seen = HashSet::new();
        let matching_skills = candidate
            .iter()
            .filter(|skill| required_lower.contains(&skill.to_lowercase()))
            .filter(|skill| seen.insert(skill.to_lowercase()))
            .map(|skill| skill.to_string())
            .collect();

        let missing_skills = posting
            .required_skills
            .iter()
            .filter(|skill| !candidate_lower.contains(&skill.to_lowercase()))
            .cloned()
            .collect();

        MatchResult {
            job_id: posting.id.clone(),
            job_title: posting.title.clone(),
            company: posting.company.clone(),
            match_score: overlap_score(candidate_lower, &required_lower),
            required_skills: posting.required_skills.clone(),
            matching_skills,
            missing_skills,
        }
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Percentage of `required` covered by `candidate`, rounded to two decimals with
/// ties going to the even hundredth. Both sets must already be lower-cased.
pub fn overlap_score(candidate: &HashSet<String>, required: &HashSet<String>) -> f64 {
    if candidate.is_empty() || required.is_empty() {
        return 0.0;
    }

    let overlap = required.intersection(candidate).count();
    let total = required.len();

    // Hundredths of a percent, computed exactly so ties are detectable.
    let scaled = overlap * 10_000;
    let (quotient, remainder) = (scaled / total, scaled % total);
    let round_up = match (2 * remainder).cmp(&total) {
        Ordering::Greater => true,
        Ordering::Equal => quotient % 2 == 1,
        Ordering::Less => false,
    };
    let hundredths = if round_up { quotient + 1 } else { quotient };

    hundredths as f64 / 100.0
}

/// Case-insensitive score between two label lists.
pub fn match_score(candidate_skills: &[String], required_skills: &[String]) -> f64 {
    let candidate: Vec<&str> = candidate_skills.iter().map(String::as_str).collect();
    let required: Vec<&str> = required_skills.iter().map(String::as_str).collect();
    overlap_score(&lowercase_set(&candidate), &lowercase_set(&required))
}

fn lowercase_set(skills: &[&str]) -> HashSet<String> {
    skills.iter().map(|skill| skill.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partial_overlap_score() {
        let required = skills(&["Python", "JavaScript", "React", "SQL", "REST APIs", "Git"]);
        assert_eq!(match_score(&skills(&["Python", "SQL"]), &required), 33.33);
    }

    #[test]
    fn test_half_hundredths_round_to_even() {
        let labels: Vec<String> = (0..32).map(|i| format!("skill{}", i)).collect();
        let required: HashSet<String> = labels.iter().cloned().collect();

        // 13/32 = 40.625% and 11/32 = 34.375%
        let candidate: HashSet<String> = labels[..13].iter().cloned().collect();
        assert_eq!(overlap_score(&candidate, &required), 40.62);
        let candidate: HashSet<String> = labels[..11].iter().cloned().collect();
        assert_eq!(overlap_score(&candidate, &required), 34.38);

        let required = skills(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        assert_eq!(match_score(&skills(&["a", "b", "c"]), &required), 30.0);
    }

    #[test]
    fn test_score_bounds() {
        let required = skills(&["Rust", "Go"]);
        assert_eq!(match_score(&skills(&["rust", "GO", "Python"]), &required), 100.0);
        assert_eq!(match_score(&skills(&["Python"]), &required), 0.0);
        assert_eq!(match_score(&skills(&["Python"]), &[]), 0.0);
        assert_eq!(match_score(&[], &required), 0.0);
    }

    #[test]
    fn test_rank_sample_catalog() {
        let result = MatchScorer::new()
            .rank(&skills(&["Python", "SQL"]), &JobCatalog::sample())
            .unwrap();

        assert_eq!(result.matches.len(), 1);
        let top = &result.matches[0];
        assert_eq!(top.job_id, "1");
        assert_eq!(top.match_score, 33.33);
        assert_eq!(top.matching_skills, vec!["Python", "SQL"]);
        assert_eq!(top.missing_skills, vec!["JavaScript", "React", "REST APIs", "Git"]);
    }

    #[test]
    fn test_threshold_is_strict() {
        // 2 of 6 required skills is 33.33, 2 of 7 is 28.57 and drops out.
        let catalog = JobCatalog::new(vec![
            JobPosting::new("a", "A", "X", "", &["Rust", "Go", "C", "D", "E", "F", "G"]),
            JobPosting::new("b", "B", "X", "", &["Rust", "Go", "C", "D", "E", "F"]),
        ])
        .unwrap();

        let result = MatchScorer::new().rank(&skills(&["Rust", "Go"]), &catalog).unwrap();
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].job_id, "b");

        let exactly_thirty = JobCatalog::new(vec![JobPosting::new(
            "c", "C", "X", "", &["Rust", "Go", "C", "D", "E", "F", "G", "H", "I", "J"],
        )])
        .unwrap();
        let rust_go_c = skills(&["Rust", "Go", "C"]);
        assert!(MatchScorer::new().rank(&rust_go_c, &exactly_thirty).unwrap().matches.is_empty());
    }

    #[test]
    fn test_ordering_and_ties() {
        let catalog = JobCatalog::new(vec![
            JobPosting::new("half-1", "A", "X", "", &["Rust", "Kafka"]),
            JobPosting::new("full", "B", "X", "", &["Rust"]),
            JobPosting::new("half-2", "C", "X", "", &["Rust", "Spark"]),
        ])
        .unwrap();

        let result = MatchScorer::new().rank(&skills(&["rust"]), &catalog).unwrap();
        let ids: Vec<&str> = result.matches.iter().map(|m| m.job_id.as_str()).collect();
        assert_eq!(ids, vec!["full", "half-1", "half-2"]);
        assert_eq!(result.matches[0].matching_skills, vec!["rust"]);
    }

    #[test]
    fn test_result_cap() {
        let postings = (0..25)
            .map(|i| JobPosting::new(&i.to_string(), "Rust Dev", "X", "", &["Rust"]))
            .collect();
        let catalog = JobCatalog::new(postings).unwrap();

        let result = MatchScorer::new().rank(&skills(&["Rust"]), &catalog).unwrap();
        assert_eq!(result.matches.len(), 10);
        assert_eq!(result.matches[0].job_id, "0");
    }

    #[test]
    fn test_empty_skills_rejected() {
        let scorer = MatchScorer::new();
        for input in [skills(&[]), skills(&["", "  "])] {
            let err = scorer.rank(&input, &JobCatalog::sample()).unwrap_err();
            assert!(matches!(err, ResumeMatcherError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_posting_without_requirements_scores_zero() {
        let catalog = JobCatalog::new(vec![JobPosting::new("empty", "A", "X", "", &[])]).unwrap();
        let result = MatchScorer::new().rank(&skills(&["Rust"]), &catalog).unwrap();
        assert!(result.matches.is_empty());
    }
}
