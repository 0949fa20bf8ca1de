//! Job catalog supplied to the match scorer

use crate::error::{Result, ResumeMatcherError};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub description: String,
    pub required_skills: Vec<String>,
}

impl JobPosting {
    pub fn new(id: &str, title: &str, company: &str, description: &str, required_skills: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            description: description.to_string(),
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// An ordered set of postings. Order matters: equal scores keep catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<JobPosting>", into = "Vec<JobPosting>")]
pub struct JobCatalog {
    postings: Vec<JobPosting>,
}

impl TryFrom<Vec<JobPosting>> for JobCatalog {
    type Error = ResumeMatcherError;

    fn try_from(postings: Vec<JobPosting>) -> Result<Self> {
        Self::new(postings)
    }
}

impl From<JobCatalog> for Vec<JobPosting> {
    fn from(catalog: JobCatalog) -> Self {
        catalog.postings
    }
}

impl JobCatalog {
    pub fn new(postings: Vec<JobPosting>) -> Result<Self> {
        let mut ids = HashSet::new();
        for posting in &postings {
            if !ids.insert(posting.id.as_str()) {
                return Err(ResumeMatcherError::Configuration(format!(
                    "Duplicate job id in catalog: {}",
                    posting.id
                )));
            }
        }
        Ok(Self { postings })
    }

    /// Read a JSON array of postings.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let postings: Vec<JobPosting> = serde_json::from_str(&content)?;
        info!("Loaded {} job postings from {}", postings.len(), path.display());
        Self::new(postings)
    }

    /// The three postings the platform ships as demo data.
    pub fn sample() -> Self {
        Self {
            postings: vec![
                JobPosting::new(
                    "1",
                    "Software Engineer",
                    "Tech Corp",
                    "Develop software applications using Python, JavaScript, and React. Experience with databases and APIs required.",
                    &["Python", "JavaScript", "React", "SQL", "REST APIs", "Git"],
                ),
                JobPosting::new(
                    "2",
                    "Data Scientist",
                    "Data Inc",
                    "Analyze data using machine learning techniques. Python, R, and statistical analysis experience needed.",
                    &["Python", "R", "Machine Learning", "Statistics", "Pandas", "NumPy"],
                ),
                JobPosting::new(
                    "3",
                    "Full Stack Developer",
                    "Web Solutions",
                    "Build web applications using modern technologies. Frontend and backend development experience.",
                    &["JavaScript", "React", "Node.js", "MongoDB", "Express", "HTML", "CSS"],
                ),
            ],
        }
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
