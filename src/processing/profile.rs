//! Candidate profile assembly

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::input::InputManager;
use crate::processing::document::{ExtractedText, RawDocument};
use crate::processing::sections::{self, EDUCATION_RULES, EXPERIENCE_RULES};
use crate::processing::skills::{SkillSet, SkillVocabulary};
use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub skills: SkillSet,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    #[serde(with = "iso8601")]
    pub parsed_at: DateTime<Utc>,
}

impl CandidateProfile {
    pub fn skill_labels(&self) -> Vec<String> {
        self.skills.iter().cloned().collect()
    }
}

/// Builds profiles from extracted text.
pub struct ProfileAssembler {
    vocabulary: &'static SkillVocabulary,
    max_experience_entries: usize,
    max_education_entries: usize,
}

impl ProfileAssembler {
    pub fn new() -> Self {
        Self {
            vocabulary: SkillVocabulary::global(),
            max_experience_entries: EXPERIENCE_RULES.default_cap,
            max_education_entries: EDUCATION_RULES.default_cap,
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            max_experience_entries: config.max_experience_entries,
            max_education_entries: config.max_education_entries,
            ..Self::new()
        }
    }

    pub fn assemble(&self, text: &ExtractedText) -> CandidateProfile {
        let skills = self.vocabulary.extract(&text.full_text());
        let experience = sections::classify(text, &EXPERIENCE_RULES, self.max_experience_entries);
        let education = sections::classify(text, &EDUCATION_RULES, self.max_education_entries);

        debug!(
            "Assembled profile: {} skills, {} experience entries, {} education entries",
            skills.len(),
            experience.len(),
            education.len()
        );

        CandidateProfile {
            skills,
            experience,
            education,
            parsed_at: Utc::now(),
        }
    }

    /// Extract and assemble the profile of one uploaded document.
    pub async fn parse_document(&self, input: &InputManager, document: &RawDocument) -> Result<CandidateProfile> {
        let text = input.extract(document).await?;
        let profile = self.assemble(&text);
        info!("Extracted skills from {}: {}", document.filename, profile.skill_labels().join(", "));
        Ok(profile)
    }
}

impl Default for ProfileAssembler {
    fn default() -> Self {
        Self::new()
    }
}

mod iso8601 {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Micros, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
