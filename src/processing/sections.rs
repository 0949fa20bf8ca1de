//! Section classification for experience and education entries
//!
//! Each section is collected in two stages. The primary pass walks the lines after the
//! section heading and keeps the ones matching the section's content heuristics, stopping
//! at the first heading of another section. When that yields nothing, the fallback pass
//! scans the whole document for generic keywords instead.

use crate::processing::document::ExtractedText;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20\d{2}|19\d{2})\b").expect("Invalid year regex"));

/// A rule deciding whether a line inside an active section is worth keeping.
#[derive(Debug)]
pub enum ContentHeuristic {
    Keywords(&'static [&'static str]),
    Year,
}

impl ContentHeuristic {
    fn matches(&self, line_lower: &str) -> bool {
        match self {
            ContentHeuristic::Keywords(keywords) => contains_any(line_lower, keywords),
            ContentHeuristic::Year => YEAR_PATTERN.is_match(line_lower),
        }
    }
}

/// Keyword vocabulary for one section. All keywords are lower-case.
#[derive(Debug)]
pub struct SectionRules {
    pub entry_keywords: &'static [&'static str],
    pub other_section_keywords: &'static [&'static str],
    pub content: &'static [ContentHeuristic],
    pub fallback_keywords: &'static [&'static str],
    pub default_cap: usize,
}

pub static EXPERIENCE_RULES: SectionRules = SectionRules {
    entry_keywords: &["experience", "work history", "employment", "professional experience"],
    other_section_keywords: &["education", "skills", "projects", "certifications"],
    content: &[
        ContentHeuristic::Keywords(&[
            "engineer", "developer", "manager", "analyst", "consultant", "specialist",
            "lead", "senior", "junior", "intern",
        ]),
        ContentHeuristic::Keywords(&[
            "ltd", "inc", "corp", "llc", "company", "technologies", "solutions", "systems",
        ]),
        ContentHeuristic::Year,
    ],
    fallback_keywords: &["worked", "developed", "managed", "led", "created", "built"],
    default_cap: 5,
};

pub static EDUCATION_RULES: SectionRules = SectionRules {
    entry_keywords: &["education", "academic", "qualification", "degree"],
    other_section_keywords: &["experience", "skills", "projects", "certifications"],
    content: &[
        ContentHeuristic::Keywords(&[
            "bachelor", "master", "phd", "doctorate", "associate", "diploma", "certificate",
        ]),
        ContentHeuristic::Keywords(&["university", "college", "institute", "school", "academy"]),
        ContentHeuristic::Year,
    ],
    fallback_keywords: &["bachelor", "master", "phd", "degree", "university", "college"],
    default_cap: 3,
};

impl SectionRules {
    fn matches_content(&self, line_lower: &str) -> bool {
        self.content.iter().any(|heuristic| heuristic.matches(line_lower))
    }
}

/// Collect up to `cap` distinct entries for the section described by `rules`.
pub fn classify(text: &ExtractedText, rules: &SectionRules, cap: usize) -> Vec<String> {
    let mut entries = primary_pass(text, rules);
    if entries.is_empty() {
        entries = fallback_pass(text, rules);
    }

    let mut seen = HashSet::new();
    entries.retain(|entry| seen.insert(entry.clone()));
    entries.truncate(cap);
    entries
}

/// Lines of the first contiguous block after the section heading.
pub fn primary_pass(text: &ExtractedText, rules: &SectionRules) -> Vec<String> {
    let mut entries = Vec::new();
    let mut inside = false;

    for line in text.content_lines() {
        let lower = line.to_lowercase();

        if contains_any(&lower, rules.entry_keywords) {
            inside = true;
            continue;
        }
        if !inside {
            continue;
        }
        // Heading check wins over content, a line naming another section ends the block.
        if contains_any(&lower, rules.other_section_keywords) {
            break;
        }
        if line.chars().count() > 5 && rules.matches_content(&lower) {
            entries.push(line.to_string());
        }
    }

    entries
}

/// Section-agnostic scan of the whole document.
pub fn fallback_pass(text: &ExtractedText, rules: &SectionRules) -> Vec<String> {
    text.content_lines()
        .filter(|line| line.chars().count() > 10)
        .filter(|line| contains_any(&line.to_lowercase(), rules.fallback_keywords))
        .map(str::to_string)
        .collect()
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}
