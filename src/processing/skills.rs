//! Technical skill extraction over the full resume text

use aho_corasick::AhoCorasick;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Canonical, title-cased skill labels.
pub type SkillSet = BTreeSet<String>;

/// Literal terms matched by plain substring containment on the lower-cased text.
pub const TECHNICAL_SKILLS: &[&str] = &[
    // Programming languages
    "python", "javascript", "java", "c++", "c#", "php", "ruby", "go", "rust", "typescript",
    "swift", "kotlin",
    // Web technologies
    "react", "angular", "vue", "node.js", "express", "django", "flask", "spring", "laravel",
    "html", "css", "sass", "scss", "bootstrap", "tailwind", "jquery",
    // Databases
    "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "oracle", "sqlite",
    // Cloud & DevOps
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "github", "gitlab",
    "bitbucket", "terraform", "ansible", "puppet", "chef", "nginx", "apache",
    // Data science & ML
    "machine learning", "deep learning", "tensorflow", "pytorch", "scikit-learn", "pandas",
    "numpy", "matplotlib", "seaborn", "jupyter", "spark", "hadoop", "kafka",
    // Mobile
    "android", "ios", "react native", "flutter", "xamarin",
    // Process and tooling
    "agile", "scrum", "kanban", "jira", "confluence", "slack", "trello", "linux", "windows",
    "macos", "bash", "powershell", "rest api", "graphql",
];

/// Spelling variants that substring matching misses. Each capture group maps to the
/// label at the same position, and matches never overlap, so "rest api" yields only
/// "Rest Api" and not an extra "Api".
const VARIANT_RULES: &[(&str, &[&str])] = &[
    (r"\b(react\.js|reactjs)\b", &["Reactjs"]),
    (r"\b(node\.js|nodejs)\b", &["Nodejs"]),
    (r"\b(express\.js|expressjs)\b", &["Expressjs"]),
    (r"\b(mongo\s*db)\b", &["Mongodb"]),
    (r"\b(postgre\s*sql)\b", &["Postgresql"]),
    (r"\b(machine\s*learning)\b", &["Machine Learning"]),
    (r"\b(deep\s*learning)\b", &["Deep Learning"]),
    (r"\b(data\s*science)\b", &["Data Science"]),
    (r"\b(artificial\s*intelligence)\b", &["Artificial Intelligence"]),
    (r"\b(?:(api)|(rest\s*api))\b", &["Api", "Rest Api"]),
    (r"\b(frontend|front-end)\b", &["Frontend"]),
    (r"\b(backend|back-end)\b", &["Backend"]),
    (r"\b(full\s*stack)\b", &["Full Stack"]),
];

static VOCABULARY: LazyLock<SkillVocabulary> = LazyLock::new(SkillVocabulary::build);

/// Compiled skill vocabulary, built once and shared read-only.
pub struct SkillVocabulary {
    terms: &'static [&'static str],
    term_matcher: AhoCorasick,
    variants: Vec<(Regex, &'static [&'static str])>,
}

impl SkillVocabulary {
    fn build() -> Self {
        let term_matcher = AhoCorasick::new(TECHNICAL_SKILLS).expect("Invalid skill vocabulary");
        let variants = VARIANT_RULES
            .iter()
            .map(|(pattern, labels)| (Regex::new(pattern).expect("Invalid skill variant regex"), *labels))
            .collect();

        Self {
            terms: TECHNICAL_SKILLS,
            term_matcher,
            variants,
        }
    }

    pub fn global() -> &'static SkillVocabulary {
        &VOCABULARY
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Every vocabulary term or variant found anywhere in `text`.
    ///
    /// Containment is deliberately coarse: "java" is reported inside "javascript".
    pub fn extract(&self, text: &str) -> SkillSet {
        let lower = text.to_lowercase();
        let mut skills = SkillSet::new();

        // Overlapping search reports every term that occurs, even inside a longer one.
        for mat in self.term_matcher.find_overlapping_iter(&lower) {
            skills.insert(title_case(self.terms[mat.pattern().as_usize()]));
        }

        for (pattern, labels) in &self.variants {
            for caps in pattern.captures_iter(&lower) {
                // The first participating group names the alternative that matched.
                if let Some(index) = (1..caps.len()).find(|i| caps.get(*i).is_some()) {
                    skills.insert(labels[index - 1].to_string());
                }
            }
        }

        skills
    }
}

pub fn extract_skills(text: &str) -> SkillSet {
    SkillVocabulary::global().extract(text)
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest,
/// so "node.js" becomes "Node.Js" and "scikit-learn" becomes "Scikit-Learn".
pub fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut previous_is_letter = false;

    for c in term.chars() {
        if previous_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }

    out
}
