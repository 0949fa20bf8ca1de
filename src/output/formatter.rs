//! Output formatters for profiles and job matches

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::matching::scorer::{JobMatches, MatchResult};
use crate::processing::profile::CandidateProfile;
use colored::{Color, Colorize};

pub trait OutputFormatter {
    fn format_profile(&self, profile: &CandidateProfile) -> Result<String>;
    fn format_matches(&self, matches: &JobMatches) -> Result<String>;
}

/// Human-readable console output, optionally colored.
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON output mirroring the service response bodies.
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_list(&self, items: &[String], empty: &str) -> String {
        if items.is_empty() {
            return format!("  {}\n", empty);
        }
        items.iter().map(|item| format!("  • {}\n", item)).collect()
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = match score {
            s if s >= 80.0 => ("STRONG", Color::Green),
            s if s >= 60.0 => ("GOOD", Color::BrightGreen),
            s if s >= 40.0 => ("FAIR", Color::Yellow),
            _ => ("WEAK", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_match(&self, rank: usize, result: &MatchResult) -> String {
        let mut output = String::new();
        let title = format!("{}. {} at {}", rank, result.job_title, result.company);
        let title = if self.use_colors { title.bold().to_string() } else { title };

        output.push_str(&format!(
            "{} {:.2}% {}\n",
            title,
            result.match_score,
            self.format_score_badge(result.match_score)
        ));
        output.push_str(&format!("   Matching: {}\n", result.matching_skills.join(", ")));
        if !result.missing_skills.is_empty() {
            output.push_str(&format!("   Missing:  {}\n", result.missing_skills.join(", ")));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_profile(&self, profile: &CandidateProfile) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("CANDIDATE PROFILE", 1));
        output.push_str(&format!(
            "Parsed: {}\n",
            profile.parsed_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&self.format_header(&format!("Skills ({})", profile.skills.len()), 2));
        output.push_str(&self.format_list(&profile.skill_labels(), "No skills detected"));

        output.push_str(&self.format_header("Experience", 2));
        output.push_str(&self.format_list(&profile.experience, "No experience entries detected"));

        output.push_str(&self.format_header("Education", 2));
        output.push_str(&self.format_list(&profile.education, "No education entries detected"));

        Ok(output)
    }

    fn format_matches(&self, matches: &JobMatches) -> Result<String> {
        let mut output = self.format_header(&format!("JOB MATCHES ({})", matches.matches.len()), 1);

        if matches.matches.is_empty() {
            output.push_str("  No postings matched the candidate's skills\n");
        }
        for (index, result) in matches.matches.iter().enumerate() {
            output.push_str(&self.format_match(index + 1, result));
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_profile(&self, profile: &CandidateProfile) -> Result<String> {
        self.render(profile)
    }

    fn format_matches(&self, matches: &JobMatches) -> Result<String> {
        self.render(matches)
    }
}

/// Pick the formatter for `format`, honoring the color/pretty settings.
pub fn formatter_for(format: OutputFormat, config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(config.color_output)),
        OutputFormat::Json => Box::new(JsonFormatter::new(config.pretty_json)),
    }
}
