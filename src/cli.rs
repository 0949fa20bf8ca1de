//! CLI interface for the resume matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Extract candidate profiles from resumes and rank job matches")]
#[command(long_about = "Parse PDF and Word resumes into skills, experience and education, then score the candidate against a job catalog by skill overlap")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a candidate profile from a resume
    Parse {
        /// Path to resume file (PDF, DOCX, DOC)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Rank job postings against a list of skills
    Match {
        /// Candidate skills, comma separated
        #[arg(short, long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Job catalog (JSON array of postings)
        #[arg(short, long)]
        jobs: Option<PathBuf>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Parse a resume and rank job postings against its skills
    Analyze {
        /// Path to resume file (PDF, DOCX, DOC)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job catalog (JSON array of postings)
        #[arg(short, long)]
        jobs: Option<PathBuf>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}
