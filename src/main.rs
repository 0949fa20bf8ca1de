//! Resume matcher: resume parsing and skill-overlap job matching

use clap::Parser;
use log::{debug, error, info};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::{Config, OutputFormat};
use resume_matcher::error::{Result, ResumeMatcherError};
use resume_matcher::input::InputManager;
use resume_matcher::matching::{JobCatalog, MatchScorer};
use resume_matcher::output::formatter_for;
use resume_matcher::processing::document::RawDocument;
use resume_matcher::processing::profile::{CandidateProfile, ProfileAssembler};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed ({:?}): {}", e.kind(), e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Parse { resume, output } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let profile = parse_resume(&resume, &config).await?;

            println!("{}", formatter_for(format, &config.output).format_profile(&profile)?);
        }

        Commands::Match { skills, jobs, output } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let catalog = load_catalog(jobs.as_deref(), &config)?;

            let matches = MatchScorer::from_config(&config.matching).rank(&skills, &catalog)?;
            info!("{} job matches found", matches.matches.len());

            println!("{}", formatter_for(format, &config.output).format_matches(&matches)?);
        }

        Commands::Analyze { resume, jobs, output } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let catalog = load_catalog(jobs.as_deref(), &config)?;
            let profile = parse_resume(&resume, &config).await?;

            let matches = MatchScorer::from_config(&config.matching)
                .rank(&profile.skill_labels(), &catalog)?;
            info!("{} job matches found", matches.matches.len());

            match format {
                OutputFormat::Json => {
                    let combined = serde_json::json!({ "profile": profile, "matches": matches.matches });
                    let rendered = if config.output.pretty_json {
                        serde_json::to_string_pretty(&combined)?
                    } else {
                        serde_json::to_string(&combined)?
                    };
                    println!("{}", rendered);
                }
                OutputFormat::Console => {
                    let formatter = formatter_for(format, &config.output);
                    println!("{}", formatter.format_profile(&profile)?);
                    println!("{}", formatter.format_matches(&matches)?);
                }
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let rendered = toml::to_string_pretty(&config)?;
                    println!("{}", rendered);
                }
                ConfigAction::Path => {
                    println!("{}", path.display());
                }
                ConfigAction::Reset => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset to defaults at {}", path.display());
                }
            }
        }
    }

    Ok(())
}

async fn parse_resume(path: &Path, config: &Config) -> Result<CandidateProfile> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ResumeMatcherError::InvalidInput(format!("Invalid resume path: {}", path.display())))?;

    // Reject unsupported formats before reading the file.
    let format = resume_matcher::input::file_detector::DocumentFormat::from_filename(filename)?;
    debug!("Resume {} detected as {}", path.display(), format);

    let bytes = tokio::fs::read(path).await?;
    let document = RawDocument::new(bytes, filename);

    ProfileAssembler::from_config(&config.extraction)
        .parse_document(&InputManager::new(), &document)
        .await
}

fn load_catalog(jobs: Option<&Path>, config: &Config) -> Result<JobCatalog> {
    match jobs.or(config.matching.catalog_path.as_deref()) {
        Some(path) => JobCatalog::load(path),
        None => {
            info!("No job catalog configured, using the sample catalog");
            Ok(JobCatalog::sample())
        }
    }
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(format) => cli::parse_output_format(format).map_err(ResumeMatcherError::InvalidInput),
        None => Ok(config.output.format),
    }
}
