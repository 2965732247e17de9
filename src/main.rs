//! Career matcher: recommend careers from skills, interests and traits

use career_matcher::api::{CareerMatcher, RecommendationRequest};
use career_matcher::cli::{self, Cli, Commands, ConfigAction};
use career_matcher::config::{Config, OutputFormat};
use career_matcher::error::{CareerMatcherError, Result};
use career_matcher::input::ProfileDocument;
use career_matcher::output::formatter::{save_report_to_file, ReportGenerator};
use career_matcher::output::report::VocabularyReport;
use clap::Parser;
use log::{error, info};
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };
    if let Some(data) = cli.data {
        config.catalog.data_path = data;
    }

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Recommend {
            text,
            skills,
            interests,
            traits,
            fields,
            min_score,
            profile,
            save_profile,
            limit,
            output,
            save,
        } => {
            let mut request = match profile {
                Some(path) => {
                    info!("Loading profile from {}", path.display());
                    ProfileDocument::load(&path)?.into_request()
                }
                None => RecommendationRequest::default(),
            };

            if let Some(text) = text {
                if request.free_text.is_empty() {
                    request.free_text = text;
                } else {
                    request.free_text = format!("{} {}", request.free_text, text);
                }
            }
            request.skills.extend(skills);
            request.interests.extend(interests);
            request.traits.extend(traits);
            request.fields.extend(fields);
            if min_score.is_some() {
                request.min_score = min_score;
            }

            if request.is_empty() {
                return Err(CareerMatcherError::InvalidInput(
                    "Please give at least one input".to_string(),
                ));
            }

            if let Some(path) = save_profile {
                ProfileDocument::from_request(&request).save(&path)?;
                info!("Profile saved to {}", path.display());
            }

            let format = resolve_format(output.as_deref(), &config)?;
            let matcher = CareerMatcher::open(config)?;
            let report = matcher.report(&request, limit)?;

            let generator = ReportGenerator::from_config(&matcher.config().output);
            let rendered = generator.generate_report(&report, format)?;
            emit(&rendered, save.as_deref())?;
        }

        Commands::Vocabulary { output } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let matcher = CareerMatcher::open(config)?;
            let vocabulary = VocabularyReport::from(&matcher.get_vocabulary());

            let generator = ReportGenerator::from_config(&matcher.config().output);
            println!("{}", generator.generate_vocabulary(&vocabulary, format)?);
        }

        Commands::Normalize { text } => {
            let matcher = CareerMatcher::open(config)?;
            let inferred = matcher.normalize_free_text(&text, &matcher.get_vocabulary());
            println!("{}", serde_json::to_string_pretty(&inferred)?);
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    CareerMatcherError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
            }
            ConfigAction::Path => {
                println!("{}", Config::config_path().display());
            }
            ConfigAction::Reset => {
                let path = Config::config_path();
                Config::default().save(&path)?;
                println!("Configuration reset to defaults at {}", path.display());
            }
        },
    }

    Ok(())
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(CareerMatcherError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn emit(rendered: &str, save: Option<&std::path::Path>) -> Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(rendered, path)?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
