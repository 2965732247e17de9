//! CLI interface for the career matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "career-matcher")]
#[command(about = "Recommend careers from your skills, interests and traits")]
#[command(long_about = "Describe yourself in free text and/or pick tags from the catalog \
vocabulary to get a ranked, explained list of matching careers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Career catalog (JSON); overrides config and DATA_PATH
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend careers
    Recommend {
        /// Free-text description of your skills, interests and traits
        #[arg(short, long)]
        text: Option<String>,

        /// Skill tag (repeatable)
        #[arg(short, long = "skill")]
        skills: Vec<String>,

        /// Interest tag (repeatable)
        #[arg(short, long = "interest")]
        interests: Vec<String>,

        /// Trait tag (repeatable)
        #[arg(long = "trait")]
        traits: Vec<String>,

        /// Only recommend careers in this field (repeatable)
        #[arg(short, long = "field")]
        fields: Vec<String>,

        /// Minimum match score
        #[arg(short, long)]
        min_score: Option<f64>,

        /// Load a saved profile; command-line values are added on top
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Save the effective profile to this file
        #[arg(long)]
        save_profile: Option<PathBuf>,

        /// Show at most this many careers
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// List the skills, interests, traits and fields in the catalog
    Vocabulary {
        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show which tags a free-text description maps to
    Normalize {
        /// Text to analyse
        text: String,
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
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}
