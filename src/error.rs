//! Error handling for the career matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog source is missing, unreadable or not well-formed JSON.
    #[error("Failed to load career data: {0}")]
    DataLoad(String),

    /// A catalog record lacks a required field or breaks a catalog invariant.
    #[error("Invalid career record #{}{}: {}", .index, career_suffix(.career), .problem)]
    DataSchema {
        index: usize,
        career: Option<String>,
        problem: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

fn career_suffix(career: &Option<String>) -> String {
    career
        .as_ref()
        .map(|name| format!(" ({})", name))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, CareerMatcherError>;

impl CareerMatcherError {
    pub(crate) fn schema(index: usize, career: Option<&str>, problem: impl Into<String>) -> Self {
        CareerMatcherError::DataSchema {
            index,
            career: career.map(str::to_string),
            problem: problem.into(),
        }
    }

    pub fn is_data_load(&self) -> bool {
        matches!(self, CareerMatcherError::DataLoad(_))
    }

    pub fn is_data_schema(&self) -> bool {
        matches!(self, CareerMatcherError::DataSchema { .. })
    }
}
