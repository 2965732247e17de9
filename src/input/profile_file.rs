//! Saved profile documents

use crate::api::RecommendationRequest;
use crate::error::{CareerMatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Profile interchange document.
///
/// Keys follow the saved-profile format: `free_text`, `skills`, `interests`,
/// `traits`, `fields`, `min_score`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(default)]
    pub free_text: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub min_score: Option<f64>,
}

impl ProfileDocument {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CareerMatcherError::InvalidInput(format!(
                "Profile file does not exist: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            CareerMatcherError::InvalidInput(format!("Invalid profile '{}': {}", path.display(), e))
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn into_request(self) -> RecommendationRequest {
        RecommendationRequest {
            free_text: self.free_text,
            skills: self.skills,
            interests: self.interests,
            traits: self.traits,
            fields: self.fields,
            min_score: self.min_score,
        }
    }

    pub fn from_request(request: &RecommendationRequest) -> Self {
        Self {
            free_text: request.free_text.clone(),
            skills: request.skills.clone(),
            interests: request.interests.clone(),
            traits: request.traits.clone(),
            fields: request.fields.clone(),
            min_score: request.min_score,
        }
    }
}
