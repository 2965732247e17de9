//! Report structures handed to the formatters

use crate::catalog::Vocabulary;
use crate::matching::Recommendation;
use crate::processing::normalizer::InferredTags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of one recommendation run, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub generated_at: DateTime<Utc>,
    pub catalog_size: usize,
    pub min_score: f64,
    /// Tags recovered from free text, if any was given.
    pub inferred: InferredTags,
    pub recommendations: Vec<Recommendation>,
    pub matcher_version: String,
}

impl RecommendationReport {
    pub fn new(
        catalog_size: usize,
        min_score: f64,
        inferred: InferredTags,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            catalog_size,
            min_score,
            inferred,
            recommendations,
            matcher_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}

/// Sorted option lists for tag pickers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyReport {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub traits: Vec<String>,
    pub fields: Vec<String>,
}

impl From<&Vocabulary> for VocabularyReport {
    fn from(vocabulary: &Vocabulary) -> Self {
        Self {
            skills: vocabulary.skills.iter().cloned().collect(),
            interests: vocabulary.interests.iter().cloned().collect(),
            traits: vocabulary.traits.iter().cloned().collect(),
            fields: vocabulary.fields.iter().cloned().collect(),
        }
    }
}
