//! User profile and scoring configuration

use crate::error::{CareerMatcherError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Canonical tag set a recommendation request is scored with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub skills: BTreeSet<String>,
    pub interests: BTreeSet<String>,
    pub traits: BTreeSet<String>,
    /// Restrict results to these fields. Empty means no restriction.
    pub fields: BTreeSet<String>,
    pub free_text: Option<String>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills.extend(skills.into_iter().map(Into::into));
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests.extend(interests.into_iter().map(Into::into));
        self
    }

    pub fn with_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traits.extend(traits.into_iter().map(Into::into));
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// True when there is no tag to score with.
    pub fn has_no_tags(&self) -> bool {
        self.skills.is_empty() && self.interests.is_empty() && self.traits.is_empty()
    }
}

/// Weights and thresholds for one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub skill_weight: f64,
    pub interest_weight: f64,
    pub trait_weight: f64,
    /// Careers scoring below this are dropped.
    pub min_score: f64,
    /// 0-100 similarity cutoff for fuzzy tag inference.
    pub fuzzy_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            skill_weight: 2.0,
            interest_weight: 1.0,
            trait_weight: 1.0,
            min_score: 2.0,
            fuzzy_threshold: 80.0,
        }
    }
}

impl ScoringConfig {
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_weights(mut self, skill: f64, interest: f64, trait_weight: f64) -> Self {
        self.skill_weight = skill;
        self.interest_weight = interest;
        self.trait_weight = trait_weight;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, weight) in [
            ("skill_weight", self.skill_weight),
            ("interest_weight", self.interest_weight),
            ("trait_weight", self.trait_weight),
        ] {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(CareerMatcherError::Configuration(format!(
                    "{} must be a positive number, got {}",
                    name, weight
                )));
            }
        }

        if !self.min_score.is_finite() {
            return Err(CareerMatcherError::Configuration(format!(
                "min_score must be a finite number, got {}",
                self.min_score
            )));
        }

        if !(0.0..=100.0).contains(&self.fuzzy_threshold) {
            return Err(CareerMatcherError::Configuration(format!(
                "fuzzy_threshold must be between 0 and 100, got {}",
                self.fuzzy_threshold
            )));
        }

        Ok(())
    }
}
