//! Weighted career scoring and ranking

use crate::catalog::record::CareerRecord;
use crate::catalog::store::CatalogStore;
use crate::matching::profile::{ScoringConfig, UserProfile};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One recommended career with the tags that earned its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub career: String,
    pub score: f64,
    pub description: String,
    pub courses: Vec<String>,
    /// Matched tags, sorted ascending.
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub traits: Vec<String>,
    pub field: String,
    pub breakdown: MatchBreakdown,
}

/// Intersection sizes behind a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skill_matches: usize,
    pub interest_matches: usize,
    pub trait_matches: usize,
}

pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Rank every qualifying career in the catalog.
    pub fn score(&self, profile: &UserProfile, catalog: &CatalogStore) -> Vec<Recommendation> {
        self.score_records(profile, catalog.records())
    }

    /// Like [`score`](Self::score) but keeps at most `limit` results.
    pub fn score_with_limit(
        &self,
        profile: &UserProfile,
        catalog: &CatalogStore,
        limit: Option<usize>,
    ) -> Vec<Recommendation> {
        let mut recommendations = self.score(profile, catalog);
        if let Some(limit) = limit {
            recommendations.truncate(limit);
        }
        recommendations
    }

    /// Score `records` in order. Results are sorted by score, highest first;
    /// equal scores keep their relative order from `records`.
    pub fn score_records(
        &self,
        profile: &UserProfile,
        records: &[CareerRecord],
    ) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = records
            .iter()
            .filter(|record| profile.fields.is_empty() || profile.fields.contains(&record.field))
            .filter_map(|record| self.score_record(profile, record))
            .collect();

        // sort_by is stable
        recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
        recommendations
    }

    fn score_record(&self, profile: &UserProfile, record: &CareerRecord) -> Option<Recommendation> {
        let skills = intersection(&profile.skills, &record.skills);
        let interests = intersection(&profile.interests, &record.interests);
        let traits = intersection(&profile.traits, &record.traits);

        let breakdown = MatchBreakdown {
            skill_matches: skills.len(),
            interest_matches: interests.len(),
            trait_matches: traits.len(),
        };
        let score = self.weighted_score(&breakdown);

        debug!(
            "{} - Skills: {}, Interests: {}, Traits: {}, Score: {}",
            record.name,
            breakdown.skill_matches,
            breakdown.interest_matches,
            breakdown.trait_matches,
            score
        );

        if score < self.config.min_score {
            return None;
        }

        Some(Recommendation {
            career: record.name.clone(),
            score,
            description: record.description.clone(),
            courses: record.courses.clone(),
            skills,
            interests,
            traits,
            field: record.field.clone(),
            breakdown,
        })
    }

    pub fn weighted_score(&self, breakdown: &MatchBreakdown) -> f64 {
        breakdown.skill_matches as f64 * self.config.skill_weight
            + breakdown.interest_matches as f64 * self.config.interest_weight
            + breakdown.trait_matches as f64 * self.config.trait_weight
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Sorted intersection of two tag sets.
fn intersection(user: &BTreeSet<String>, career: &BTreeSet<String>) -> Vec<String> {
    user.intersection(career).cloned().collect()
}
