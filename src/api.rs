//! Core API: vocabulary lookup, free-text normalization and scoring

use crate::catalog::{CatalogHandle, CatalogStore, Vocabulary};
use crate::config::Config;
use crate::error::Result;
use crate::matching::{assemble, Recommendation, ScoringConfig, ScoringEngine, UserProfile};
use crate::output::report::RecommendationReport;
use crate::processing::normalizer::{InferredTags, TextNormalizer};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything a caller collects for one recommendation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationRequest {
    pub free_text: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub traits: Vec<String>,
    pub fields: Vec<String>,
    /// Overrides the configured minimum score when set.
    pub min_score: Option<f64>,
}

impl RecommendationRequest {
    /// No free text and no explicit tags.
    pub fn is_empty(&self) -> bool {
        self.free_text.trim().is_empty()
            && self.skills.is_empty()
            && self.interests.is_empty()
            && self.traits.is_empty()
    }
}

/// Entry point tying the catalog, normalizer and scoring engine together.
///
/// Cheap to share: the catalog lives behind an `Arc<CatalogHandle>` and every
/// call works on its own snapshot.
pub struct CareerMatcher {
    catalog: Arc<CatalogHandle>,
    config: Config,
}

impl CareerMatcher {
    /// Load the catalog named by `config` and build a matcher around it.
    pub fn open(config: Config) -> Result<Self> {
        config.scoring.validate()?;
        let catalog = CatalogHandle::open(config.data_path())?;
        Ok(Self {
            catalog: Arc::new(catalog),
            config,
        })
    }

    pub fn with_catalog(catalog: Arc<CatalogHandle>, config: Config) -> Self {
        Self { catalog, config }
    }

    pub fn from_store(store: CatalogStore, config: Config) -> Self {
        Self::with_catalog(Arc::new(CatalogHandle::from_store(store)), config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> Arc<CatalogStore> {
        self.catalog.snapshot()
    }

    pub fn get_vocabulary(&self) -> Vocabulary {
        self.catalog.snapshot().vocabulary().clone()
    }

    pub fn normalize_free_text(&self, text: &str, vocabulary: &Vocabulary) -> InferredTags {
        self.normalizer().normalize(text, vocabulary)
    }

    /// Score a fully assembled profile with caller-supplied weights.
    ///
    /// `scoring` is validated first, so a NaN threshold or a non-positive
    /// weight is an error rather than a silently unfiltered result.
    pub fn score_recommendations(
        &self,
        profile: &UserProfile,
        scoring: &ScoringConfig,
    ) -> Result<Vec<Recommendation>> {
        scoring.validate()?;
        Ok(ScoringEngine::new(scoring.clone()).score(profile, &self.catalog.snapshot()))
    }

    /// Run normalize, assemble and score for one request.
    ///
    /// An empty request is a no-op and yields no recommendations.
    pub fn recommend(&self, request: &RecommendationRequest) -> Result<Vec<Recommendation>> {
        self.recommend_top(request, None)
    }

    /// Like [`recommend`](Self::recommend), keeping at most `limit` careers.
    pub fn recommend_top(
        &self,
        request: &RecommendationRequest,
        limit: Option<usize>,
    ) -> Result<Vec<Recommendation>> {
        Ok(self.report(request, limit)?.recommendations)
    }

    /// Full pipeline run, also returning the tags inferred from free text.
    pub fn report(
        &self,
        request: &RecommendationRequest,
        limit: Option<usize>,
    ) -> Result<RecommendationReport> {
        // One snapshot for the whole request so vocabulary and records agree.
        let catalog = self.catalog.snapshot();
        let scoring = self.scoring_for(request);

        if request.is_empty() {
            debug!("Empty recommendation request, nothing to score");
            return Ok(RecommendationReport::new(
                catalog.len(),
                scoring.min_score,
                InferredTags::default(),
                Vec::new(),
            ));
        }

        scoring.validate()?;

        let inferred = self.normalizer().normalize(&request.free_text, catalog.vocabulary());

        let mut profile = assemble(
            request.skills.iter().cloned(),
            request.interests.iter().cloned(),
            request.traits.iter().cloned(),
            &inferred,
        );
        profile.fields = request.fields.iter().cloned().collect();
        if !request.free_text.is_empty() {
            profile.free_text = Some(request.free_text.clone());
        }

        let min_score = scoring.min_score;
        let recommendations =
            ScoringEngine::new(scoring).score_with_limit(&profile, &catalog, limit);
        info!(
            "Scored {} careers, {} recommended",
            catalog.len(),
            recommendations.len()
        );

        Ok(RecommendationReport::new(catalog.len(), min_score, inferred, recommendations))
    }

    /// Re-read the catalog source; in-flight requests keep their snapshot.
    pub fn reload(&self) -> Result<()> {
        self.catalog.reload().map(|_| ())
    }

    fn normalizer(&self) -> TextNormalizer {
        TextNormalizer::new(&self.config.normalizer, self.config.scoring.fuzzy_threshold)
    }

    fn scoring_for(&self, request: &RecommendationRequest) -> ScoringConfig {
        let mut scoring = self.config.scoring.clone();
        if let Some(min_score) = request.min_score {
            scoring.min_score = min_score;
        }
        scoring
    }
}
