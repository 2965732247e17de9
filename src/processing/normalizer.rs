//! Free-text normalization into controlled-vocabulary tags

use crate::catalog::store::Vocabulary;
use crate::config::NormalizerConfig;
use crate::error::Result;
use crate::processing::lemmatizer::Lemmatizer;
use crate::processing::similarity::{partial_ratio, ratio};
use crate::processing::tokenizer::{TokenFilter, Tokenizer};
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tokenizer and lemmatizer shared by every normalizer in the process.
struct TextResources {
    tokenizer: Tokenizer,
    lemmatizer: Lemmatizer,
}

impl TextResources {
    fn init() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
            lemmatizer: Lemmatizer::new()?,
        })
    }
}

static TEXT_RESOURCES: Lazy<Option<TextResources>> = Lazy::new(|| match TextResources::init() {
    Ok(resources) => Some(resources),
    Err(e) => {
        warn!("Text resources unavailable, free-text inference disabled: {}", e);
        None
    }
});

/// Tags recovered from free text, each drawn from the catalog vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferredTags {
    pub skills: BTreeSet<String>,
    pub interests: BTreeSet<String>,
    pub traits: BTreeSet<String>,
}

impl InferredTags {
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.interests.is_empty() && self.traits.is_empty()
    }
}

/// How a token was tied to a vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Substring,
    Dehyphenated,
    Ratio,
    PartialRatio,
}

/// Vocabulary entry with its comparison forms computed once per request.
struct PreparedEntry<'v> {
    original: &'v str,
    lemma: String,
    dehyphenated: String,
}

#[derive(Debug, Clone)]
pub struct TextNormalizer {
    filter: TokenFilter,
    fuzzy_threshold: f64,
}

impl TextNormalizer {
    pub fn new(config: &NormalizerConfig, fuzzy_threshold: f64) -> Self {
        Self {
            filter: TokenFilter {
                skip_stop_words: config.filter_stop_words,
                min_len: config.min_token_len.max(1),
            },
            fuzzy_threshold,
        }
    }

    /// Infer skill, interest and trait tags implied by `free_text`.
    ///
    /// Every token is tried against every entry of the three vocabularies.
    /// Vocabularies are small, so a linear scan is used instead of an index.
    pub fn normalize(&self, free_text: &str, vocabulary: &Vocabulary) -> InferredTags {
        if free_text.trim().is_empty() {
            return InferredTags::default();
        }

        let resources = match TEXT_RESOURCES.as_ref() {
            Some(resources) => resources,
            None => return InferredTags::default(),
        };

        let lemmatizer = &resources.lemmatizer;
        let skills = Self::prepare(&vocabulary.skills, lemmatizer);
        let interests = Self::prepare(&vocabulary.interests, lemmatizer);
        let traits = Self::prepare(&vocabulary.traits, lemmatizer);

        let mut inferred = InferredTags::default();

        for raw in resources.tokenizer.tokens(free_text, self.filter) {
            let token = lemmatizer.lemmatize_or_keep(&raw);

            self.collect_matches(&token, &skills, &mut inferred.skills);
            self.collect_matches(&token, &interests, &mut inferred.interests);
            self.collect_matches(&token, &traits, &mut inferred.traits);
        }

        debug!(
            "Inferred from free text: skills={:?} interests={:?} traits={:?}",
            inferred.skills, inferred.interests, inferred.traits
        );
        inferred
    }

    /// First rule that ties an already lemmatized `token` to `entry`, if any.
    pub fn match_entry(&self, token: &str, entry: &str) -> Option<MatchKind> {
        let resources = TEXT_RESOURCES.as_ref()?;
        let prepared = PreparedEntry::new(entry, &resources.lemmatizer);
        self.match_prepared(token, &prepared)
    }

    fn prepare<'v>(
        entries: &'v BTreeSet<String>,
        lemmatizer: &Lemmatizer,
    ) -> Vec<PreparedEntry<'v>> {
        entries
            .iter()
            .map(|entry| PreparedEntry::new(entry, lemmatizer))
            .collect()
    }

    fn collect_matches(
        &self,
        token: &str,
        entries: &[PreparedEntry<'_>],
        matched: &mut BTreeSet<String>,
    ) {
        for entry in entries {
            if matched.contains(entry.original) {
                continue;
            }
            if let Some(kind) = self.match_prepared(token, entry) {
                debug!("Token '{}' matched '{}' ({:?})", token, entry.original, kind);
                matched.insert(entry.original.to_string());
            }
        }
    }

    fn match_prepared(&self, token: &str, entry: &PreparedEntry<'_>) -> Option<MatchKind> {
        if token.is_empty() {
            return None;
        }
        if entry.lemma.contains(token) {
            return Some(MatchKind::Substring);
        }
        if token == entry.dehyphenated {
            return Some(MatchKind::Dehyphenated);
        }
        if ratio(token, &entry.lemma) >= self.fuzzy_threshold {
            return Some(MatchKind::Ratio);
        }
        if partial_ratio(token, &entry.lemma) >= self.fuzzy_threshold {
            return Some(MatchKind::PartialRatio);
        }
        None
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default(), 80.0)
    }
}

impl<'v> PreparedEntry<'v> {
    fn new(original: &'v str, lemmatizer: &Lemmatizer) -> Self {
        Self {
            original,
            lemma: lemmatizer.lemmatize_phrase(original),
            dehyphenated: original.to_lowercase().replace('-', " "),
        }
    }
}
