//! Career records and their decoding from the catalog source

use crate::error::{CareerMatcherError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Field label assigned to records that do not declare one.
pub const DEFAULT_FIELD: &str = "other";

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerRecord {
    #[serde(rename = "career")]
    pub name: String,
    pub description: String,
    pub courses: Vec<String>,
    pub skills: BTreeSet<String>,
    pub interests: BTreeSet<String>,
    pub traits: BTreeSet<String>,
    pub field: String,
}

/// Catalog entry as it appears on disk, before required fields are checked.
#[derive(Debug, Deserialize)]
struct RawCareerRecord {
    career: Option<String>,
    description: Option<String>,
    courses: Option<Vec<String>>,
    skills: Option<Vec<String>>,
    interests: Option<Vec<String>>,
    traits: Option<Vec<String>>,
    field: Option<String>,
}

impl CareerRecord {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            courses: Vec::new(),
            skills: BTreeSet::new(),
            interests: BTreeSet::new(),
            traits: BTreeSet::new(),
            field: field.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.courses = courses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traits = traits.into_iter().map(Into::into).collect();
        self
    }

    /// Decode one catalog entry, checking every required field.
    ///
    /// `index` is the entry's position in the source and is only used for
    /// error reporting.
    pub fn from_value(index: usize, value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(CareerMatcherError::schema(
                index,
                None,
                "entry is not an object",
            ));
        }

        let raw: RawCareerRecord = serde_json::from_value(value)
            .map_err(|e| CareerMatcherError::schema(index, None, e.to_string()))?;

        let name = raw
            .career
            .ok_or_else(|| CareerMatcherError::schema(index, None, "missing field `career`"))?;

        let missing = |field: &str| {
            CareerMatcherError::schema(index, Some(&name), format!("missing field `{}`", field))
        };

        let description = raw.description.ok_or_else(|| missing("description"))?;
        let courses = raw.courses.ok_or_else(|| missing("courses"))?;
        let skills = raw.skills.ok_or_else(|| missing("skills"))?;
        let interests = raw.interests.ok_or_else(|| missing("interests"))?;
        let traits = raw.traits.ok_or_else(|| missing("traits"))?;

        let field = raw
            .field
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FIELD.to_string());

        Ok(Self {
            name,
            description,
            courses,
            skills: skills.into_iter().collect(),
            interests: interests.into_iter().collect(),
            traits: traits.into_iter().collect(),
            field,
        })
    }
}
