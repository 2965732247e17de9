//! Catalog store and vocabulary derivation

use crate::catalog::record::CareerRecord;
use crate::error::{CareerMatcherError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// Read-only collection of career records plus the vocabulary derived from them.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    records: Vec<CareerRecord>,
    vocabulary: Vocabulary,
}

/// Union of every tag and field used across the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub skills: BTreeSet<String>,
    pub interests: BTreeSet<String>,
    pub traits: BTreeSet<String>,
    pub fields: BTreeSet<String>,
}

impl Vocabulary {
    pub fn from_records(records: &[CareerRecord]) -> Self {
        let mut vocabulary = Self::default();

        for record in records {
            vocabulary.skills.extend(record.skills.iter().cloned());
            vocabulary.interests.extend(record.interests.iter().cloned());
            vocabulary.traits.extend(record.traits.iter().cloned());
            vocabulary.fields.insert(record.field.clone());
        }

        vocabulary
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.interests.is_empty() && self.traits.is_empty()
    }
}

impl CatalogStore {
    /// Load the catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CareerMatcherError::DataLoad(format!("cannot read '{}': {}", path.display(), e))
        })?;

        let store = Self::from_json_str(&content)?;
        info!(
            "Loaded {} careers from {} ({} skills, {} interests, {} traits, {} fields)",
            store.len(),
            path.display(),
            store.vocabulary.skills.len(),
            store.vocabulary.interests.len(),
            store.vocabulary.traits.len(),
            store.vocabulary.fields.len()
        );
        Ok(store)
    }

    /// Parse a catalog from JSON text. The whole load fails on the first bad record.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| CareerMatcherError::DataLoad(format!("malformed catalog JSON: {}", e)))?;

        let entries = match value {
            serde_json::Value::Array(entries) => entries,
            _ => {
                return Err(CareerMatcherError::DataLoad(
                    "catalog must be a JSON array of career records".to_string(),
                ))
            }
        };

        let records = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| CareerRecord::from_value(index, entry))
            .collect::<Result<Vec<_>>>()?;

        Self::from_records(records)
    }

    /// Build a store from already-decoded records. Career names must be unique.
    pub fn from_records(records: Vec<CareerRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (index, record) in records.iter().enumerate() {
            if !seen.insert(record.name.as_str()) {
                return Err(CareerMatcherError::schema(
                    index,
                    Some(&record.name),
                    "duplicate career name",
                ));
            }
        }

        let vocabulary = Vocabulary::from_records(&records);
        Ok(Self { records, vocabulary })
    }

    pub fn records(&self) -> &[CareerRecord] {
        &self.records
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn get(&self, name: &str) -> Option<&CareerRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG: &str = r#"[
        {
            "career": "Data Scientist",
            "description": "Finds patterns in data",
            "courses": ["Statistics"],
            "skills": ["Python", "Math"],
            "interests": ["AI"],
            "traits": ["Curious"],
            "field": "Tech"
        },
        {
            "career": "Nurse",
            "description": "Cares for patients",
            "courses": ["Anatomy"],
            "skills": ["First Aid", "Communication"],
            "interests": ["Healthcare"],
            "traits": ["Empathetic", "Curious"]
        }
    ]"#;

    #[test]
    fn test_vocabulary_is_union_of_records() {
        let store = CatalogStore::from_json_str(CATALOG).unwrap();
        let vocab = store.vocabulary();

        assert_eq!(store.len(), 2);
        assert_eq!(
            vocab.skills.iter().collect::<Vec<_>>(),
            vec!["Communication", "First Aid", "Math", "Python"]
        );
        assert_eq!(vocab.traits.len(), 2);
        assert!(vocab.fields.contains("Tech"));
        assert!(vocab.fields.contains("other"));
    }

    #[test]
    fn test_records_keep_catalog_order() {
        let store = CatalogStore::from_json_str(CATALOG).unwrap();
        let names: Vec<_> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Data Scientist", "Nurse"]);
        assert!(store.get("Nurse").is_some());
        assert!(store.get("Pilot").is_none());
    }

    #[test]
    fn test_malformed_json_is_load_error() {
        let err = CatalogStore::from_json_str("[{\"career\": ").unwrap_err();
        assert!(err.is_data_load());
    }

    #[test]
    fn test_non_array_is_load_error() {
        let err = CatalogStore::from_json_str("{\"career\": \"Nurse\"}").unwrap_err();
        assert!(err.is_data_load());
    }

    #[test]
    fn test_one_bad_record_fails_whole_load() {
        let content = r#"[
            {"career": "A", "description": "", "courses": [], "skills": [], "interests": [], "traits": []},
            {"career": "B", "description": "", "courses": [], "skills": [], "interests": []}
        ]"#;
        let err = CatalogStore::from_json_str(content).unwrap_err();
        match err {
            CareerMatcherError::DataSchema { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let records = vec![
            CareerRecord::new("Nurse", "Health"),
            CareerRecord::new("Nurse", "Health"),
        ];
        let err = CatalogStore::from_records(records).unwrap_err();
        assert!(err.is_data_schema());
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogStore::load(&dir.path().join("careers.json")).unwrap_err();
        assert!(err.is_data_load());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let store = CatalogStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let store = CatalogStore::from_json_str("[]").unwrap();
        assert!(store.is_empty());
        assert!(store.vocabulary().is_empty());
    }
}
