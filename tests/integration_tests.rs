//! Integration tests for the career matcher

use career_matcher::catalog::{CatalogHandle, CatalogStore};
use career_matcher::config::Config;
use career_matcher::input::ProfileDocument;
use career_matcher::matching::{ScoringConfig, ScoringEngine, UserProfile};
use career_matcher::processing::normalizer::TextNormalizer;
use career_matcher::{CareerMatcher, CareerMatcherError, RecommendationRequest};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn fixture(name: &str) -> PathBuf {
    Path::new("tests/fixtures").join(name)
}

fn fixture_matcher() -> CareerMatcher {
    let mut config = Config::default();
    config.catalog.data_path = fixture("careers.json");
    CareerMatcher::open(config).unwrap()
}

fn careers(results: &[career_matcher::matching::Recommendation]) -> Vec<&str> {
    results.iter().map(|r| r.career.as_str()).collect()
}

#[test]
fn test_load_fixture_catalog() {
    let store = CatalogStore::load(&fixture("careers.json")).unwrap();

    assert_eq!(store.len(), 5);
    assert_eq!(store.get("Librarian").unwrap().field, "other");
    assert!(store.vocabulary().fields.contains("other"));
    assert!(store.vocabulary().skills.contains("Python"));
}

#[test]
fn test_missing_catalog_is_load_error() {
    let err = CatalogStore::load(&fixture("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, CareerMatcherError::DataLoad(_)));
}

#[test]
fn test_malformed_catalog_is_load_error() {
    let err = CatalogStore::load(&fixture("malformed.json")).unwrap_err();
    assert!(matches!(err, CareerMatcherError::DataLoad(_)));
}

#[test]
fn test_record_without_skills_is_schema_error() {
    let err = CatalogStore::load(&fixture("missing_skills.json")).unwrap_err();
    match err {
        CareerMatcherError::DataSchema { index, career, problem } => {
            assert_eq!(index, 0);
            assert_eq!(career.as_deref(), Some("Pilot"));
            assert!(problem.contains("skills"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_single_record_scenario() {
    let store = CatalogStore::load(&fixture("careers.json")).unwrap();
    let profile = UserProfile::new().with_skills(["Python"]).with_traits(["Curious"]);

    let included = ScoringEngine::new(ScoringConfig::default()).score(&profile, &store);
    let data_scientist = included.iter().find(|r| r.career == "Data Scientist").unwrap();
    assert_eq!(data_scientist.score, 3.0);

    let strict =
        ScoringEngine::new(ScoringConfig::default().with_min_score(4.0)).score(&profile, &store);
    assert!(strict.iter().all(|r| r.career != "Data Scientist"));
}

#[test]
fn test_equal_scores_keep_catalog_order() {
    let store = CatalogStore::load(&fixture("careers.json")).unwrap();
    let profile = UserProfile::new()
        .with_skills(["Coding", "Math"])
        .with_traits(["Curious"]);

    let results = ScoringEngine::default().score(&profile, &store);

    assert_eq!(careers(&results), vec!["Software Developer", "Statistician", "Data Scientist"]);
    assert_eq!(results[0].score, 5.0);
    assert_eq!(results[1].score, 5.0);
    assert_eq!(results[2].score, 3.0);
}

#[test]
fn test_results_respect_invariants() {
    let store = CatalogStore::load(&fixture("careers.json")).unwrap();
    let profile = UserProfile::new()
        .with_skills(["Coding", "Math", "First Aid"])
        .with_interests(["AI", "Healthcare", "Reading"])
        .with_traits(["Curious", "Patient", "Organized"])
        .with_fields(["Tech", "Healthcare"]);
    let config = ScoringConfig::default().with_min_score(2.5);

    let results = ScoringEngine::new(config.clone()).score(&profile, &store);
    assert!(!results.is_empty());

    for window in results.windows(2) {
        assert!(window[0].score >= window[1].score);
    }

    for rec in &results {
        let record = store.get(&rec.career).unwrap();
        assert!(rec.score >= config.min_score);
        assert!(profile.fields.contains(&rec.field));
        let shared = |mine: &BTreeSet<String>, theirs: &BTreeSet<String>, tags: &[String]| {
            tags.iter().all(|t| mine.contains(t) && theirs.contains(t))
        };
        assert!(shared(&profile.skills, &record.skills, &rec.skills));
        assert!(shared(&profile.interests, &record.interests, &rec.interests));
        assert!(shared(&profile.traits, &record.traits, &rec.traits));
        assert_eq!(
            rec.score,
            rec.skills.len() as f64 * 2.0 + rec.interests.len() as f64 + rec.traits.len() as f64
        );
    }
}

#[test]
fn test_zero_min_score_includes_unmatched_careers() {
    let store = CatalogStore::load(&fixture("careers.json")).unwrap();
    let engine = ScoringEngine::new(ScoringConfig::default().with_min_score(0.0));

    let results = engine.score(&UserProfile::new(), &store);
    assert_eq!(results.len(), store.len());
    assert!(results.iter().all(|r| r.score == 0.0));
    assert_eq!(
        careers(&results),
        store.records().iter().map(|r| r.name.as_str()).collect::<Vec<_>>()
    );
}

#[test]
fn test_free_text_scenario() {
    let store = CatalogStore::load(&fixture("careers.json")).unwrap();
    let normalizer = TextNormalizer::default();

    let tags = normalizer.normalize("I like coding and math", store.vocabulary());
    assert!(tags.skills.contains("Coding"));
    assert!(tags.skills.contains("Math"));

    assert!(normalizer.normalize("", store.vocabulary()).is_empty());
}

#[test]
fn test_profile_file_end_to_end() {
    let matcher = fixture_matcher();
    let request = ProfileDocument::load(&fixture("profile.json")).unwrap().into_request();

    let results = matcher.recommend(&request).unwrap();

    assert_eq!(careers(&results), vec!["Software Developer", "Data Scientist"]);
    assert!(results.iter().all(|r| r.field == "Tech" && r.score >= 3.0));
    assert!(results[0].skills.contains(&"Coding".to_string()));
}

#[test]
fn test_empty_request_returns_nothing() {
    let matcher = fixture_matcher();
    assert!(matcher.recommend(&RecommendationRequest::default()).unwrap().is_empty());
}

#[test]
fn test_reload_swaps_whole_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("careers.json");
    std::fs::copy(fixture("careers.json"), &path).unwrap();

    let handle = Arc::new(CatalogHandle::open(&path).unwrap());
    let matcher = CareerMatcher::with_catalog(Arc::clone(&handle), Config::default());
    let before = matcher.catalog();

    std::fs::write(
        &path,
        r#"[{"career": "Astronaut", "description": "", "courses": [], "skills": ["Math"], "interests": ["Space"], "traits": ["Brave"], "field": "Science"}]"#,
    )
    .unwrap();
    matcher.reload().unwrap();

    let after = matcher.catalog();
    assert_eq!(before.len(), 5);
    assert!(before.vocabulary().skills.contains("Python"));
    assert_eq!(after.len(), 1);
    assert!(!after.vocabulary().skills.contains("Python"));
    assert!(after.vocabulary().interests.contains("Space"));
    assert_eq!(handle.snapshot().len(), 1);
}

#[test]
fn test_concurrent_requests_share_catalog() {
    let matcher = Arc::new(fixture_matcher());
    let request = RecommendationRequest {
        skills: vec!["Coding".to_string(), "Math".to_string()],
        traits: vec!["Curious".to_string()],
        ..RecommendationRequest::default()
    };
    let expected = matcher.recommend(&request).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let matcher = Arc::clone(&matcher);
                let request = request.clone();
                scope.spawn(move || matcher.recommend(&request).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
