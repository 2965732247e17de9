//! Merge explicit tag selections with tags inferred from free text

use crate::matching::profile::UserProfile;
use crate::processing::normalizer::InferredTags;
use std::collections::BTreeSet;

/// Per-category union of explicit selections and inferred tags.
///
/// Explicit tags are taken as-is; callers are expected to offer only
/// vocabulary entries.
pub fn assemble<S, I, T>(
    explicit_skills: S,
    explicit_interests: I,
    explicit_traits: T,
    inferred: &InferredTags,
) -> UserProfile
where
    S: IntoIterator,
    S::Item: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
    T: IntoIterator,
    T::Item: Into<String>,
{
    UserProfile {
        skills: union(explicit_skills, &inferred.skills),
        interests: union(explicit_interests, &inferred.interests),
        traits: union(explicit_traits, &inferred.traits),
        ..UserProfile::default()
    }
}

fn union<E>(explicit: E, inferred: &BTreeSet<String>) -> BTreeSet<String>
where
    E: IntoIterator,
    E::Item: Into<String>,
{
    explicit
        .into_iter()
        .map(Into::into)
        .chain(inferred.iter().cloned())
        .collect()
}
