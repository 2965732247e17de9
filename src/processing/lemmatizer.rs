//! Rule-based English lemmatizer
//!
//! Collapses plurals and `-ing`/`-ed` verb forms onto a shared base form. The
//! output is only ever compared against other lemmatizer output, so the rules
//! aim for consistency rather than dictionary-perfect lemmas.

use crate::error::{CareerMatcherError, Result};
use regex::{Captures, Regex};
use std::collections::HashMap;

pub struct Lemmatizer {
    irregular: HashMap<&'static str, &'static str>,
    word_regex: Regex,
    alphabetic_regex: Regex,
}

impl Lemmatizer {
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| {
                CareerMatcherError::Processing(format!("Invalid lemmatizer regex: {}", e))
            })
        };

        Ok(Self {
            irregular: Self::create_irregular_forms(),
            word_regex: compile(r"[a-z]+")?,
            alphabetic_regex: compile(r"^[a-z]+$")?,
        })
    }

    /// Base form of a single lowercase word, or `None` when the token is not
    /// a plain alphabetic word (digits, symbols, mixed case).
    pub fn lemmatize(&self, token: &str) -> Option<String> {
        if !self.alphabetic_regex.is_match(token) {
            return None;
        }

        if let Some(base) = self.irregular.get(token) {
            return Some(base.to_string());
        }

        if token.len() <= 3 {
            return Some(token.to_string());
        }

        Some(self.strip_plural(token).unwrap_or_else(|| self.strip_verb_suffix(token)))
    }

    /// Lemmatize a token, falling back to the lowercased token when no lemma is available.
    pub fn lemmatize_or_keep(&self, token: &str) -> String {
        let lower = token.to_lowercase();
        self.lemmatize(&lower).unwrap_or(lower)
    }

    /// Lowercase a multi-word phrase and lemmatize every alphabetic run in it,
    /// keeping separators (spaces, hyphens) in place.
    pub fn lemmatize_phrase(&self, phrase: &str) -> String {
        let lower = phrase.to_lowercase();
        self.word_regex
            .replace_all(&lower, |caps: &Captures| {
                let word = &caps[0];
                self.lemmatize(word).unwrap_or_else(|| word.to_string())
            })
            .into_owned()
    }

    fn strip_plural(&self, word: &str) -> Option<String> {
        if word.ends_with("sses") {
            return Some(word[..word.len() - 2].to_string());
        }
        if let Some(stem) = word.strip_suffix("ies") {
            return Some(if word.len() > 4 {
                format!("{}y", stem)
            } else {
                format!("{}ie", stem)
            });
        }
        for suffix in ["xes", "ches", "shes", "zzes"] {
            if word.ends_with(suffix) {
                return Some(word[..word.len() - 2].to_string());
            }
        }
        if word.ends_with('s') && !["ss", "us", "is"].iter().any(|end| word.ends_with(end)) {
            return Some(word[..word.len() - 1].to_string());
        }
        None
    }

    fn strip_verb_suffix(&self, word: &str) -> String {
        if word.ends_with("eed") {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix("ied") {
            if stem.len() >= 2 {
                return format!("{}y", stem);
            }
        }
        for suffix in ["ing", "ed"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.len() >= 3 && has_vowel(stem) {
                    return restore_stem(stem);
                }
            }
        }
        word.to_string()
    }

    fn create_irregular_forms() -> HashMap<&'static str, &'static str> {
        [
            ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
            ("been", "be"), ("being", "be"), ("has", "have"), ("had", "have"),
            ("having", "have"), ("does", "do"), ("did", "do"), ("done", "do"),
            ("goes", "go"), ("went", "go"), ("gone", "go"), ("ran", "run"),
            ("wrote", "write"), ("written", "write"), ("built", "build"),
            ("taught", "teach"), ("thought", "think"), ("led", "lead"), ("made", "make"),
            ("learnt", "learn"), ("spent", "spend"), ("drew", "draw"), ("drawn", "draw"),
            ("sang", "sing"), ("sung", "sing"), ("began", "begin"), ("begun", "begin"),
            ("bought", "buy"), ("sold", "sell"), ("told", "tell"), ("kept", "keep"),
            ("children", "child"), ("people", "person"), ("men", "man"),
            ("women", "woman"), ("feet", "foot"), ("teeth", "tooth"), ("mice", "mouse"),
            ("analyses", "analysis"), ("crises", "crisis"), ("criteria", "criterion"),
        ]
        .into_iter()
        .collect()
    }
}

/// Undo spelling changes made when a suffix was attached.
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    if ["at", "bl", "iz", "yz"].iter().any(|end| stem.ends_with(end)) || stem.ends_with('v') {
        return format!("{}e", stem);
    }

    // programm -> program, runn -> run
    let last = chars[n - 1];
    if last == chars[n - 2] && is_consonant(&chars, n - 1) && !matches!(last, 'l' | 's' | 'z') {
        return chars[..n - 1].iter().collect();
    }

    // cod -> code, writ -> write
    if measure(&chars) == 1 && ends_cvc(&chars) {
        return format!("{}e", stem);
    }

    stem.to_string()
}

fn has_vowel(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len()).any(|i| !is_consonant(&chars, i))
}

fn is_consonant(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => i == 0 || !is_consonant(chars, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences in the word.
fn measure(chars: &[char]) -> usize {
    let mut count = 0;
    let mut prev_vowel = false;
    for i in 0..chars.len() {
        let consonant = is_consonant(chars, i);
        if consonant && prev_vowel {
            count += 1;
        }
        prev_vowel = !consonant;
    }
    count
}

fn ends_cvc(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 3
        && is_consonant(chars, n - 3)
        && !is_consonant(chars, n - 2)
        && is_consonant(chars, n - 1)
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str) -> String {
        Lemmatizer::new().unwrap().lemmatize(word).unwrap()
    }

    #[test]
    fn test_plurals() {
        assert_eq!(lemma("skills"), "skill");
        assert_eq!(lemma("studies"), "study");
        assert_eq!(lemma("classes"), "class");
        assert_eq!(lemma("boxes"), "box");
        assert_eq!(lemma("analysis"), "analysis");
        assert_eq!(lemma("focus"), "focus");
    }

    #[test]
    fn test_verb_forms() {
        assert_eq!(lemma("coding"), "code");
        assert_eq!(lemma("coded"), "code");
        assert_eq!(lemma("programming"), "program");
        assert_eq!(lemma("designing"), "design");
        assert_eq!(lemma("solving"), "solve");
        assert_eq!(lemma("created"), "create");
        assert_eq!(lemma("studied"), "study");
        assert_eq!(lemma("helping"), "help");
        assert_eq!(lemma("needed"), "need");
    }

    #[test]
    fn test_variants_collapse_to_same_form() {
        let lemmatizer = Lemmatizer::new().unwrap();
        let pairs = [
            ("code", "coding"),
            ("write", "writing"),
            ("skill", "skills"),
            ("teach", "taught"),
        ];
        for (a, b) in pairs {
            assert_eq!(lemmatizer.lemmatize(a), lemmatizer.lemmatize(b), "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_short_and_unchanged_words() {
        assert_eq!(lemma("math"), "math");
        assert_eq!(lemma("art"), "art");
        assert_eq!(lemma("bring"), "bring");
        assert_eq!(lemma("is"), "be");
    }

    #[test]
    fn test_non_alphabetic_token_has_no_lemma() {
        let lemmatizer = Lemmatizer::new().unwrap();
        assert_eq!(lemmatizer.lemmatize("3d"), None);
        assert_eq!(lemmatizer.lemmatize("c++"), None);
        assert_eq!(lemmatizer.lemmatize_or_keep("C++"), "c++");
    }

    #[test]
    fn test_phrase_keeps_separators() {
        let lemmatizer = Lemmatizer::new().unwrap();
        assert_eq!(lemmatizer.lemmatize_phrase("Problem-Solving"), "problem-solve");
        assert_eq!(lemmatizer.lemmatize_phrase("Public Speaking"), "public speak");
        assert_eq!(lemmatizer.lemmatize_phrase("3D Modeling"), "3d model");
    }
}
