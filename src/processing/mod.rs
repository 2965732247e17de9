//! Free-text processing: tokenization, lemmatization and fuzzy tag inference

pub mod lemmatizer;
pub mod normalizer;
pub mod similarity;
pub mod tokenizer;
