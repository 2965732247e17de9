//! Career matcher library
//!
//! Normalizes free-text self descriptions into catalog tags and ranks career
//! records against the combined tag set.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod output;
pub mod processing;

pub use api::{CareerMatcher, RecommendationRequest};
pub use config::Config;
pub use error::{CareerMatcherError, Result};
