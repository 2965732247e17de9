//! Profile assembly and career scoring

pub mod assembler;
pub mod profile;
pub mod scoring;

pub use assembler::assemble;
pub use profile::{ScoringConfig, UserProfile};
pub use scoring::{MatchBreakdown, Recommendation, ScoringEngine};
