//! Report structures and output formatters

pub mod formatter;
pub mod report;
