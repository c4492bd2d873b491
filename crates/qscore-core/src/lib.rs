//! qscore-core — Score categorization, aggregation, and reports.
//!
//! This crate defines the question-record data model, the pure scoring
//! functions the rest of qscore builds on, and the loaders and report types
//! around them.

pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod statistics;
