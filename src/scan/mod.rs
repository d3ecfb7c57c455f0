//! Traversal and failure aggregation

pub mod report;
pub mod walk;
