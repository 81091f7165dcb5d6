//! Word Count Module
//!
//! The application itself: a linear read → tokenize → clean → aggregate → sort
//! pipeline expressed as SQL against an engine [`Session`](crate::session::Session),
//! and the console report built from its results.
//!
//! ## Submodules
//! - **`pipeline`**: registers the corpus and the derived views, runs the aggregations.
//! - **`report`**: renders the summary and tables for the console.
//! - **`types`**: frequency rows, distribution buckets and the run report.

pub mod pipeline;
pub mod report;
pub mod types;

#[cfg(test)]
mod tests;
