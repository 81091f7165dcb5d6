//! Word Count on a DataFrame Engine
//!
//! Counts word frequencies in a text corpus by delegating all of the heavy
//! lifting (partitioning, shuffling, aggregation) to Apache DataFusion.
//!
//! ## Modules
//! - **`config`**: environment-driven runtime configuration (`IS_BOLT`, `INPUT_FILE`, ...).
//! - **`ingestion`**: resolves and cleans the input corpus.
//! - **`session`**: the engine session, embedded or attached to a remote connect server,
//!   plus the connect server itself.
//! - **`wordcount`**: the tokenize → clean → count → sort pipeline and the console report.
//! - **`error`**: the crate-wide error type.

pub mod config;
pub mod error;
pub mod ingestion;
pub mod session;
pub mod wordcount;
