//! Corpus Ingestion Module
//!
//! Decides where the text comes from and turns it into the line list loaded
//! into the engine.
//!
//! ## Workflow
//! 1. **Resolve**: an explicit `INPUT_FILE` must exist; the default path is optional.
//! 2. **Read**: the file is read whole, or the bundled sample corpus is used.
//! 3. **Clean**: lines are trimmed and blank lines dropped.

pub mod source;
pub mod types;
