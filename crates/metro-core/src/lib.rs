//! metro-core: Data model, field parsers, and editing logic for metro
//! network documents
//!
//! This crate focuses on a small, well-factored surface:
//! - Typed document model (`Network` / `Metro` / `Route`)
//! - Parsers for the CLI's packed string arguments (coordinates, routes)
//! - Edit operations (modify / add / remove) over the in-memory document
//! - Canonical JSON load/store (sorted keys, 4-space indent), and file backup
//!
pub mod backup;
pub mod edit;
pub mod error;
pub mod json;
pub mod model;
pub mod parse;

// Re-export the editing API
pub use backup::backup_file;
pub use edit::{MetroFields, add_metro, add_route, modify_metro, remove_metro, remove_route};
pub use error::EditError;
pub use json::{load, store, to_canonical_string};
pub use model::{Metro, Network, Route};
