//! Error types produced while merging documents.

mod constructors;
mod types;

pub use types::{MergeError, MergeResult, Side};
