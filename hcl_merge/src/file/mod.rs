//! Merging files inside a workspace directory.

mod workspace;

pub use workspace::MergeWorkspace;
