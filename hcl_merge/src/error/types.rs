//! Primary error enum for merge flows.

use std::fmt;

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type MergeResult<T> = Result<T, MergeError>;

/// Which of the two merge inputs an error refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    /// The base document, whose block order leads the output.
    A,
    /// The overriding document, whose values win on collision.
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("a"),
            Self::B => f.write_str("b"),
        }
    }
}

/// Errors that can occur while merging documents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeError {
    /// One of the inputs is not valid HCL.
    #[error("error parsing hcl document {side}: {source}")]
    Parse {
        /// Input that failed to parse.
        side: Side,
        /// Diagnostic reported by the parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The merged document could not be rendered.
    #[error("error writing hcl document: {0}")]
    Serialize(#[from] fmt::Error),

    /// A sibling list contained the same block key twice and the active
    /// options reject duplicates.
    #[error("duplicate block '{key}' in hcl document {side}")]
    DuplicateBlock {
        /// Input containing the duplicate.
        side: Side,
        /// Identity key shared by the duplicates.
        key: String,
    },

    /// A workspace path could not be opened, read or written.
    #[error("hcl file error in '{path}': {source}")]
    File {
        /// Path relative to the workspace root.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Merge options could not be extracted.
    #[error("invalid merge options: {0}")]
    Options(#[from] Box<FigmentError>),
}
