//! Deterministic merging of HCL configuration documents.
//!
//! Two documents are merged block by block. Blocks are identified by their
//! type and labels ([`block_key`]); when both documents hold a block with the
//! same key the blocks are combined, the second document's attribute values
//! winning on collision, and their nested blocks are merged by the same rule.
//! Blocks found in only one document are carried over unchanged. The output
//! keeps the first document's block order and appends blocks that exist only
//! in the second.
//!
//! ```rust
//! let a = r#"
//! variable "name" {
//!   description = "Name to be used on all the resources as identifier"
//!   type        = string
//!   default     = ""
//! }"#;
//! let b = r#"
//! variable "name" {
//!   type    = string
//!   default = "my-name"
//! }"#;
//!
//! let merged = hcl_merge::merge(a, b)?;
//! assert_eq!(
//!     merged,
//!     r#"variable "name" {
//!   default     = "my-name"
//!   description = "Name to be used on all the resources as identifier"
//!   type        = string
//! }
//! "#
//! );
//! # Ok::<_, hcl_merge::MergeError>(())
//! ```
//!
//! The merge itself operates on the [`Document`] model and never fails.
//! Parsing and printing are delegated to a [`DocumentFormat`]; the default
//! [`HclFormat`] uses `hcl-edit` for parsing and prints a canonical layout.

mod attributes;
mod document;
mod error;
mod file;
mod format;
mod identity;
mod merge;
mod merger;
mod options;

pub use attributes::copy_attributes;
pub use document::{Attribute, Block, Document};
pub use error::{MergeError, MergeResult, Side};
pub use file::MergeWorkspace;
pub use format::{DocumentFormat, HclFormat};
pub use identity::block_key;
pub use merge::{merge_blocks, merge_documents, merge_documents_with};
pub use merger::Merger;
pub use options::{DuplicateKeys, ENV_PREFIX, MergeOptions, MissingFiles};

/// Merge two HCL texts with default options.
///
/// # Errors
///
/// Returns [`MergeError::Parse`] when either input is malformed and
/// [`MergeError::Serialize`] when the result cannot be rendered.
pub fn merge(a: &str, b: &str) -> MergeResult<String> {
    Merger::new().merge(a, b)
}

/// Merge two HCL texts under `options`.
///
/// # Errors
///
/// Returns the same errors as [`merge`], plus
/// [`MergeError::DuplicateBlock`] when duplicates are rejected.
pub fn merge_with_options(a: &str, b: &str, options: MergeOptions) -> MergeResult<String> {
    Merger::new().with_options(options).merge(a, b)
}
