//! Text-level merge entrypoints.

use tracing::debug;

use crate::{
    Document, DocumentFormat, HclFormat, MergeError, MergeOptions, MergeResult, Side,
    merge_documents_with,
};

/// Merges documents in a given text format under a set of options.
///
/// A `Merger` holds no mutable state, so a single instance can serve
/// concurrent callers.
///
/// # Examples
///
/// ```rust
/// use hcl_merge::Merger;
///
/// let merged = Merger::new().merge(
///     "variable \"a\" {\n  default = 1\n}",
///     "variable \"a\" {\n  default = 2\n}",
/// )?;
/// assert_eq!(merged, "variable \"a\" {\n  default = 2\n}\n");
/// # Ok::<_, hcl_merge::MergeError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Merger<F = HclFormat> {
    format: F,
    options: MergeOptions,
}

impl Merger<HclFormat> {
    /// Create a merger for HCL text with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: DocumentFormat> Merger<F> {
    /// Create a merger for an arbitrary format.
    #[must_use]
    pub const fn with_format(format: F, options: MergeOptions) -> Self {
        Self { format, options }
    }

    /// Replace the merge options.
    #[must_use]
    pub fn with_options(mut self, options: MergeOptions) -> Self {
        self.options = options;
        self
    }

    /// Active merge options.
    #[must_use]
    pub const fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Parse one input.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Parse`] tagged with `side` when `source` is
    /// malformed.
    pub fn parse(&self, side: Side, source: &str) -> MergeResult<Document> {
        self.format
            .parse(source)
            .map_err(|err| MergeError::parse(side, err))
    }

    /// Merge two parsed documents, applying the duplicate-key policy.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::DuplicateBlock`] when duplicates are rejected
    /// and either document contains one.
    pub fn merge_documents(&self, a: Document, b: Document) -> MergeResult<Document> {
        merge_documents_with(a, b, self.options.duplicate_keys)
    }

    /// Parse both inputs, merge them and render the result.
    ///
    /// A is parsed before B; the first failure is returned and nothing is
    /// merged.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Parse`] for malformed input,
    /// [`MergeError::DuplicateBlock`] for rejected duplicates and
    /// [`MergeError::Serialize`] when rendering fails.
    pub fn merge(&self, a: &str, b: &str) -> MergeResult<String> {
        let a_doc = self.parse(Side::A, a)?;
        let b_doc = self.parse(Side::B, b)?;
        debug!(
            a_blocks = a_doc.blocks().len(),
            b_blocks = b_doc.blocks().len(),
            "merging documents"
        );
        let merged = self.merge_documents(a_doc, b_doc)?;
        Ok(self.format.render(&merged)?)
    }
}
