//! Text formats for documents.
//!
//! Merging works on the in-memory [`Document`] model only. Turning text into
//! that model and back is delegated to a [`DocumentFormat`]; [`HclFormat`]
//! parses with `hcl-edit` and prints a canonical layout.

mod parser;
mod printer;

use std::fmt;

use crate::Document;

/// Parser and printer pair used by [`crate::Merger`].
pub trait DocumentFormat {
    /// Diagnostic produced when text cannot be parsed.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Parse `source` into a document.
    ///
    /// # Errors
    ///
    /// Returns the format's diagnostic when `source` is malformed.
    fn parse(&self, source: &str) -> Result<Document, Self::Error>;

    /// Render `document` as text.
    ///
    /// # Errors
    ///
    /// Returns [`fmt::Error`] when the output sink fails.
    fn render(&self, document: &Document) -> Result<String, fmt::Error>;
}

/// HCL native syntax.
///
/// Parsing keeps block types, labels and the source text of attribute
/// expressions; comments and top-level attributes are dropped. Rendering
/// indents by two spaces, aligns the `=` of consecutive attributes, separates
/// nested blocks with one blank line and top-level blocks likewise.
///
/// # Examples
///
/// ```rust
/// use hcl_merge::{DocumentFormat, HclFormat};
///
/// let doc = HclFormat.parse("variable \"a\" {\n  type = string\n  default = \"a\"\n}")?;
/// assert_eq!(
///     HclFormat.render(&doc)?,
///     "variable \"a\" {\n  type    = string\n  default = \"a\"\n}\n",
/// );
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HclFormat;

impl DocumentFormat for HclFormat {
    type Error = hcl_edit::parser::Error;

    fn parse(&self, source: &str) -> Result<Document, Self::Error> {
        parser::parse_document(source)
    }

    fn render(&self, document: &Document) -> Result<String, fmt::Error> {
        printer::render_document(document)
    }
}
