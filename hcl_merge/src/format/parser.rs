//! Conversion from the `hcl-edit` syntax tree into the document model.

use hcl_edit::Decorate;
use hcl_edit::expr::Expression;
use hcl_edit::parser::{self, parse_body};
use hcl_edit::structure::{self, BlockLabel, Structure};
use tracing::warn;

use crate::{Block, Document};

/// Parse HCL text into a [`Document`].
///
/// Top-level attributes have no place in the model and are dropped with a
/// warning.
pub(super) fn parse_document(source: &str) -> Result<Document, parser::Error> {
    if source.trim().is_empty() {
        return Ok(Document::new());
    }
    let body = parse_body(source)?;
    let mut document = Document::new();
    for structure in body.iter() {
        match structure {
            Structure::Block(block) => document.push_block(convert_block(block)),
            Structure::Attribute(attr) => {
                warn!(
                    key = attr.key.value().as_str(),
                    "dropping top-level attribute outside of any block"
                );
            }
        }
    }
    Ok(document)
}

fn convert_block(source: &structure::Block) -> Block {
    let labels = source.labels.iter().map(label_text);
    let mut block = Block::new(source.ident.value().as_str(), labels);
    for structure in source.body.iter() {
        match structure {
            Structure::Attribute(attr) => {
                block.set_attribute(attr.key.value().as_str(), expression_text(&attr.value));
            }
            Structure::Block(nested) => block.push_block(convert_block(nested)),
        }
    }
    block
}

fn label_text(label: &BlockLabel) -> &str {
    match label {
        BlockLabel::Ident(ident) => ident.value().as_str(),
        BlockLabel::String(string) => string.value().as_str(),
    }
}

/// Source text of `expr` without surrounding whitespace or comments.
fn expression_text(expr: &Expression) -> String {
    let mut bare = expr.clone();
    bare.decor_mut().clear();
    bare.to_string().trim().to_owned()
}
