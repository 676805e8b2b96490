//! Canonical HCL printer.

use std::fmt::{self, Write};

use crate::{Attribute, Block, Document};

const INDENT: &str = "  ";

/// Render `document`, separating top-level blocks with one blank line.
///
/// The output ends with a single newline after the last block; an empty
/// document renders as the empty string.
pub(super) fn render_document(document: &Document) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (position, block) in document.blocks().iter().enumerate() {
        if position > 0 {
            out.write_char('\n')?;
        }
        write_block(&mut out, block, 0)?;
    }
    Ok(out)
}

fn write_block(out: &mut String, block: &Block, depth: usize) -> fmt::Result {
    write_indent(out, depth)?;
    out.write_str(block.ident())?;
    for label in block.labels() {
        out.write_str(" \"")?;
        write_escaped(out, label)?;
        out.write_char('"')?;
    }
    if block.is_empty() {
        return out.write_str(" {}\n");
    }
    out.write_str(" {\n")?;
    write_attributes(out, block.attributes(), depth + 1)?;
    let mut needs_gap = !block.attributes().is_empty();
    for nested in block.blocks() {
        if needs_gap {
            out.write_char('\n')?;
        }
        write_block(out, nested, depth + 1)?;
        needs_gap = true;
    }
    write_indent(out, depth)?;
    out.write_str("}\n")
}

/// Write attributes with their `=` aligned per group.
///
/// A group is a run of attributes closed by one whose value spans several
/// lines.
fn write_attributes(out: &mut String, attributes: &[Attribute], depth: usize) -> fmt::Result {
    for group in attributes.split_inclusive(|attr| attr.value().contains('\n')) {
        let width = group
            .iter()
            .map(|attr| attr.key().chars().count())
            .max()
            .unwrap_or_default();
        for attr in group {
            write_indent(out, depth)?;
            writeln!(out, "{:<width$} = {}", attr.key(), attr.value())?;
        }
    }
    Ok(())
}

fn write_indent(out: &mut String, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    Ok(())
}

/// Write `label` as the body of a quoted HCL string.
///
/// Template introducers `${` and `%{` are doubled so the label stays a
/// literal when parsed again.
fn write_escaped(out: &mut String, label: &str) -> fmt::Result {
    let mut chars = label.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.write_char(ch)?;
                out.write_char(ch)?;
            }
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            other => out.write_char(other)?,
        }
    }
    Ok(())
}
