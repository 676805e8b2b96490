//! Attribute-level merging.

use crate::{Attribute, Block};

/// Copy every attribute of `source` onto `target`.
///
/// Source attributes are visited in ascending name order. Names already
/// present on `target` are overwritten in place, new names are appended, so
/// copying A and then B leaves B's value on every shared name and keeps the
/// union of both name sets.
///
/// # Examples
///
/// ```rust
/// use hcl_merge::{Block, copy_attributes};
///
/// let a = Block::new("variable", ["a"])
///     .with_attribute("type", "string")
///     .with_attribute("override", "false");
/// let b = Block::new("variable", ["a"])
///     .with_attribute("override", "true")
///     .with_attribute("b", "\"b\"");
///
/// let mut merged = Block::new("variable", ["a"]);
/// copy_attributes(&a, &mut merged);
/// copy_attributes(&b, &mut merged);
///
/// let keys: Vec<&str> = merged.attributes().iter().map(|attr| attr.key()).collect();
/// assert_eq!(keys, ["override", "type", "b"]);
/// assert_eq!(merged.attribute("override"), Some("true"));
/// ```
pub fn copy_attributes(source: &Block, target: &mut Block) {
    let mut sorted: Vec<&Attribute> = source.attributes().iter().collect();
    sorted.sort_by(|left, right| left.key().cmp(right.key()));
    for attr in sorted {
        target.set_attribute(attr.key(), attr.value());
    }
}
