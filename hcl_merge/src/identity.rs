//! Identity keys used to match blocks across documents.

use crate::Block;

/// Build the identity key of `block`: its type followed by its labels, all
/// joined with `.`.
///
/// Keys are compared literally. Two blocks match only when their type and
/// every label agree, in order.
///
/// # Examples
///
/// ```rust
/// use hcl_merge::{Block, block_key};
///
/// let block = Block::new("resource", ["aws_instance", "web"]);
/// assert_eq!(block_key(&block), "resource.aws_instance.web");
/// assert_eq!(block_key(&Block::new("locals", [] as [&str; 0])), "locals.");
/// ```
#[must_use]
pub fn block_key(block: &Block) -> String {
    let mut key = String::from(block.ident());
    key.push('.');
    key.push_str(&block.labels().join("."));
    key
}
