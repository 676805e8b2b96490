//! Recursive block merging.
//!
//! Blocks are matched by [`block_key`]. A matched pair is combined into a
//! freshly built block whose attributes are A's overlaid with B's and whose
//! children are merged by the same rule; unmatched blocks are moved into the
//! output untouched. Output order is A's order with matches merged in place,
//! followed by B-only blocks in B's order. The rule applies independently at
//! every depth.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{
    Block, Document, DuplicateKeys, MergeError, MergeResult, Side, block_key, copy_attributes,
};

/// Merge two sibling block lists into one.
///
/// When a list holds several blocks with the same key, the last one is the
/// one matched against the other list. Every A duplicate is still merged and
/// emitted; B duplicates whose key appears in A are all absorbed.
///
/// # Examples
///
/// ```rust
/// use hcl_merge::{Block, merge_blocks};
///
/// let a = vec![Block::new("variable", ["a"]).with_attribute("default", "1")];
/// let b = vec![
///     Block::new("variable", ["b"]),
///     Block::new("variable", ["a"]).with_attribute("default", "2"),
/// ];
///
/// let merged = merge_blocks(a, b);
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0].attribute("default"), Some("2"));
/// assert_eq!(merged[1].labels(), ["b"]);
/// ```
#[must_use]
pub fn merge_blocks(a_blocks: Vec<Block>, b_blocks: Vec<Block>) -> Vec<Block> {
    let b_index: HashMap<String, usize> = b_blocks
        .iter()
        .enumerate()
        .map(|(position, block)| (block_key(block), position))
        .collect();
    let mut a_keys = HashSet::with_capacity(a_blocks.len());
    let mut out = Vec::with_capacity(a_blocks.len() + b_blocks.len());

    for a_block in a_blocks {
        let key = block_key(&a_block);
        let matched = b_index.get(&key).and_then(|&position| b_blocks.get(position));
        let out_block = match matched {
            Some(b_block) => {
                debug!(key = %key, "merging matched block");
                merge_pair(a_block, b_block)
            }
            None => a_block,
        };
        a_keys.insert(key);
        out.push(out_block);
    }

    out.extend(
        b_blocks
            .into_iter()
            .filter(|b_block| !a_keys.contains(&block_key(b_block))),
    );
    out
}

/// Build the combination of two blocks sharing a key.
fn merge_pair(mut a_block: Block, b_block: &Block) -> Block {
    let mut merged = Block::new(a_block.ident(), a_block.labels().iter().map(String::as_str));
    copy_attributes(&a_block, &mut merged);
    copy_attributes(b_block, &mut merged);
    // One B block can match several A duplicates, so its children are cloned.
    merged.set_blocks(merge_blocks(a_block.take_blocks(), b_block.blocks().to_vec()));
    merged
}

/// Merge two documents' top-level blocks.
///
/// # Examples
///
/// ```rust
/// use hcl_merge::{Block, Document, merge_documents};
///
/// let a = Document::from(vec![Block::new("variable", ["a"])]);
/// let b = Document::from(vec![Block::new("variable", ["b"])]);
/// let merged = merge_documents(a, b);
/// assert_eq!(merged.blocks().len(), 2);
/// ```
#[must_use]
pub fn merge_documents(a: Document, b: Document) -> Document {
    Document::from(merge_blocks(a.into_blocks(), b.into_blocks()))
}

/// Merge two documents, applying the duplicate-key `policy` first.
///
/// # Errors
///
/// Returns [`MergeError::DuplicateBlock`] when `policy` is
/// [`DuplicateKeys::Reject`] and either document repeats a key among
/// siblings at any depth. A is checked before B.
pub fn merge_documents_with(
    a: Document,
    b: Document,
    policy: DuplicateKeys,
) -> MergeResult<Document> {
    if policy == DuplicateKeys::Reject {
        ensure_unique_keys(a.blocks(), Side::A)?;
        ensure_unique_keys(b.blocks(), Side::B)?;
    }
    Ok(merge_documents(a, b))
}

/// Check every sibling list under `blocks` for repeated keys.
fn ensure_unique_keys(blocks: &[Block], side: Side) -> MergeResult<()> {
    let mut seen = HashSet::with_capacity(blocks.len());
    for block in blocks {
        let key = block_key(block);
        if !seen.insert(key.clone()) {
            return Err(MergeError::DuplicateBlock { side, key });
        }
        ensure_unique_keys(block.blocks(), side)?;
    }
    Ok(())
}
