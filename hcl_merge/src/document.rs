//! In-memory model of an HCL document.
//!
//! A [`Document`] is an ordered list of top-level [`Block`]s. Each block owns
//! its attributes, stored as raw expression text, and its nested blocks. The
//! model deliberately keeps expressions unevaluated: merging only ever moves
//! values between blocks, it never interprets them.

/// A name bound to a raw, unevaluated expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attribute {
    key: String,
    value: String,
}

impl Attribute {
    /// Create an attribute from its name and raw expression text.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Attribute name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw expression text, exactly as it should be printed.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A typed, optionally labelled container of attributes and nested blocks.
///
/// Attribute order is significant for printing: it is the order in which
/// attributes were first set. Overwriting an existing attribute keeps its
/// position.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Block {
    ident: String,
    labels: Vec<String>,
    attributes: Vec<Attribute>,
    blocks: Vec<Block>,
}

impl Block {
    /// Create an empty block with the given type name and labels.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hcl_merge::Block;
    ///
    /// let block = Block::new("variable", ["region"])
    ///     .with_attribute("type", "string")
    ///     .with_attribute("default", "\"eu-west-1\"");
    /// assert_eq!(block.labels(), ["region"]);
    /// assert_eq!(block.attribute("type"), Some("string"));
    /// ```
    #[must_use]
    pub fn new<I, S>(ident: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ident: ident.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            attributes: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Builder-style variant of [`Block::set_attribute`].
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Builder-style variant of [`Block::push_block`].
    #[must_use]
    pub fn with_block(mut self, block: Self) -> Self {
        self.push_block(block);
        self
    }

    /// Block type name, such as `variable` or `resource`.
    #[must_use]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Ordered block labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Attributes in print order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Look up the raw expression bound to `key`.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(Attribute::value)
    }

    /// Bind `key` to `value`.
    ///
    /// An existing attribute is overwritten in place; a new one is appended.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|attr| attr.key == key) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute { key, value }),
        }
    }

    /// Nested blocks in document order.
    #[must_use]
    pub fn blocks(&self) -> &[Self] {
        &self.blocks
    }

    /// Append a nested block.
    pub fn push_block(&mut self, block: Self) {
        self.blocks.push(block);
    }

    /// Detach and return the nested blocks, leaving this block without children.
    pub fn take_blocks(&mut self) -> Vec<Self> {
        std::mem::take(&mut self.blocks)
    }

    /// Replace the nested blocks.
    pub fn set_blocks(&mut self, blocks: Vec<Self>) {
        self.blocks = blocks;
    }

    /// Whether the block has neither attributes nor nested blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.blocks.is_empty()
    }
}

/// An ordered sequence of top-level blocks.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Top-level blocks in document order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Append a top-level block.
    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Consume the document, returning its top-level blocks.
    #[must_use]
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Whether the document contains no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<T: IntoIterator<Item = Block>>(iter: T) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, Document};
    use rstest::rstest;

    #[rstest]
    fn set_attribute_overwrites_in_place() {
        let mut block = Block::new("variable", ["a"])
            .with_attribute("type", "string")
            .with_attribute("default", "\"a\"");
        block.set_attribute("type", "number");
        block.set_attribute("description", "\"new\"");

        let keys: Vec<&str> = block.attributes().iter().map(|attr| attr.key()).collect();
        assert_eq!(keys, ["type", "default", "description"]);
        assert_eq!(block.attribute("type"), Some("number"));
    }

    #[rstest]
    fn take_blocks_leaves_block_childless() {
        let mut block =
            Block::new("monitor", ["a"]).with_block(Block::new("threshold", [] as [&str; 0]));
        let children = block.take_blocks();
        assert_eq!(children.len(), 1);
        assert!(block.blocks().is_empty());
        assert!(block.is_empty());
    }

    #[rstest]
    fn document_collects_blocks_in_order() {
        let doc: Document = ["a", "b", "c"]
            .into_iter()
            .map(|label| Block::new("variable", [label]))
            .collect();
        let labels: Vec<&str> = doc
            .blocks()
            .iter()
            .filter_map(|block| block.labels().first().map(String::as_str))
            .collect();
        assert_eq!(labels, ["a", "b", "c"]);
    }
}
