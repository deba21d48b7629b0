//! # Blockchain
//!
//! Blockchain module exposes the data model of an exported chain: a sequence of blocks,
//! each one carrying the identifiers of its transactions.

// -- modules
mod transaction;

pub use transaction::Transaction;

/// A block, seen as the collection of the transactions it contains
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone)]
#[serde(transparent)]
pub struct Block {
    transactions: Vec<Transaction>,
}

impl Block {
    /// Instantiates a new `Block`
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Return the transactions in the block
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Return the number of transactions in the block
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns whether the block has no transaction
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl From<Vec<Transaction>> for Block {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self::new(transactions)
    }
}

/// An ordered sequence of blocks, as exported by a single node.
///
/// The first block is the genesis block. The sequence is never mutated once built.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone)]
#[serde(transparent)]
pub struct BlockSequence {
    blocks: Vec<Block>,
}

impl BlockSequence {
    /// Instantiates a new `BlockSequence`
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Return all the blocks, genesis included
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Get genesis block (first block in the sequence), if any
    pub fn genesis(&self) -> Option<&Block> {
        self.blocks.first()
    }

    /// Return the blocks following the genesis block.
    ///
    /// Empty when the sequence has less than two blocks
    pub fn without_genesis(&self) -> &[Block] {
        self.blocks.get(1..).unwrap_or(&[])
    }

    /// Return the amount of blocks, genesis included
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns whether the sequence has no block, not even genesis
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl From<Vec<Block>> for BlockSequence {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}
