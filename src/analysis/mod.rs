//! # Analysis
//!
//! this module computes transaction statistics over a block sequence

use crate::blockchain::{BlockSequence, Transaction};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serializer;
use std::collections::HashSet;

/// Digits the average is rounded to when reported
const AVG_DECIMALS: u32 = 2;

/// Statistics computed over the non-genesis blocks of a sequence
#[derive(Serialize, Debug, PartialEq, Clone, Copy)]
pub struct AnalysisResult {
    total_transactions: u64,
    unique_transactions: u64,
    #[serde(serialize_with = "serialize_avg")]
    avg_transactions_per_block: f64,
}

impl AnalysisResult {
    /// Amount of transactions across all the non-genesis blocks
    pub fn total_transactions(&self) -> u64 {
        self.total_transactions
    }

    /// Amount of distinct transactions across all the non-genesis blocks
    pub fn unique_transactions(&self) -> u64 {
        self.unique_transactions
    }

    /// Average of transactions per non-genesis block
    pub fn avg_transactions_per_block(&self) -> f64 {
        self.avg_transactions_per_block
    }

    /// Average rounded to two decimal digits, with a scale of exactly two digits.
    ///
    /// The exact binary value of the average is rounded, ties to even; so `2.675`, which
    /// is stored as `2.67499...`, becomes `2.67`, while `0.625` becomes `0.62`.
    pub fn avg_rounded(&self) -> Decimal {
        let mut avg = Decimal::from_f64_retain(self.avg_transactions_per_block)
            .unwrap_or_default()
            .round_dp_with_strategy(AVG_DECIMALS, RoundingStrategy::MidpointNearestEven);
        avg.rescale(AVG_DECIMALS);
        avg
    }
}

/// Analyze the transactions of `sequence`, ignoring its genesis block.
///
/// When there are no blocks after genesis, all the statistics are zero.
pub fn analyze(sequence: &BlockSequence) -> AnalysisResult {
    let blocks = sequence.without_genesis();
    trace!(
        "analyzing {} blocks ({} excluding genesis)",
        sequence.len(),
        blocks.len()
    );
    let total_transactions: u64 = blocks.iter().map(|b| b.len() as u64).sum();
    let unique_transactions = blocks
        .iter()
        .flat_map(|b| b.transactions())
        .collect::<HashSet<&Transaction>>()
        .len() as u64;
    let avg_transactions_per_block = if blocks.is_empty() {
        0.0
    } else {
        total_transactions as f64 / blocks.len() as f64
    };
    AnalysisResult {
        total_transactions,
        unique_transactions,
        avg_transactions_per_block,
    }
}

fn serialize_avg<S>(avg: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let avg = Decimal::from_f64_retain(*avg)
        .unwrap_or_default()
        .round_dp_with_strategy(AVG_DECIMALS, RoundingStrategy::MidpointNearestEven)
        .to_f64()
        .unwrap_or_default();
    serializer.serialize_f64(avg)
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::blockchain::Block;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn sequence(blocks: &[&[&str]]) -> BlockSequence {
        blocks
            .iter()
            .map(|ids| Block::new(ids.iter().map(|x| Transaction::from(*x)).collect()))
            .collect::<Vec<Block>>()
            .into()
    }

    #[test]
    fn should_count_transactions_after_genesis() {
        let result = analyze(&sequence(&[&["g"], &["a", "b"], &["a", "c"]]));
        assert_eq!(result.total_transactions(), 4);
        assert_eq!(result.unique_transactions(), 3);
        assert_eq!(result.avg_transactions_per_block(), 2.0);
        assert_eq!(result.avg_rounded(), dec!(2.00));
        assert_eq!(result.avg_rounded().to_string(), "2.00");
    }

    #[test]
    fn should_return_zero_with_genesis_only() {
        let result = analyze(&sequence(&[&["g"]]));
        assert_eq!(result.total_transactions(), 0);
        assert_eq!(result.unique_transactions(), 0);
        assert_eq!(result.avg_transactions_per_block(), 0.0);
        assert_eq!(result.avg_rounded().to_string(), "0.00");
    }

    #[test]
    fn should_return_zero_with_empty_sequence() {
        let result = analyze(&BlockSequence::default());
        assert_eq!(result.total_transactions(), 0);
        assert_eq!(result.unique_transactions(), 0);
        assert_eq!(result.avg_transactions_per_block(), 0.0);
    }

    #[test]
    fn should_return_zero_with_empty_blocks() {
        let result = analyze(&sequence(&[&["g"], &[], &[]]));
        assert_eq!(result.total_transactions(), 0);
        assert_eq!(result.unique_transactions(), 0);
        assert_eq!(result.avg_rounded().to_string(), "0.00");
    }

    #[test]
    fn should_collapse_duplicates_in_same_block() {
        let result = analyze(&sequence(&[&["g"], &["x", "x", "x"]]));
        assert_eq!(result.total_transactions(), 3);
        assert_eq!(result.unique_transactions(), 1);
        assert_eq!(result.avg_rounded().to_string(), "3.00");
    }

    #[test]
    fn should_not_count_genesis_transactions() {
        let result = analyze(&sequence(&[&["g", "h", "i"], &["g"]]));
        assert_eq!(result.total_transactions(), 1);
        assert_eq!(result.unique_transactions(), 1);
    }

    #[test]
    fn should_round_average() {
        let result = analyze(&sequence(&[&["g"], &["a"], &["b", "c"], &[]]));
        assert_eq!(result.total_transactions(), 3);
        assert_eq!(result.avg_rounded().to_string(), "1.00");
        let result = analyze(&sequence(&[&["g"], &["a"], &["b", "c"], &["d", "e"]]));
        assert_eq!(result.avg_rounded().to_string(), "1.67");
    }

    /// `total` distinct transactions spread as evenly as possible over `blocks` blocks
    fn sized_sequence(total: usize, blocks: usize) -> BlockSequence {
        let mut sequence = vec![Block::default()];
        for i in 0..blocks {
            let size = total / blocks + usize::from(i < total % blocks);
            sequence.push(Block::new(
                (0..size)
                    .map(|j| Transaction::from(format!("{}-{}", i, j)))
                    .collect(),
            ));
        }
        sequence.into()
    }

    #[test]
    fn should_round_binary_value_of_average() {
        for (total, blocks, expected) in [
            (107, 40, "2.67"),
            (21, 40, "0.53"),
            (203, 200, "1.01"),
            (5, 8, "0.62"),
            (7, 8, "0.88"),
        ] {
            let result = analyze(&sized_sequence(total, blocks));
            assert_eq!(result.total_transactions(), total as u64);
            assert_eq!(
                result.avg_rounded().to_string(),
                expected,
                "{}/{}",
                total,
                blocks
            );
        }
    }

    #[test]
    fn should_keep_unique_below_total() {
        let inputs: Vec<BlockSequence> = vec![
            sequence(&[]),
            sequence(&[&["a"], &["a"]]),
            sequence(&[&["g"], &["a", "b"], &["b", "a"], &["c"]]),
        ];
        for input in inputs.iter() {
            let result = analyze(input);
            assert!(result.unique_transactions() <= result.total_transactions());
            let expected: u64 = input.without_genesis().iter().map(|b| b.len() as u64).sum();
            assert_eq!(result.total_transactions(), expected);
        }
    }

    #[test]
    fn should_be_deterministic() {
        let input = sequence(&[&["g"], &["a", "b"], &["c"], &["a"]]);
        assert_eq!(analyze(&input), analyze(&input));
    }

    #[test]
    fn should_mix_numbers_and_ids() {
        let input: BlockSequence = serde_json::from_str(r#"[[], [1, "1", 1], [2]]"#).unwrap();
        let result = analyze(&input);
        assert_eq!(result.total_transactions(), 4);
        assert_eq!(result.unique_transactions(), 3);
    }

    #[test]
    fn should_serialize_result() {
        let result = analyze(&sequence(&[&["g"], &["a"], &["b", "c"], &["d", "e"]]));
        assert_eq!(
            serde_json::to_value(result).unwrap(),
            serde_json::json!({
                "total_transactions": 5,
                "unique_transactions": 5,
                "avg_transactions_per_block": 1.67,
            })
        );
    }
}
