//! # Transaction
//!
//! the transaction identifier contained in a block

use serde_json::Number;
use std::fmt;

/// A transaction identifier. Its content is never interpreted: transactions are only
/// counted and compared.
///
/// Nodes export transactions as hex-encoded hashes, but plain numbers are accepted too.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone)]
#[serde(untagged)]
pub enum Transaction {
    Id(String),
    Number(Number),
}

impl From<&str> for Transaction {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for Transaction {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<u64> for Transaction {
    fn from(n: u64) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<i64> for Transaction {
    fn from(n: i64) -> Self {
        Self::Number(Number::from(n))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}
