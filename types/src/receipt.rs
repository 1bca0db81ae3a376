use num_bigint::BigUint;

use crate::hash::ActionHash;

/// Receipt status code the chain assigns to a successful execution. Any
/// other code means the action executed and failed.
pub const RECEIPT_STATUS_SUCCESS: u64 = 1;

/// The chain's authoritative record of an action's execution outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Receipt {
    pub status: u64,
    pub block_height: u64,
    pub action_hash: ActionHash,
    pub gas_consumed: u64,
    pub contract_address: String,
    pub logs: Vec<Log>,
}

/// A log entry emitted during action execution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Log {
    pub contract_address: String,
    pub topics: Vec<Vec<u8>>,
    pub data: Vec<u8>,
    pub block_height: u64,
    pub index: u32,
}

impl Receipt {
    pub fn is_success(&self) -> bool {
        self.status == RECEIPT_STATUS_SUCCESS
    }

    /// Bucket index assigned by a create action: the first log's second
    /// topic, read as a big-endian unsigned integer. `None` when the
    /// receipt carries no such log data or the value exceeds `u64`.
    pub fn created_bucket_id(&self) -> Option<u64> {
        let topic = self.logs.first()?.topics.get(1)?;
        u64::try_from(&BigUint::from_bytes_be(topic)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt_with_topics(topics: Vec<Vec<u8>>) -> Receipt {
        Receipt {
            status: RECEIPT_STATUS_SUCCESS,
            logs: vec![Log {
                topics,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn status_predicate() {
        let mut receipt = Receipt::default();
        assert!(!receipt.is_success());
        receipt.status = RECEIPT_STATUS_SUCCESS;
        assert!(receipt.is_success());
        receipt.status = 3;
        assert!(!receipt.is_success());
    }

    #[test]
    fn bucket_id_from_second_topic() {
        let receipt = receipt_with_topics(vec![vec![0u8; 32], 42u64.to_be_bytes().to_vec()]);
        assert_eq!(receipt.created_bucket_id(), Some(42));
    }

    #[test]
    fn bucket_id_from_wide_topic() {
        // On the wire topics are 32-byte words; the value sits in the tail.
        let mut topic = vec![0u8; 24];
        topic.extend_from_slice(&17u64.to_be_bytes());
        let receipt = receipt_with_topics(vec![vec![0u8; 32], topic]);
        assert_eq!(receipt.created_bucket_id(), Some(17));
    }

    #[test]
    fn bucket_id_requires_log_data() {
        assert_eq!(Receipt::default().created_bucket_id(), None);
        let receipt = receipt_with_topics(vec![vec![0u8; 32]]);
        assert_eq!(receipt.created_bucket_id(), None);
    }
}
