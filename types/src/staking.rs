use serde::{Deserialize, Serialize};

/// A registered consensus candidate eligible to receive delegated stake.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub owner_address: String,
    pub operator_address: String,
    pub reward_address: String,
    /// Decimal string, Rau.
    pub total_weighted_votes: String,
    pub self_stake_bucket_idx: u64,
    /// Decimal string, Rau.
    pub self_staking_tokens: String,
}

impl Candidate {
    /// True when the record carries no identity at all — the read API's way
    /// of answering a singular lookup that matched nothing.
    pub fn is_vacant(&self) -> bool {
        self.owner_address.is_empty() && self.name.is_empty()
    }
}

/// A staking position: tokens locked behind a candidate for a duration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteBucket {
    pub index: u64,
    pub candidate_address: String,
    /// Decimal string, Rau.
    pub staked_amount: String,
    /// Epochs.
    pub staked_duration: u32,
    /// Unix seconds; zero when the chain has not set the field.
    pub create_time: i64,
    pub stake_start_time: i64,
    pub unstake_start_time: i64,
    pub auto_stake: bool,
    pub owner: String,
}
