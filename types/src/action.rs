use serde::{Deserialize, Serialize};

/// A staking state mutation together with its fee parameters, ready to be
/// signed and submitted. Immutable once built; consumed exactly once.
///
/// Amounts are decimal strings of arbitrary-precision integers in Rau, the
/// chain's smallest denomination. Durations are epoch counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingAction {
    pub kind: StakingActionKind,
    pub gas_limit: u64,
    /// Gas price in Rau, decimal string.
    pub gas_price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StakingActionKind {
    /// Lock `amount` behind `candidate` for `duration` epochs, creating a
    /// new vote bucket.
    Create {
        candidate: String,
        amount: String,
        duration: u32,
        auto_stake: bool,
    },
    /// Top up an existing bucket.
    AddDeposit { bucket_index: u64, amount: String },
    /// Move a bucket's vote to a different candidate.
    ChangeCandidate {
        bucket_index: u64,
        candidate: String,
    },
    /// Extend a bucket's duration and set its auto-stake flag.
    Restake {
        bucket_index: u64,
        duration: u32,
        auto_stake: bool,
    },
    /// Begin unlocking a bucket.
    Unstake { bucket_index: u64 },
}

impl StakingActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "stake_create",
            Self::AddDeposit { .. } => "stake_add_deposit",
            Self::ChangeCandidate { .. } => "stake_change_candidate",
            Self::Restake { .. } => "stake_restake",
            Self::Unstake { .. } => "stake_unstake",
        }
    }
}
