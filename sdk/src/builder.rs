//! Constructors for staking actions with fluent fee configuration.

use std::str::FromStr as _;

use num_bigint::BigUint;
use types::action::{StakingAction, StakingActionKind};

use crate::error::{Error, Result};

/// Builds a [`StakingAction`]: one constructor per variant, then fee
/// parameters, then [`build`](Self::build).
///
/// Gas values are forwarded as given — protocol minimums are enforced by
/// the node, not here.
#[derive(Debug, Clone)]
pub struct ActionBuilder {
    kind: StakingActionKind,
    gas_limit: u64,
    gas_price: String,
}

impl ActionBuilder {
    /// Lock `amount` Rau behind `candidate` for `duration` epochs.
    pub fn create(
        candidate: impl Into<String>,
        amount: &str,
        duration: u32,
        auto_stake: bool,
    ) -> Result<Self> {
        Ok(Self::new(StakingActionKind::Create {
            candidate: candidate.into(),
            amount: checked_amount(amount)?,
            duration,
            auto_stake,
        }))
    }

    /// Top up bucket `bucket_index` with `amount` Rau.
    pub fn add_deposit(bucket_index: u64, amount: &str) -> Result<Self> {
        Ok(Self::new(StakingActionKind::AddDeposit {
            bucket_index,
            amount: checked_amount(amount)?,
        }))
    }

    /// Move the bucket's vote to `candidate`.
    pub fn change_candidate(bucket_index: u64, candidate: impl Into<String>) -> Self {
        Self::new(StakingActionKind::ChangeCandidate {
            bucket_index,
            candidate: candidate.into(),
        })
    }

    /// Extend the bucket to `duration` epochs and set its auto-stake flag.
    pub fn restake(bucket_index: u64, duration: u32, auto_stake: bool) -> Self {
        Self::new(StakingActionKind::Restake {
            bucket_index,
            duration,
            auto_stake,
        })
    }

    /// Begin unlocking the bucket.
    pub fn unstake(bucket_index: u64) -> Self {
        Self::new(StakingActionKind::Unstake { bucket_index })
    }

    fn new(kind: StakingActionKind) -> Self {
        Self {
            kind,
            gas_limit: 0,
            gas_price: "0".to_string(),
        }
    }

    pub fn gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Gas price in Rau, decimal string.
    pub fn gas_price(mut self, gas_price: &str) -> Result<Self> {
        self.gas_price = checked_amount(gas_price)?;
        Ok(self)
    }

    pub fn build(self) -> StakingAction {
        StakingAction {
            kind: self.kind,
            gas_limit: self.gas_limit,
            gas_price: self.gas_price,
        }
    }
}

/// Accept only a non-negative decimal integer of arbitrary precision.
fn checked_amount(amount: &str) -> Result<String> {
    BigUint::from_str(amount).map_err(|_| Error::InvalidAmount(amount.to_string()))?;
    Ok(amount.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_builds_full_action() {
        let action = ActionBuilder::create("alice", "200000000000000000000", 7, true)
            .unwrap()
            .gas_limit(100_000)
            .gas_price("10000000000000")
            .unwrap()
            .build();
        assert_eq!(action.gas_limit, 100_000);
        assert_eq!(action.gas_price, "10000000000000");
        assert_eq!(
            action.kind,
            StakingActionKind::Create {
                candidate: "alice".to_string(),
                amount: "200000000000000000000".to_string(),
                duration: 7,
                auto_stake: true,
            }
        );
    }

    #[test]
    fn rejects_bad_amounts() {
        for bad in ["-5", "", "1.5", "abc", "1 000"] {
            assert!(
                matches!(
                    ActionBuilder::create("alice", bad, 7, true),
                    Err(Error::InvalidAmount(_))
                ),
                "amount {bad:?} should be rejected"
            );
            assert!(ActionBuilder::add_deposit(1, bad).is_err());
        }
    }

    #[test]
    fn forwards_unset_gas() {
        // Gas validation belongs to the node; zero passes through.
        let action = ActionBuilder::unstake(9).build();
        assert_eq!(action.gas_limit, 0);
        assert_eq!(action.gas_price, "0");
    }

    #[test]
    fn amount_precision_is_unbounded() {
        let huge = "9".repeat(100);
        assert!(ActionBuilder::add_deposit(1, &huge).is_ok());
    }
}
