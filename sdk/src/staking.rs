//! The sign-submit-confirm pipeline for staking actions.

use std::str::FromStr as _;

use prost::Message as _;
use tonic::Code;
use tracing::{debug, info};

use rpc::proto::iotex::{self, action_core};
use types::action::{StakingAction, StakingActionKind};
use types::crypto::Account;
use types::hash::ActionHash;
use types::receipt::Receipt;

use crate::IotexClient;
use crate::error::{Error, Result};

const ACTION_VERSION: u32 = 1;

impl IotexClient {
    /// Sign `action` with `account` and hand it to the node.
    ///
    /// On success the action is pending inclusion in the ledger — a
    /// network-visible effect that cannot be retracted. Rejection by the
    /// node surfaces as [`Error::SubmissionRejected`] without further
    /// sub-classification; this layer never resubmits.
    pub async fn submit_action(
        &self,
        action: &StakingAction,
        account: &Account,
    ) -> Result<ActionHash> {
        let meta = self.rpc().get_account(account.address().to_string()).await?;
        let core = action_core_from(action, meta.pending_nonce);
        let core_bytes = core.encode_to_vec();
        let signed = iotex::Action {
            core: Some(core),
            sender_pub_key: account.public_key_bytes(),
            signature: account.sign(&core_bytes),
        };
        let hash_hex = self
            .rpc()
            .send_action(signed)
            .await
            .map_err(Error::SubmissionRejected)?;
        let hash =
            ActionHash::from_str(&hash_hex).map_err(|_| Error::MalformedHash(hash_hex))?;
        info!(action = action.kind.name(), %hash, "action submitted");
        Ok(hash)
    }

    /// Wait for the execution receipt of a submitted action.
    ///
    /// Block production is asynchronous, so this sleeps for the configured
    /// confirmation delay before the first lookup, then treats NOT_FOUND as
    /// retryable up to the attempt budget. Any other transport failure is
    /// terminal.
    ///
    /// A receipt with a failing status is still returned — on-chain
    /// execution failure is the caller's concern; see [`ensure_success`].
    /// Dropping the returned future abandons the wait without retracting
    /// the action.
    pub async fn wait_for_receipt(&self, hash: &ActionHash) -> Result<Receipt> {
        tokio::time::sleep(self.confirmation_delay()).await;
        let mut attempts = 0;
        loop {
            attempts += 1;
            match self.rpc().get_receipt_by_action(hash.to_string()).await {
                Ok(receipt) => {
                    let receipt: Receipt = receipt.try_into()?;
                    debug!(%hash, status = receipt.status, "receipt retrieved");
                    return Ok(receipt);
                }
                Err(status) if status.code() == Code::NotFound => {
                    if attempts >= self.max_poll_attempts() {
                        return Err(Error::ConfirmationTimeout {
                            hash: *hash,
                            attempts,
                        });
                    }
                    debug!(%hash, attempts, "receipt not yet available");
                    tokio::time::sleep(self.poll_interval()).await;
                }
                Err(status) => return Err(Error::Transport(status)),
            }
        }
    }

    /// Submit, wait for the receipt, and require on-chain success.
    pub async fn execute(&self, action: &StakingAction, account: &Account) -> Result<Receipt> {
        let hash = self.submit_action(action, account).await?;
        let receipt = self.wait_for_receipt(&hash).await?;
        ensure_success(&receipt)?;
        Ok(receipt)
    }
}

/// Interpret a receipt's status: anything other than the success code is a
/// reverted action.
pub fn ensure_success(receipt: &Receipt) -> Result<()> {
    if receipt.is_success() {
        Ok(())
    } else {
        Err(Error::ActionReverted {
            status: receipt.status,
        })
    }
}

/// Bucket index assigned by a `Create` action.
///
/// The chain guarantees the creation log on a successful create; its
/// absence means the receipt cannot have come from one.
pub fn created_bucket_id(receipt: &Receipt) -> Result<u64> {
    receipt
        .created_bucket_id()
        .ok_or(Error::Extraction(receipt.action_hash))
}

fn action_core_from(action: &StakingAction, nonce: u64) -> iotex::ActionCore {
    let payload = match action.kind.clone() {
        StakingActionKind::Create {
            candidate,
            amount,
            duration,
            auto_stake,
        } => action_core::Action::StakeCreate(iotex::StakeCreate {
            candidate_name: candidate,
            staked_amount: amount,
            staked_duration: duration,
            auto_stake,
            payload: Vec::new(),
        }),
        StakingActionKind::AddDeposit {
            bucket_index,
            amount,
        } => action_core::Action::StakeAddDeposit(iotex::StakeAddDeposit {
            bucket_index,
            amount,
            payload: Vec::new(),
        }),
        StakingActionKind::ChangeCandidate {
            bucket_index,
            candidate,
        } => action_core::Action::StakeChangeCandidate(iotex::StakeChangeCandidate {
            bucket_index,
            candidate_name: candidate,
            payload: Vec::new(),
        }),
        StakingActionKind::Restake {
            bucket_index,
            duration,
            auto_stake,
        } => action_core::Action::StakeRestake(iotex::StakeRestake {
            bucket_index,
            staked_duration: duration,
            auto_stake,
            payload: Vec::new(),
        }),
        StakingActionKind::Unstake { bucket_index } => {
            action_core::Action::StakeUnstake(iotex::StakeReclaim {
                bucket_index,
                payload: Vec::new(),
            })
        }
    };
    iotex::ActionCore {
        version: ACTION_VERSION,
        nonce,
        gas_limit: action.gas_limit,
        gas_price: action.gas_price.clone(),
        chain_id: 0,
        action: Some(payload),
    }
}

#[cfg(test)]
mod tests {
    use prost::Message as _;
    use types::receipt::{Log, RECEIPT_STATUS_SUCCESS};

    use super::*;
    use crate::ActionBuilder;

    fn create_action() -> StakingAction {
        ActionBuilder::create("alice", "200000000000000000000", 7, true)
            .unwrap()
            .gas_limit(100_000)
            .gas_price("10000000000000")
            .unwrap()
            .build()
    }

    #[test]
    fn success_status_is_accepted() {
        let receipt = Receipt {
            status: RECEIPT_STATUS_SUCCESS,
            ..Default::default()
        };
        assert!(ensure_success(&receipt).is_ok());
    }

    #[test]
    fn any_other_status_is_a_revert() {
        for status in [0u64, 3, 106] {
            let receipt = Receipt {
                status,
                ..Default::default()
            };
            assert!(matches!(
                ensure_success(&receipt),
                Err(Error::ActionReverted { status: s }) if s == status
            ));
        }
    }

    #[test]
    fn bucket_id_extraction() {
        let mut receipt = Receipt {
            status: RECEIPT_STATUS_SUCCESS,
            ..Default::default()
        };
        assert!(matches!(
            created_bucket_id(&receipt),
            Err(Error::Extraction(_))
        ));

        receipt.logs.push(Log {
            topics: vec![vec![0u8; 32], 17u64.to_be_bytes().to_vec()],
            ..Default::default()
        });
        assert_eq!(created_bucket_id(&receipt).unwrap(), 17);
    }

    #[test]
    fn core_encoding_roundtrips_create_fields() {
        let core = action_core_from(&create_action(), 42);
        let decoded = iotex::ActionCore::decode(core.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.version, ACTION_VERSION);
        assert_eq!(decoded.nonce, 42);
        assert_eq!(decoded.gas_limit, 100_000);
        assert_eq!(decoded.gas_price, "10000000000000");
        match decoded.action.unwrap() {
            action_core::Action::StakeCreate(create) => {
                assert_eq!(create.candidate_name, "alice");
                assert_eq!(create.staked_amount, "200000000000000000000");
                assert_eq!(create.staked_duration, 7);
                assert!(create.auto_stake);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn every_kind_maps_to_its_payload() {
        let cases = [
            (
                ActionBuilder::add_deposit(3, "10000000000000000000")
                    .unwrap()
                    .build(),
                "stake_add_deposit",
            ),
            (
                ActionBuilder::change_candidate(3, "bob").build(),
                "stake_change_candidate",
            ),
            (ActionBuilder::restake(3, 21, false).build(), "stake_restake"),
            (ActionBuilder::unstake(3).build(), "stake_unstake"),
        ];
        for (action, name) in cases {
            assert_eq!(action.kind.name(), name);
            let core = action_core_from(&action, 1);
            let bucket_index = match core.action.unwrap() {
                action_core::Action::StakeAddDeposit(p) => p.bucket_index,
                action_core::Action::StakeChangeCandidate(p) => p.bucket_index,
                action_core::Action::StakeRestake(p) => p.bucket_index,
                action_core::Action::StakeUnstake(p) => p.bucket_index,
                other => panic!("unexpected payload: {other:?}"),
            };
            assert_eq!(bucket_index, 3);
        }
    }

    #[test]
    fn signed_action_envelope_is_well_formed() {
        let account = Account::generate();
        let core = action_core_from(&create_action(), 7);
        let core_bytes = core.encode_to_vec();
        let signed = iotex::Action {
            core: Some(core),
            sender_pub_key: account.public_key_bytes(),
            signature: account.sign(&core_bytes),
        };
        assert_eq!(signed.sender_pub_key.len(), 65);
        assert_eq!(signed.sender_pub_key[0], 0x04);
        assert_eq!(signed.signature.len(), 65);
    }
}
