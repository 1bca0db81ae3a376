//! Survey of large incoming transfers over an address's action history.

use std::collections::BTreeSet;
use std::str::FromStr as _;

use num_bigint::BigUint;
use tracing::debug;

use rpc::proto::iotex::{ActionInfo, action_core};

use crate::IotexClient;
use crate::error::Result;

/// One qualifying transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    pub sender: String,
    /// Rau.
    pub amount: BigUint,
    /// Hex-encoded action hash.
    pub action_hash: String,
}

/// Qualifying transfers in ledger order plus the deduplicated sender set.
#[derive(Debug, Default)]
pub struct TransferReport {
    pub records: Vec<TransferRecord>,
    pub senders: BTreeSet<String>,
}

impl IotexClient {
    /// Raw action history touching an address.
    pub async fn actions_by_address(
        &self,
        address: &str,
        start: u64,
        count: u64,
    ) -> Result<Vec<ActionInfo>> {
        Ok(self
            .rpc()
            .get_actions_by_address(address, start, count)
            .await?)
    }

    /// Transfers of at least `threshold` Rau received by `address` from
    /// anyone else, over `count` actions starting at `start`.
    pub async fn large_transfers_to(
        &self,
        address: &str,
        threshold: &BigUint,
        start: u64,
        count: u64,
    ) -> Result<TransferReport> {
        let actions = self.actions_by_address(address, start, count).await?;
        Ok(collect_large_transfers(&actions, address, threshold))
    }
}

/// Keep an action iff its sender differs from `excluded_sender`, it carries
/// a transfer payload, and the amount is at least `threshold` (inclusive).
pub fn collect_large_transfers(
    actions: &[ActionInfo],
    excluded_sender: &str,
    threshold: &BigUint,
) -> TransferReport {
    let mut report = TransferReport::default();
    for info in actions {
        if info.sender == excluded_sender {
            continue;
        }
        let Some(action_core::Action::Transfer(transfer)) = info
            .action
            .as_ref()
            .and_then(|a| a.core.as_ref())
            .and_then(|c| c.action.as_ref())
        else {
            continue;
        };
        let Ok(amount) = BigUint::from_str(&transfer.amount) else {
            debug!(hash = %info.act_hash, amount = %transfer.amount, "skipping transfer with unparseable amount");
            continue;
        };
        if amount >= *threshold {
            report.senders.insert(info.sender.clone());
            report.records.push(TransferRecord {
                sender: info.sender.clone(),
                amount,
                action_hash: info.act_hash.clone(),
            });
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use rpc::proto::iotex::{Action, ActionCore, StakeReclaim, Transfer};

    use super::*;

    fn transfer_action(sender: &str, amount: &str, hash: &str) -> ActionInfo {
        ActionInfo {
            action: Some(Action {
                core: Some(ActionCore {
                    action: Some(action_core::Action::Transfer(Transfer {
                        amount: amount.to_string(),
                        recipient: "io1recipient".to_string(),
                        payload: Vec::new(),
                    })),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            act_hash: hash.to_string(),
            sender: sender.to_string(),
            ..Default::default()
        }
    }

    fn staking_action(sender: &str) -> ActionInfo {
        ActionInfo {
            action: Some(Action {
                core: Some(ActionCore {
                    action: Some(action_core::Action::StakeUnstake(StakeReclaim {
                        bucket_index: 1,
                        payload: Vec::new(),
                    })),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            sender: sender.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn filters_on_sender_kind_and_threshold() {
        let own = "io1rl2z079wqd6aug8a0xl9fcg288v6rzkxyw2m6l";
        let threshold: BigUint = "500000000000000000000".parse().unwrap();
        let actions = vec![
            // Own outgoing transfer: excluded regardless of amount.
            transfer_action(own, "900000000000000000000", "h0"),
            // Not a transfer: excluded.
            staking_action("io1other"),
            // Below threshold: excluded.
            transfer_action("io1small", "499999999999999999999", "h1"),
            // Exactly at threshold: included (inclusive boundary).
            transfer_action("io1edge", "500000000000000000000", "h2"),
            // Above threshold: included.
            transfer_action("io1whale", "700000000000000000000", "h3"),
            // Same sender again: record kept, sender deduplicated.
            transfer_action("io1whale", "800000000000000000000", "h4"),
        ];

        let report = collect_large_transfers(&actions, own, &threshold);

        let hashes: Vec<_> = report
            .records
            .iter()
            .map(|r| r.action_hash.as_str())
            .collect();
        assert_eq!(hashes, ["h2", "h3", "h4"]);
        let senders: Vec<_> = report.senders.iter().map(String::as_str).collect();
        assert_eq!(senders, ["io1edge", "io1whale"]);
    }

    #[test]
    fn unparseable_amounts_are_skipped() {
        let threshold = BigUint::from(1u8);
        let actions = vec![transfer_action("io1odd", "not-a-number", "h0")];
        let report = collect_large_transfers(&actions, "io1me", &threshold);
        assert!(report.records.is_empty());
        assert!(report.senders.is_empty());
    }

    #[test]
    fn empty_history_yields_empty_report() {
        let report = collect_large_transfers(&[], "io1me", &BigUint::from(1u8));
        assert!(report.records.is_empty());
    }
}
