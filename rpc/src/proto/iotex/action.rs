// Copyright (c) IoTeX Contributors
// SPDX-License-Identifier: Apache-2.0

/// Fee-bearing envelope of a state mutation, before signing.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActionCore {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    #[prost(uint64, tag = "2")]
    pub nonce: u64,
    #[prost(uint64, tag = "3")]
    pub gas_limit: u64,
    /// Decimal string, Rau.
    #[prost(string, tag = "4")]
    pub gas_price: String,
    #[prost(uint32, tag = "5")]
    pub chain_id: u32,
    #[prost(oneof = "action_core::Action", tags = "10, 40, 41, 43, 44, 45")]
    pub action: Option<action_core::Action>,
}

pub mod action_core {
    /// Payload variants this client submits or inspects. The canonical
    /// schema carries more; their tags stay reserved here.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Action {
        #[prost(message, tag = "10")]
        Transfer(super::Transfer),
        #[prost(message, tag = "40")]
        StakeCreate(super::StakeCreate),
        #[prost(message, tag = "41")]
        StakeUnstake(super::StakeReclaim),
        #[prost(message, tag = "43")]
        StakeAddDeposit(super::StakeAddDeposit),
        #[prost(message, tag = "44")]
        StakeRestake(super::StakeRestake),
        #[prost(message, tag = "45")]
        StakeChangeCandidate(super::StakeChangeCandidate),
    }
}

/// A signed action ready for submission.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Action {
    #[prost(message, optional, tag = "1")]
    pub core: Option<ActionCore>,
    /// Uncompressed SEC1 public key, 65 bytes.
    #[prost(bytes = "vec", tag = "2")]
    pub sender_pub_key: Vec<u8>,
    /// Recoverable secp256k1 signature, 65 bytes.
    #[prost(bytes = "vec", tag = "3")]
    pub signature: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transfer {
    /// Decimal string, Rau.
    #[prost(string, tag = "1")]
    pub amount: String,
    #[prost(string, tag = "2")]
    pub recipient: String,
    #[prost(bytes = "vec", tag = "3")]
    pub payload: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StakeCreate {
    #[prost(string, tag = "1")]
    pub candidate_name: String,
    #[prost(string, tag = "2")]
    pub staked_amount: String,
    /// Epochs.
    #[prost(uint32, tag = "3")]
    pub staked_duration: u32,
    #[prost(bool, tag = "4")]
    pub auto_stake: bool,
    #[prost(bytes = "vec", tag = "5")]
    pub payload: Vec<u8>,
}

/// Shared payload for unstake and withdraw.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StakeReclaim {
    #[prost(uint64, tag = "1")]
    pub bucket_index: u64,
    #[prost(bytes = "vec", tag = "2")]
    pub payload: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StakeAddDeposit {
    #[prost(uint64, tag = "1")]
    pub bucket_index: u64,
    #[prost(string, tag = "2")]
    pub amount: String,
    #[prost(bytes = "vec", tag = "3")]
    pub payload: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StakeRestake {
    #[prost(uint64, tag = "1")]
    pub bucket_index: u64,
    #[prost(uint32, tag = "2")]
    pub staked_duration: u32,
    #[prost(bool, tag = "3")]
    pub auto_stake: bool,
    #[prost(bytes = "vec", tag = "4")]
    pub payload: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StakeChangeCandidate {
    #[prost(uint64, tag = "1")]
    pub bucket_index: u64,
    #[prost(string, tag = "2")]
    pub candidate_name: String,
    #[prost(bytes = "vec", tag = "3")]
    pub payload: Vec<u8>,
}
