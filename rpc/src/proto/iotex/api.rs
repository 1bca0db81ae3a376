// Copyright (c) IoTeX Contributors
// SPDX-License-Identifier: Apache-2.0

//! Request/response messages of the `iotexapi.APIService` endpoints this
//! client calls.

use super::{Action, Receipt};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAccountRequest {
    #[prost(string, tag = "1")]
    pub address: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAccountResponse {
    #[prost(message, optional, tag = "1")]
    pub account_meta: Option<AccountMeta>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccountMeta {
    #[prost(string, tag = "1")]
    pub address: String,
    /// Decimal string, Rau.
    #[prost(string, tag = "2")]
    pub balance: String,
    #[prost(uint64, tag = "3")]
    pub nonce: u64,
    #[prost(uint64, tag = "4")]
    pub pending_nonce: u64,
    #[prost(uint64, tag = "5")]
    pub num_actions: u64,
    #[prost(bool, tag = "6")]
    pub is_contract: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendActionRequest {
    #[prost(message, optional, tag = "1")]
    pub action: Option<Action>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendActionResponse {
    /// Hex-encoded hash of the accepted action.
    #[prost(string, tag = "1")]
    pub action_hash: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetReceiptByActionRequest {
    /// Hex-encoded action hash.
    #[prost(string, tag = "1")]
    pub action_hash: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetReceiptByActionResponse {
    #[prost(message, optional, tag = "1")]
    pub receipt_info: Option<ReceiptInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReceiptInfo {
    #[prost(message, optional, tag = "1")]
    pub receipt: Option<Receipt>,
    #[prost(string, tag = "2")]
    pub blk_hash: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadStateRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub protocol_id: Vec<u8>,
    /// Serialized method selector, protocol specific.
    #[prost(bytes = "vec", tag = "2")]
    pub method_name: Vec<u8>,
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub arguments: Vec<Vec<u8>>,
    /// Block height as a decimal string; empty means latest confirmed.
    #[prost(string, tag = "4")]
    pub height: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadStateResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetActionsRequest {
    #[prost(oneof = "get_actions_request::Lookup", tags = "1, 2, 3")]
    pub lookup: Option<get_actions_request::Lookup>,
}

pub mod get_actions_request {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Lookup {
        #[prost(message, tag = "1")]
        ByIndex(super::GetActionsByIndexRequest),
        #[prost(message, tag = "2")]
        ByHash(super::GetActionsByHashRequest),
        #[prost(message, tag = "3")]
        ByAddr(super::GetActionsByAddressRequest),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetActionsByIndexRequest {
    #[prost(uint64, tag = "1")]
    pub start: u64,
    #[prost(uint64, tag = "2")]
    pub count: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetActionsByHashRequest {
    #[prost(string, tag = "1")]
    pub action_hash: String,
    #[prost(bool, tag = "2")]
    pub check_pending: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetActionsByAddressRequest {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(uint64, tag = "2")]
    pub start: u64,
    #[prost(uint64, tag = "3")]
    pub count: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetActionsResponse {
    #[prost(uint64, tag = "1")]
    pub total: u64,
    #[prost(message, repeated, tag = "2")]
    pub action_info: Vec<ActionInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActionInfo {
    #[prost(message, optional, tag = "1")]
    pub action: Option<Action>,
    #[prost(string, tag = "2")]
    pub act_hash: String,
    #[prost(string, tag = "3")]
    pub blk_hash: String,
    #[prost(message, optional, tag = "4")]
    pub timestamp: Option<::prost_types::Timestamp>,
    #[prost(uint64, tag = "5")]
    pub blk_height: u64,
    #[prost(string, tag = "6")]
    pub sender: String,
    #[prost(string, tag = "7")]
    pub gas_fee: String,
}

impl GetActionsRequest {
    pub fn by_address(address: impl Into<String>, start: u64, count: u64) -> Self {
        Self {
            lookup: Some(get_actions_request::Lookup::ByAddr(
                GetActionsByAddressRequest {
                    address: address.into(),
                    start,
                    count,
                },
            )),
        }
    }
}

impl ReadStateRequest {
    pub fn new(
        protocol_id: impl Into<Vec<u8>>,
        method_name: Vec<u8>,
        arguments: Vec<Vec<u8>>,
        height: impl Into<String>,
    ) -> Self {
        Self {
            protocol_id: protocol_id.into(),
            method_name,
            arguments,
            height: height.into(),
        }
    }
}
