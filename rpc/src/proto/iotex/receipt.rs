// Copyright (c) IoTeX Contributors
// SPDX-License-Identifier: Apache-2.0

use types::hash::ActionHash;

use crate::proto::DecodeError;

/// Wire form of an execution receipt.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Receipt {
    #[prost(uint64, tag = "1")]
    pub status: u64,
    #[prost(uint64, tag = "2")]
    pub blk_height: u64,
    #[prost(bytes = "vec", tag = "3")]
    pub act_hash: Vec<u8>,
    #[prost(uint64, tag = "4")]
    pub gas_consumed: u64,
    #[prost(string, tag = "5")]
    pub contract_address: String,
    #[prost(message, repeated, tag = "6")]
    pub logs: Vec<Log>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Log {
    #[prost(string, tag = "1")]
    pub contract_address: String,
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub topics: Vec<Vec<u8>>,
    #[prost(bytes = "vec", tag = "3")]
    pub data: Vec<u8>,
    #[prost(uint64, tag = "4")]
    pub blk_height: u64,
    #[prost(bytes = "vec", tag = "5")]
    pub act_hash: Vec<u8>,
    #[prost(uint32, tag = "6")]
    pub index: u32,
}

impl TryFrom<Receipt> for types::receipt::Receipt {
    type Error = DecodeError;

    fn try_from(value: Receipt) -> Result<Self, Self::Error> {
        let action_hash = ActionHash::from_bytes(&value.act_hash)
            .map_err(|e| DecodeError::invalid("act_hash", e))?;
        Ok(Self {
            status: value.status,
            block_height: value.blk_height,
            action_hash,
            gas_consumed: value.gas_consumed,
            contract_address: value.contract_address,
            logs: value.logs.into_iter().map(Into::into).collect(),
        })
    }
}

impl From<Log> for types::receipt::Log {
    fn from(value: Log) -> Self {
        Self {
            contract_address: value.contract_address,
            topics: value.topics,
            data: value.data,
            block_height: value.blk_height,
            index: value.index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_conversion_checks_hash_length() {
        let proto = Receipt {
            status: 1,
            act_hash: vec![0u8; 8],
            ..Default::default()
        };
        assert!(types::receipt::Receipt::try_from(proto).is_err());

        let proto = Receipt {
            status: 1,
            act_hash: vec![0u8; 32],
            ..Default::default()
        };
        let receipt = types::receipt::Receipt::try_from(proto).unwrap();
        assert!(receipt.is_success());
    }
}
