// Copyright (c) IoTeX Contributors
// SPDX-License-Identifier: Apache-2.0

//! Binary codec for the staking protocol's read-state API: method
//! selectors, query arguments, and response payload decoders.

use prost::Message as _;
use types::staking::{Candidate, VoteBucket};

use crate::proto::DecodeError;
use crate::proto::iotex::{
    self, read_staking_data_method::Name, read_staking_data_request as request,
};

/// Protocol namespace every staking read-state query targets.
pub const STAKING_PROTOCOL_ID: &[u8] = b"staking";

/// Serialize the method selector for a staking read query.
pub fn method_selector(name: Name) -> Vec<u8> {
    iotex::ReadStakingDataMethod {
        method: name as i32,
    }
    .encode_to_vec()
}

pub fn candidates_args(offset: u32, limit: u32) -> Vec<u8> {
    encode_request(request::Request::Candidates(request::Candidates {
        pagination: Some(iotex::PaginationParam { offset, limit }),
    }))
}

pub fn candidate_by_name_args(name: impl Into<String>) -> Vec<u8> {
    encode_request(request::Request::CandidateByName(
        request::CandidateByName {
            cand_name: name.into(),
        },
    ))
}

pub fn candidate_by_address_args(owner: impl Into<String>) -> Vec<u8> {
    encode_request(request::Request::CandidateByAddress(
        request::CandidateByAddress {
            owner_addr: owner.into(),
        },
    ))
}

pub fn buckets_by_voter_args(voter: impl Into<String>, offset: u32, limit: u32) -> Vec<u8> {
    encode_request(request::Request::BucketsByVoter(
        request::VoteBucketsByVoter {
            voter_address: voter.into(),
            pagination: Some(iotex::PaginationParam { offset, limit }),
        },
    ))
}

pub fn buckets_by_indexes_args(indexes: &[u64]) -> Vec<u8> {
    encode_request(request::Request::BucketsByIndexes(
        request::VoteBucketsByIndexes {
            index: indexes.to_vec(),
        },
    ))
}

pub fn total_staking_amount_args() -> Vec<u8> {
    encode_request(request::Request::TotalStakingAmount(
        request::TotalStakingAmount {},
    ))
}

fn encode_request(req: request::Request) -> Vec<u8> {
    iotex::ReadStakingDataRequest { request: Some(req) }.encode_to_vec()
}

/// Decode a single candidate record. The returned record may be vacant
/// (see [`Candidate::is_vacant`]) when the lookup matched nothing; mapping
/// that to a not-found error is the caller's concern.
pub fn decode_candidate(data: &[u8]) -> Result<Candidate, DecodeError> {
    Ok(iotex::CandidateV2::decode(data)?.into())
}

/// Decode a candidate page. Zero matching records is an empty list, not an
/// error.
pub fn decode_candidate_list(data: &[u8]) -> Result<Vec<Candidate>, DecodeError> {
    Ok(iotex::CandidateListV2::decode(data)?
        .candidates
        .into_iter()
        .map(Into::into)
        .collect())
}

/// Decode a bucket page. Zero matching records is an empty list, not an
/// error.
pub fn decode_bucket_list(data: &[u8]) -> Result<Vec<VoteBucket>, DecodeError> {
    Ok(iotex::VoteBucketList::decode(data)?
        .buckets
        .into_iter()
        .map(Into::into)
        .collect())
}

/// Decode the chain-wide staked total. The read API answers with account
/// metadata; the total is its balance field, a decimal Rau string.
pub fn decode_total_staking_amount(data: &[u8]) -> Result<String, DecodeError> {
    Ok(iotex::AccountMeta::decode(data)?.balance)
}

#[cfg(test)]
mod tests {
    use prost::Message as _;

    use super::*;

    fn decode_request(data: &[u8]) -> request::Request {
        iotex::ReadStakingDataRequest::decode(data)
            .expect("argument bytes decode")
            .request
            .expect("request variant set")
    }

    #[test]
    fn method_selector_roundtrip() {
        for name in [
            Name::Candidates,
            Name::CandidateByName,
            Name::CandidateByAddress,
            Name::BucketsByVoter,
            Name::BucketsByIndexes,
            Name::TotalStakingAmount,
        ] {
            let decoded =
                iotex::ReadStakingDataMethod::decode(method_selector(name).as_slice()).unwrap();
            assert_eq!(decoded.method(), name);
        }
    }

    #[test]
    fn candidates_args_carry_pagination() {
        match decode_request(&candidates_args(40, 100)) {
            request::Request::Candidates(c) => {
                let pagination = c.pagination.unwrap();
                assert_eq!(pagination.offset, 40);
                assert_eq!(pagination.limit, 100);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn candidate_by_name_args_carry_name() {
        match decode_request(&candidate_by_name_args("alice")) {
            request::Request::CandidateByName(c) => assert_eq!(c.cand_name, "alice"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn candidate_by_address_args_carry_owner() {
        let owner = "io13eslm0ae6mdrj2uz7c260aj670wkdywtaye3gk";
        match decode_request(&candidate_by_address_args(owner)) {
            request::Request::CandidateByAddress(c) => assert_eq!(c.owner_addr, owner),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn buckets_by_voter_args_carry_voter_and_pagination() {
        match decode_request(&buckets_by_voter_args("io1voter", 5, 25)) {
            request::Request::BucketsByVoter(b) => {
                assert_eq!(b.voter_address, "io1voter");
                let pagination = b.pagination.unwrap();
                assert_eq!(pagination.offset, 5);
                assert_eq!(pagination.limit, 25);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn buckets_by_indexes_args_carry_ids() {
        match decode_request(&buckets_by_indexes_args(&[100, 7, 42])) {
            request::Request::BucketsByIndexes(b) => assert_eq!(b.index, vec![100, 7, 42]),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn total_staking_amount_args_encode_empty_variant() {
        assert!(matches!(
            decode_request(&total_staking_amount_args()),
            request::Request::TotalStakingAmount(_)
        ));
    }

    #[test]
    fn empty_bucket_payload_decodes_to_empty_list() {
        let data = iotex::VoteBucketList::default().encode_to_vec();
        assert!(decode_bucket_list(&data).unwrap().is_empty());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        // A lone continuation byte is not a valid message.
        assert!(decode_bucket_list(&[0xff]).is_err());
        assert!(decode_candidate(&[0xff]).is_err());
    }

    #[test]
    fn no_match_candidate_decodes_vacant() {
        let data = iotex::CandidateV2::default().encode_to_vec();
        let candidate = decode_candidate(&data).unwrap();
        assert!(candidate.is_vacant());
    }

    #[test]
    fn candidate_list_preserves_encoded_order() {
        let list = iotex::CandidateListV2 {
            candidates: ["a", "b", "c"]
                .into_iter()
                .map(|name| iotex::CandidateV2 {
                    name: name.to_string(),
                    owner_address: format!("io1{name}"),
                    ..Default::default()
                })
                .collect(),
        };
        let decoded = decode_candidate_list(&list.encode_to_vec()).unwrap();
        let names: Vec<_> = decoded.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn bucket_fields_survive_decoding() {
        let list = iotex::VoteBucketList {
            buckets: vec![iotex::VoteBucket {
                index: 100,
                candidate_address: "io1cand".to_string(),
                staked_amount: "200000000000000000000".to_string(),
                staked_duration: 7,
                create_time: Some(::prost_types::Timestamp {
                    seconds: 1_600_000_000,
                    nanos: 0,
                }),
                stake_start_time: None,
                unstake_start_time: None,
                auto_stake: true,
                owner: "io1owner".to_string(),
            }],
        };
        let decoded = decode_bucket_list(&list.encode_to_vec()).unwrap();
        assert_eq!(decoded.len(), 1);
        let bucket = &decoded[0];
        assert_eq!(bucket.index, 100);
        assert_eq!(bucket.staked_amount, "200000000000000000000");
        assert_eq!(bucket.staked_duration, 7);
        assert_eq!(bucket.create_time, 1_600_000_000);
        assert_eq!(bucket.stake_start_time, 0);
        assert!(bucket.auto_stake);
    }

    #[test]
    fn total_staking_amount_reads_balance() {
        let meta = iotex::AccountMeta {
            balance: "123456789".to_string(),
            ..Default::default()
        };
        assert_eq!(
            decode_total_staking_amount(&meta.encode_to_vec()).unwrap(),
            "123456789"
        );
    }
}
