// Copyright (c) IoTeX Contributors
// SPDX-License-Identifier: Apache-2.0

//! Read-state request and response messages for the staking protocol.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PaginationParam {
    #[prost(uint32, tag = "1")]
    pub offset: u32,
    #[prost(uint32, tag = "2")]
    pub limit: u32,
}

/// Selector naming which staking read method a request targets.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadStakingDataMethod {
    #[prost(enumeration = "read_staking_data_method::Name", tag = "1")]
    pub method: i32,
}

pub mod read_staking_data_method {
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum Name {
        Invalid = 0,
        Buckets = 1,
        BucketsByVoter = 2,
        BucketsByCandidate = 3,
        BucketsByIndexes = 4,
        BucketsCount = 5,
        Candidates = 6,
        CandidateByName = 7,
        CandidateByAddress = 8,
        TotalStakingAmount = 9,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadStakingDataRequest {
    #[prost(
        oneof = "read_staking_data_request::Request",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9"
    )]
    pub request: Option<read_staking_data_request::Request>,
}

pub mod read_staking_data_request {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct VoteBuckets {
        #[prost(message, optional, tag = "1")]
        pub pagination: Option<super::PaginationParam>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct VoteBucketsByVoter {
        #[prost(string, tag = "1")]
        pub voter_address: String,
        #[prost(message, optional, tag = "2")]
        pub pagination: Option<super::PaginationParam>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct VoteBucketsByCandidate {
        #[prost(string, tag = "1")]
        pub cand_name: String,
        #[prost(message, optional, tag = "2")]
        pub pagination: Option<super::PaginationParam>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct VoteBucketsByIndexes {
        #[prost(uint64, repeated, tag = "1")]
        pub index: Vec<u64>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct VoteBucketsCount {}

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Candidates {
        #[prost(message, optional, tag = "1")]
        pub pagination: Option<super::PaginationParam>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CandidateByName {
        #[prost(string, tag = "1")]
        pub cand_name: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CandidateByAddress {
        #[prost(string, tag = "1")]
        pub owner_addr: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TotalStakingAmount {}

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Request {
        #[prost(message, tag = "1")]
        Buckets(VoteBuckets),
        #[prost(message, tag = "2")]
        BucketsByVoter(VoteBucketsByVoter),
        #[prost(message, tag = "3")]
        BucketsByCandidate(VoteBucketsByCandidate),
        #[prost(message, tag = "4")]
        BucketsByIndexes(VoteBucketsByIndexes),
        #[prost(message, tag = "5")]
        BucketsCount(VoteBucketsCount),
        #[prost(message, tag = "6")]
        Candidates(Candidates),
        #[prost(message, tag = "7")]
        CandidateByName(CandidateByName),
        #[prost(message, tag = "8")]
        CandidateByAddress(CandidateByAddress),
        #[prost(message, tag = "9")]
        TotalStakingAmount(TotalStakingAmount),
    }
}

/// Candidate record as served by the staking read API.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CandidateV2 {
    #[prost(string, tag = "1")]
    pub owner_address: String,
    #[prost(string, tag = "2")]
    pub operator_address: String,
    #[prost(string, tag = "3")]
    pub reward_address: String,
    #[prost(string, tag = "4")]
    pub name: String,
    #[prost(string, tag = "5")]
    pub total_weighted_votes: String,
    #[prost(uint64, tag = "6")]
    pub self_stake_bucket_idx: u64,
    #[prost(string, tag = "7")]
    pub self_staking_tokens: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CandidateListV2 {
    #[prost(message, repeated, tag = "1")]
    pub candidates: Vec<CandidateV2>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VoteBucket {
    #[prost(uint64, tag = "1")]
    pub index: u64,
    #[prost(string, tag = "2")]
    pub candidate_address: String,
    #[prost(string, tag = "3")]
    pub staked_amount: String,
    #[prost(uint32, tag = "4")]
    pub staked_duration: u32,
    #[prost(message, optional, tag = "5")]
    pub create_time: Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "6")]
    pub stake_start_time: Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "7")]
    pub unstake_start_time: Option<::prost_types::Timestamp>,
    #[prost(bool, tag = "8")]
    pub auto_stake: bool,
    #[prost(string, tag = "9")]
    pub owner: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VoteBucketList {
    #[prost(message, repeated, tag = "1")]
    pub buckets: Vec<VoteBucket>,
}

impl From<CandidateV2> for types::staking::Candidate {
    fn from(value: CandidateV2) -> Self {
        Self {
            name: value.name,
            owner_address: value.owner_address,
            operator_address: value.operator_address,
            reward_address: value.reward_address,
            total_weighted_votes: value.total_weighted_votes,
            self_stake_bucket_idx: value.self_stake_bucket_idx,
            self_staking_tokens: value.self_staking_tokens,
        }
    }
}

impl From<VoteBucket> for types::staking::VoteBucket {
    fn from(value: VoteBucket) -> Self {
        let seconds = |ts: Option<::prost_types::Timestamp>| ts.map(|t| t.seconds).unwrap_or(0);
        Self {
            index: value.index,
            candidate_address: value.candidate_address,
            staked_amount: value.staked_amount,
            staked_duration: value.staked_duration,
            create_time: seconds(value.create_time),
            stake_start_time: seconds(value.stake_start_time),
            unstake_start_time: seconds(value.unstake_start_time),
            auto_stake: value.auto_stake,
            owner: value.owner,
        }
    }
}
