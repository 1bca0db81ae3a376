//! Read-only staking state queries.
//!
//! Each method encodes its arguments through the staking codec, issues a
//! `ReadState` call against the staking protocol at the latest confirmed
//! height, and decodes the response into domain records. Singular lookups
//! fail with [`Error::NotFound`]; list queries return empty sequences.

use rpc::proto::iotex::read_staking_data_method::Name;
use rpc::staking::{self as codec, STAKING_PROTOCOL_ID};
use types::staking::{Candidate, VoteBucket};

use crate::IotexClient;
use crate::error::{Error, Result};

/// Empty height string selects the latest confirmed height.
const LATEST_HEIGHT: &str = "";

impl IotexClient {
    async fn read_staking_state(&self, method: Name, arguments: Vec<u8>) -> Result<Vec<u8>> {
        Ok(self
            .rpc()
            .read_state(
                STAKING_PROTOCOL_ID,
                codec::method_selector(method),
                vec![arguments],
                LATEST_HEIGHT,
            )
            .await?)
    }

    /// Page through registered candidates.
    pub async fn candidates(&self, offset: u32, limit: u32) -> Result<Vec<Candidate>> {
        let data = self
            .read_staking_state(Name::Candidates, codec::candidates_args(offset, limit))
            .await?;
        Ok(codec::decode_candidate_list(&data)?)
    }

    pub async fn candidate_by_name(&self, name: &str) -> Result<Candidate> {
        let data = self
            .read_staking_state(Name::CandidateByName, codec::candidate_by_name_args(name))
            .await?;
        let candidate = codec::decode_candidate(&data)?;
        if candidate.is_vacant() {
            return Err(Error::NotFound(format!("candidate named {name:?}")));
        }
        Ok(candidate)
    }

    pub async fn candidate_by_address(&self, owner: &str) -> Result<Candidate> {
        let data = self
            .read_staking_state(
                Name::CandidateByAddress,
                codec::candidate_by_address_args(owner),
            )
            .await?;
        let candidate = codec::decode_candidate(&data)?;
        if candidate.is_vacant() {
            return Err(Error::NotFound(format!("candidate owned by {owner}")));
        }
        Ok(candidate)
    }

    /// Page through a voter's buckets.
    pub async fn buckets_by_voter(
        &self,
        voter: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<VoteBucket>> {
        let data = self
            .read_staking_state(
                Name::BucketsByVoter,
                codec::buckets_by_voter_args(voter, offset, limit),
            )
            .await?;
        Ok(codec::decode_bucket_list(&data)?)
    }

    pub async fn buckets_by_indexes(&self, indexes: &[u64]) -> Result<Vec<VoteBucket>> {
        let data = self
            .read_staking_state(
                Name::BucketsByIndexes,
                codec::buckets_by_indexes_args(indexes),
            )
            .await?;
        Ok(codec::decode_bucket_list(&data)?)
    }

    /// A single bucket by index.
    pub async fn bucket(&self, index: u64) -> Result<VoteBucket> {
        self.buckets_by_indexes(&[index])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(format!("bucket {index}")))
    }

    /// Chain-wide staked total, decimal Rau.
    pub async fn total_staking_amount(&self) -> Result<String> {
        let data = self
            .read_staking_state(Name::TotalStakingAmount, codec::total_staking_amount_args())
            .await?;
        Ok(codec::decode_total_staking_amount(&data)?)
    }
}
