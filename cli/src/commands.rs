// Copyright (c) IoTeX Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context as _, Result, anyhow, bail};
use clap::{Args, Subcommand};
use num_bigint::BigUint;
use sdk::{ActionBuilder, IOTEX_MAINNET_URL, IotexClient, staking};
use types::crypto::Account;

/// Environment variable holding the hex-encoded signing key.
const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

const DEFAULT_GAS_LIMIT: u64 = 100_000;
const DEFAULT_GAS_PRICE: &str = "10000000000000";

#[derive(Subcommand)]
#[clap(rename_all = "kebab-case")]
pub enum IotxCommand {
    /// Manage local signing accounts.
    #[clap(subcommand)]
    Account(AccountCommand),
    /// Submit staking actions and wait for their receipts.
    #[clap(subcommand)]
    Stake(StakeCommand),
    /// Read staking state.
    #[clap(subcommand)]
    Query(QueryCommand),
    /// Survey large incoming transfers for an address.
    Transfers {
        /// Address whose history to scan.
        #[clap(long)]
        address: String,
        /// Minimum transfer amount in Rau, inclusive.
        #[clap(long, default_value = "500000000000000000000")]
        threshold: String,
        #[clap(long, default_value_t = 0)]
        start: u64,
        #[clap(long, default_value_t = 1000)]
        count: u64,
        #[clap(flatten)]
        network: NetworkOpts,
    },
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Generate a fresh account and print its address and secret.
    New,
    /// Print the configured account's address and balance.
    Show {
        #[clap(flatten)]
        network: NetworkOpts,
    },
}

#[derive(Subcommand)]
pub enum StakeCommand {
    /// Create a vote bucket and print its index.
    Create {
        /// Candidate name to delegate to.
        candidate: String,
        /// Amount to lock, in Rau.
        #[clap(long, default_value = "200000000000000000000")]
        amount: String,
        /// Stake duration in epochs.
        #[clap(long, default_value_t = 7)]
        duration: u32,
        #[clap(long)]
        auto_stake: bool,
        #[clap(flatten)]
        gas: GasOpts,
        #[clap(flatten)]
        network: NetworkOpts,
    },
    /// Top up an existing bucket.
    AddDeposit {
        bucket: u64,
        #[clap(long, default_value = "10000000000000000000")]
        amount: String,
        #[clap(flatten)]
        gas: GasOpts,
        #[clap(flatten)]
        network: NetworkOpts,
    },
    /// Move a bucket's vote to a different candidate.
    ChangeCandidate {
        bucket: u64,
        candidate: String,
        #[clap(flatten)]
        gas: GasOpts,
        #[clap(flatten)]
        network: NetworkOpts,
    },
    /// Extend a bucket's duration and auto-stake flag.
    Restake {
        bucket: u64,
        #[clap(long, default_value_t = 21)]
        duration: u32,
        #[clap(long)]
        auto_stake: bool,
        #[clap(flatten)]
        gas: GasOpts,
        #[clap(flatten)]
        network: NetworkOpts,
    },
    /// Begin unlocking a bucket.
    Unstake {
        bucket: u64,
        #[clap(flatten)]
        gas: GasOpts,
        #[clap(flatten)]
        network: NetworkOpts,
    },
    /// Run the full staking lifecycle against the first two candidates:
    /// create, deposit, change candidate, restake, unstake, then list and
    /// fetch the bucket.
    Lifecycle {
        #[clap(long, default_value = "200000000000000000000")]
        amount: String,
        #[clap(long, default_value = "10000000000000000000")]
        deposit: String,
        #[clap(long, default_value_t = 7)]
        duration: u32,
        #[clap(flatten)]
        gas: GasOpts,
        #[clap(flatten)]
        network: NetworkOpts,
    },
}

#[derive(Subcommand)]
pub enum QueryCommand {
    /// List registered candidate names.
    Candidates {
        #[clap(long, default_value_t = 0)]
        offset: u32,
        #[clap(long, default_value_t = 100)]
        limit: u32,
        #[clap(flatten)]
        network: NetworkOpts,
    },
    /// Look up one candidate by name or by owner address.
    Candidate {
        #[clap(long, conflicts_with = "owner")]
        name: Option<String>,
        #[clap(long)]
        owner: Option<String>,
        #[clap(flatten)]
        network: NetworkOpts,
    },
    /// List a voter's bucket indexes.
    Buckets {
        voter: String,
        #[clap(long, default_value_t = 0)]
        offset: u32,
        #[clap(long, default_value_t = 100)]
        limit: u32,
        #[clap(flatten)]
        network: NetworkOpts,
    },
    /// Fetch one bucket by index.
    Bucket {
        index: u64,
        #[clap(flatten)]
        network: NetworkOpts,
    },
    /// Print the chain-wide staked total in Rau.
    TotalStaked {
        #[clap(flatten)]
        network: NetworkOpts,
    },
}

#[derive(Args)]
pub struct NetworkOpts {
    /// gRPC endpoint of the chain API.
    #[clap(long, env = "IOTX_ENDPOINT", default_value = IOTEX_MAINNET_URL)]
    endpoint: String,
}

impl NetworkOpts {
    fn client(&self) -> Result<IotexClient> {
        Ok(IotexClient::builder().build(&self.endpoint)?)
    }
}

#[derive(Args)]
pub struct GasOpts {
    #[clap(long, default_value_t = DEFAULT_GAS_LIMIT)]
    gas_limit: u64,
    /// Gas price in Rau.
    #[clap(long, default_value = DEFAULT_GAS_PRICE)]
    gas_price: String,
}

impl GasOpts {
    fn apply(&self, builder: ActionBuilder) -> Result<ActionBuilder> {
        Ok(builder
            .gas_limit(self.gas_limit)
            .gas_price(&self.gas_price)?)
    }
}

/// Load the signing account from the environment. Absence or a malformed
/// value is fatal.
fn signer() -> Result<Account> {
    let key = std::env::var(PRIVATE_KEY_ENV)
        .map_err(|_| anyhow!("{PRIVATE_KEY_ENV} environment variable is not set"))?;
    Account::from_hex_key(&key)
        .with_context(|| format!("{PRIVATE_KEY_ENV} is not a valid hex-encoded secret"))
}

impl IotxCommand {
    pub async fn execute(self) -> Result<()> {
        match self {
            IotxCommand::Account(cmd) => cmd.execute().await,
            IotxCommand::Stake(cmd) => cmd.execute().await,
            IotxCommand::Query(cmd) => cmd.execute().await,
            IotxCommand::Transfers {
                address,
                threshold,
                start,
                count,
                network,
            } => {
                let threshold: BigUint = threshold
                    .parse()
                    .map_err(|_| anyhow!("threshold must be a decimal integer"))?;
                let client = network.client()?;
                let report = client
                    .large_transfers_to(&address, &threshold, start, count)
                    .await?;
                for record in &report.records {
                    println!("{},{},{}", record.sender, record.amount, record.action_hash);
                }
                println!("---------------");
                for sender in &report.senders {
                    println!("{sender}");
                }
                Ok(())
            }
        }
    }
}

impl AccountCommand {
    async fn execute(self) -> Result<()> {
        match self {
            AccountCommand::New => {
                let account = Account::generate();
                println!("{}", account.address());
                println!("{}", account.hex_key());
            }
            AccountCommand::Show { network } => {
                let account = signer()?;
                let meta = network.client()?.account_meta(account.address().to_string()).await?;
                println!("address: {}", account.address());
                println!("balance: {} Rau", meta.balance);
                println!("pending nonce: {}", meta.pending_nonce);
            }
        }
        Ok(())
    }
}

impl StakeCommand {
    async fn execute(self) -> Result<()> {
        match self {
            StakeCommand::Create {
                candidate,
                amount,
                duration,
                auto_stake,
                gas,
                network,
            } => {
                let client = network.client()?;
                let account = signer()?;
                let action = gas
                    .apply(ActionBuilder::create(
                        candidate,
                        &amount,
                        duration,
                        auto_stake,
                    )?)?
                    .build();
                let receipt = client.execute(&action, &account).await?;
                let bucket = staking::created_bucket_id(&receipt)?;
                println!("create bucket #{bucket}");
            }
            StakeCommand::AddDeposit {
                bucket,
                amount,
                gas,
                network,
            } => {
                let client = network.client()?;
                let account = signer()?;
                let action = gas
                    .apply(ActionBuilder::add_deposit(bucket, &amount)?)?
                    .build();
                client.execute(&action, &account).await?;
                println!("add deposit successful");
            }
            StakeCommand::ChangeCandidate {
                bucket,
                candidate,
                gas,
                network,
            } => {
                let client = network.client()?;
                let account = signer()?;
                let action = gas
                    .apply(ActionBuilder::change_candidate(bucket, candidate))?
                    .build();
                client.execute(&action, &account).await?;
                println!("change candidate successful");
            }
            StakeCommand::Restake {
                bucket,
                duration,
                auto_stake,
                gas,
                network,
            } => {
                let client = network.client()?;
                let account = signer()?;
                let action = gas
                    .apply(ActionBuilder::restake(bucket, duration, auto_stake))?
                    .build();
                client.execute(&action, &account).await?;
                println!("restake bucket successful");
            }
            StakeCommand::Unstake {
                bucket,
                gas,
                network,
            } => {
                let client = network.client()?;
                let account = signer()?;
                let action = gas.apply(ActionBuilder::unstake(bucket))?.build();
                client.execute(&action, &account).await?;
                println!("unstake bucket successful");
            }
            StakeCommand::Lifecycle {
                amount,
                deposit,
                duration,
                gas,
                network,
            } => {
                run_lifecycle(&network, &gas, &amount, &deposit, duration).await?;
            }
        }
        Ok(())
    }
}

/// The canonical end-to-end scenario: create a bucket on the first
/// candidate, top it up, move it to the second candidate, restake, unstake,
/// then read the voter's buckets back.
async fn run_lifecycle(
    network: &NetworkOpts,
    gas: &GasOpts,
    amount: &str,
    deposit: &str,
    duration: u32,
) -> Result<()> {
    let client = network.client()?;
    let account = signer()?;
    let address = account.address().to_string();

    let candidates = client.candidates(0, 100).await?;
    if candidates.len() < 2 {
        bail!("lifecycle needs at least two registered candidates");
    }

    let action = gas
        .apply(ActionBuilder::create(
            candidates[0].name.clone(),
            amount,
            duration,
            true,
        )?)?
        .build();
    let receipt = client.execute(&action, &account).await?;
    let bucket = staking::created_bucket_id(&receipt)?;
    println!("create bucket #{bucket}");

    let action = gas
        .apply(ActionBuilder::add_deposit(bucket, deposit)?)?
        .build();
    client.execute(&action, &account).await?;
    println!("add deposit successful");

    let action = gas
        .apply(ActionBuilder::change_candidate(
            bucket,
            candidates[1].name.clone(),
        ))?
        .build();
    client.execute(&action, &account).await?;
    println!("change candidate successful");

    let action = gas.apply(ActionBuilder::restake(bucket, 21, false))?.build();
    client.execute(&action, &account).await?;
    println!("restake bucket successful");

    let action = gas.apply(ActionBuilder::unstake(bucket))?.build();
    client.execute(&action, &account).await?;
    println!("unstake bucket successful");

    let buckets = client.buckets_by_voter(&address, 0, 100).await?;
    println!("voter {address} has {} buckets", buckets.len());

    let bucket = client.bucket(bucket).await?;
    println!(
        "bucket #{} staking {} Rau for {} epochs (auto-stake: {})",
        bucket.index, bucket.staked_amount, bucket.staked_duration, bucket.auto_stake
    );

    let meta = client.account_meta(&address).await?;
    println!("final balance: {} Rau", meta.balance);
    Ok(())
}

impl QueryCommand {
    async fn execute(self) -> Result<()> {
        match self {
            QueryCommand::Candidates {
                offset,
                limit,
                network,
            } => {
                let candidates = network.client()?.candidates(offset, limit).await?;
                for candidate in &candidates {
                    println!("{}\t{}", candidate.name, candidate.owner_address);
                }
            }
            QueryCommand::Candidate {
                name,
                owner,
                network,
            } => {
                let client = network.client()?;
                let candidate = match (name, owner) {
                    (Some(name), None) => client.candidate_by_name(&name).await?,
                    (None, Some(owner)) => client.candidate_by_address(&owner).await?,
                    _ => bail!("pass exactly one of --name or --owner"),
                };
                println!("name: {}", candidate.name);
                println!("owner: {}", candidate.owner_address);
                println!("operator: {}", candidate.operator_address);
                println!("reward: {}", candidate.reward_address);
                println!("votes: {}", candidate.total_weighted_votes);
                println!("self-stake: {}", candidate.self_staking_tokens);
            }
            QueryCommand::Buckets {
                voter,
                offset,
                limit,
                network,
            } => {
                let buckets = network
                    .client()?
                    .buckets_by_voter(&voter, offset, limit)
                    .await?;
                println!("voter {voter} has {} buckets", buckets.len());
                for bucket in &buckets {
                    println!(
                        "#{}\t{} Rau\t{} epochs\t{}",
                        bucket.index,
                        bucket.staked_amount,
                        bucket.staked_duration,
                        bucket.candidate_address
                    );
                }
            }
            QueryCommand::Bucket { index, network } => {
                let bucket = network.client()?.bucket(index).await?;
                println!("index: {}", bucket.index);
                println!("candidate: {}", bucket.candidate_address);
                println!("amount: {} Rau", bucket.staked_amount);
                println!("duration: {} epochs", bucket.staked_duration);
                println!("create time: {}", bucket.create_time);
                println!("stake start: {}", bucket.stake_start_time);
                println!("unstake start: {}", bucket.unstake_start_time);
                println!("auto-stake: {}", bucket.auto_stake);
                println!("owner: {}", bucket.owner);
            }
            QueryCommand::TotalStaked { network } => {
                println!("{}", network.client()?.total_staking_amount().await?);
            }
        }
        Ok(())
    }
}
