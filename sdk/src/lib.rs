use std::time::Duration;

pub mod builder;
pub mod error;
pub mod queries;
pub mod staking;
pub mod transfers;

pub use builder::ActionBuilder;
pub use error::{Error, Result};

pub const IOTEX_MAINNET_URL: &str = "https://api.iotex.one:443";
pub const IOTEX_TESTNET_URL: &str = "https://api.testnet.iotex.one:443";

/// Default pause before the first receipt lookup. Tied to the observed
/// block interval: an action is almost never queryable sooner.
pub const DEFAULT_CONFIRMATION_DELAY: Duration = Duration::from_secs(10);
/// Default spacing between receipt lookups after the initial delay.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
/// Default receipt lookup budget before giving up on confirmation.
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 20;

/// Builder for configuring an [`IotexClient`].
pub struct IotexClientBuilder {
    confirmation_delay: Duration,
    poll_interval: Duration,
    max_poll_attempts: u32,
}

impl Default for IotexClientBuilder {
    fn default() -> Self {
        Self {
            confirmation_delay: DEFAULT_CONFIRMATION_DELAY,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_poll_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }
}

impl IotexClientBuilder {
    /// Set the pause before the first receipt lookup.
    pub fn confirmation_delay(mut self, delay: Duration) -> Self {
        self.confirmation_delay = delay;
        self
    }

    /// Set the spacing between receipt lookups.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the receipt lookup budget.
    pub fn max_poll_attempts(mut self, attempts: u32) -> Self {
        self.max_poll_attempts = attempts;
        self
    }

    /// Build the client against an RPC endpoint URL.
    pub fn build(self, rpc_url: impl AsRef<str>) -> Result<IotexClient> {
        let rpc = rpc::api::Client::new(rpc_url.as_ref())
            .map_err(|e| Error::ClientInit(e.to_string()))?;
        Ok(IotexClient {
            rpc,
            confirmation_delay: self.confirmation_delay,
            poll_interval: self.poll_interval,
            max_poll_attempts: self.max_poll_attempts,
        })
    }

    /// Build a client for the main network.
    pub fn build_mainnet(self) -> Result<IotexClient> {
        self.build(IOTEX_MAINNET_URL)
    }

    /// Build a client for the test network.
    pub fn build_testnet(self) -> Result<IotexClient> {
        self.build(IOTEX_TESTNET_URL)
    }
}

/// The main client for interacting with the chain over gRPC.
///
/// Cheap to clone; clones share one connection, which is safe for
/// concurrent read-only callers and is released when the last clone drops.
#[derive(Clone)]
pub struct IotexClient {
    rpc: rpc::api::Client,
    confirmation_delay: Duration,
    poll_interval: Duration,
    max_poll_attempts: u32,
}

impl IotexClient {
    /// Create a new client builder.
    pub fn builder() -> IotexClientBuilder {
        IotexClientBuilder::default()
    }

    pub(crate) fn rpc(&self) -> &rpc::api::Client {
        &self.rpc
    }

    pub(crate) fn confirmation_delay(&self) -> Duration {
        self.confirmation_delay
    }

    pub(crate) fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub(crate) fn max_poll_attempts(&self) -> u32 {
        self.max_poll_attempts
    }

    /// Account metadata (balance, nonces) for an address.
    pub async fn account_meta(
        &self,
        address: impl Into<String>,
    ) -> Result<rpc::proto::iotex::AccountMeta> {
        Ok(self.rpc.get_account(address).await?)
    }
}
