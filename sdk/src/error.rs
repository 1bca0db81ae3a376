use thiserror::Error;
use types::hash::ActionHash;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing or malformed startup configuration (key material, endpoint).
    #[error("config error: {0}")]
    Config(String),
    #[error("error initializing RPC client: {0}")]
    ClientInit(String),
    /// Connection or RPC failure. Retrying is the caller's decision.
    #[error("transport error: {0}")]
    Transport(#[from] tonic::Status),
    /// The node refused the submitted action. The underlying status does
    /// not distinguish malformed payloads from balance or nonce conflicts.
    #[error("action submission rejected: {0}")]
    SubmissionRejected(tonic::Status),
    /// The action executed on chain and failed. Distinct from transport
    /// failure: the receipt exists and carries this status code.
    #[error("action reverted with receipt status {status}")]
    ActionReverted { status: u64 },
    #[error("no receipt for action {hash} after {attempts} lookups")]
    ConfirmationTimeout { hash: ActionHash, attempts: u32 },
    /// A singular lookup matched nothing.
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Decode(#[from] rpc::proto::DecodeError),
    #[error("invalid amount {0:?}: expected a non-negative decimal integer")]
    InvalidAmount(String),
    /// A receipt that must carry bucket log data does not.
    #[error("receipt for action {0} carries no bucket creation log")]
    Extraction(ActionHash),
    #[error("node returned a malformed action hash: {0:?}")]
    MalformedHash(String),
}
