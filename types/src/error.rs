use thiserror::Error;

/// Errors raised while constructing domain values from external input.
#[derive(Error, Debug)]
pub enum TypeError {
    #[error("invalid address {0:?}: {1}")]
    InvalidAddress(String, String),
    #[error("invalid public key length {0}, expected a 65-byte uncompressed key")]
    InvalidPublicKey(usize),
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
    #[error("invalid action hash {0:?}: {1}")]
    InvalidHash(String, String),
}
