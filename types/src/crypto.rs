use std::fmt;

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use sha3::{Digest as _, Keccak256};

use crate::base::IotexAddress;
use crate::error::TypeError;

/// A process-local signing identity: a secp256k1 key bound to its address.
///
/// Created from a hex-encoded secret or freshly generated; never persisted
/// by this crate.
pub struct Account {
    key: SigningKey,
    address: IotexAddress,
}

impl Account {
    /// Generate a fresh random account.
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::random(&mut OsRng))
    }

    /// Import an account from a hex-encoded 32-byte secret. An optional
    /// `0x` prefix is accepted.
    pub fn from_hex_key(hex_key: &str) -> Result<Self, TypeError> {
        let raw = hex_key.trim().strip_prefix("0x").unwrap_or(hex_key.trim());
        let bytes =
            hex::decode(raw).map_err(|e| TypeError::InvalidPrivateKey(e.to_string()))?;
        let key = SigningKey::from_slice(&bytes)
            .map_err(|e| TypeError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self::from_signing_key(key))
    }

    fn from_signing_key(key: SigningKey) -> Self {
        let point = key.verifying_key().to_encoded_point(false);
        let address = IotexAddress::from_uncompressed_pubkey(point.as_bytes())
            .expect("an uncompressed encoded point is always 65 bytes");
        Self { key, address }
    }

    pub fn address(&self) -> IotexAddress {
        self.address
    }

    /// Uncompressed SEC1 public key (65 bytes, leading `0x04`).
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.key
            .verifying_key()
            .to_encoded_point(false)
            .as_bytes()
            .to_vec()
    }

    /// Recoverable signature over `keccak256(msg)`: `r || s || v`, 65 bytes.
    pub fn sign(&self, msg: &[u8]) -> Vec<u8> {
        let digest = Keccak256::new_with_prefix(msg);
        let (signature, recovery_id) = self
            .key
            .sign_digest_recoverable(digest)
            .expect("signing with a validated key cannot fail");
        let mut bytes = signature.to_bytes().to_vec();
        bytes.push(recovery_id.to_byte());
        bytes
    }

    /// Export the secret as lowercase hex.
    pub fn hex_key(&self) -> String {
        hex::encode(self.key.to_bytes())
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose key material through Debug.
        f.debug_struct("Account")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_key_roundtrip() {
        let account = Account::generate();
        let restored = Account::from_hex_key(&account.hex_key()).unwrap();
        assert_eq!(restored.address(), account.address());
    }

    #[test]
    fn accepts_prefixed_key() {
        let account = Account::generate();
        let prefixed = format!("0x{}", account.hex_key());
        assert_eq!(
            Account::from_hex_key(&prefixed).unwrap().address(),
            account.address()
        );
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(Account::from_hex_key("not hex").is_err());
        assert!(Account::from_hex_key("abcd").is_err());
        assert!(Account::from_hex_key("").is_err());
    }

    #[test]
    fn signature_is_recoverable_form() {
        let account = Account::generate();
        let signature = account.sign(b"payload");
        assert_eq!(signature.len(), 65);
        assert!(signature[64] < 4);
    }

    #[test]
    fn address_matches_pubkey_derivation() {
        let account = Account::generate();
        let derived =
            IotexAddress::from_uncompressed_pubkey(&account.public_key_bytes()).unwrap();
        assert_eq!(derived, account.address());
    }
}
