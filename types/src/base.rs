use std::fmt;
use std::str::FromStr;

use bech32::{FromBase32, ToBase32, Variant};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest as _, Keccak256};

use crate::error::TypeError;

/// Human-readable part of every account address on the chain.
pub const ADDRESS_HRP: &str = "io";

const ADDRESS_LENGTH: usize = 20;

/// A 20-byte account identifier, shown as a bech32 `io1...` string.
///
/// Derived from a secp256k1 public key as the last 20 bytes of the
/// Keccak-256 hash over the uncompressed key material.
#[derive(Eq, Default, PartialEq, Ord, PartialOrd, Copy, Clone, Hash)]
pub struct IotexAddress([u8; ADDRESS_LENGTH]);

impl IotexAddress {
    /// The byte length of an address.
    pub const LENGTH: usize = ADDRESS_LENGTH;

    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    pub const fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    /// Derive an address from an uncompressed SEC1 public key (65 bytes,
    /// leading `0x04`): keccak256 over the key material, last 20 bytes.
    pub fn from_uncompressed_pubkey(pubkey: &[u8]) -> Result<Self, TypeError> {
        if pubkey.len() != 65 {
            return Err(TypeError::InvalidPublicKey(pubkey.len()));
        }
        let hash = Keccak256::digest(&pubkey[1..]);
        let mut bytes = [0u8; Self::LENGTH];
        bytes.copy_from_slice(&hash[12..]);
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl fmt::Display for IotexAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = bech32::encode(ADDRESS_HRP, self.0.to_base32(), Variant::Bech32)
            .expect("bech32 encoding of a fixed-length payload cannot fail");
        write!(f, "{}", encoded)
    }
}

impl fmt::Debug for IotexAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IotexAddress({})", self)
    }
}

impl FromStr for IotexAddress {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hrp, data, variant) = bech32::decode(s)
            .map_err(|e| TypeError::InvalidAddress(s.to_string(), e.to_string()))?;
        if hrp != ADDRESS_HRP {
            return Err(TypeError::InvalidAddress(
                s.to_string(),
                format!("unexpected prefix {hrp:?}"),
            ));
        }
        if variant != Variant::Bech32 {
            return Err(TypeError::InvalidAddress(
                s.to_string(),
                "unexpected bech32 variant".to_string(),
            ));
        }
        let bytes = Vec::<u8>::from_base32(&data)
            .map_err(|e| TypeError::InvalidAddress(s.to_string(), e.to_string()))?;
        let bytes: [u8; Self::LENGTH] = bytes.try_into().map_err(|v: Vec<u8>| {
            TypeError::InvalidAddress(s.to_string(), format!("payload length {}", v.len()))
        })?;
        Ok(Self(bytes))
    }
}

impl Serialize for IotexAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for IotexAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse_roundtrip() {
        let address = IotexAddress::new([7u8; IotexAddress::LENGTH]);
        let text = address.to_string();
        assert!(text.starts_with("io1"));
        assert_eq!(text.parse::<IotexAddress>().unwrap(), address);
    }

    #[test]
    fn rejects_foreign_prefix() {
        // A valid bech32 string under a different HRP.
        let foreign = bech32::encode("tb", [1u8; 20].to_base32(), Variant::Bech32).unwrap();
        assert!(foreign.parse::<IotexAddress>().is_err());
    }

    #[test]
    fn rejects_bad_pubkey_length() {
        assert!(IotexAddress::from_uncompressed_pubkey(&[4u8; 33]).is_err());
        assert!(IotexAddress::from_uncompressed_pubkey(&[4u8; 65]).is_ok());
    }
}
