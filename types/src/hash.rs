use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// The 32-byte identifier the network assigns to an accepted action.
///
/// Shown and parsed as lowercase hex. The sole key for receipt lookup;
/// two distinct actions never share a hash.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ActionHash([u8; 32]);

impl ActionHash {
    pub const ZERO: Self = Self([0u8; 32]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        let bytes: [u8; 32] = bytes.try_into().map_err(|_| {
            TypeError::InvalidHash(hex::encode(bytes), format!("length {}", bytes.len()))
        })?;
        Ok(Self(bytes))
    }

    pub fn inner(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn into_inner(self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for ActionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for ActionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActionHash({})", self)
    }
}

impl FromStr for ActionHash {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(raw)
            .map_err(|e| TypeError::InvalidHash(s.to_string(), e.to_string()))?;
        Self::from_bytes(&bytes)
    }
}

impl Serialize for ActionHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ActionHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let hash = ActionHash::new([0xab; 32]);
        assert_eq!(hash.to_string().parse::<ActionHash>().unwrap(), hash);
        assert_eq!(format!("0x{hash}").parse::<ActionHash>().unwrap(), hash);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!("abcd".parse::<ActionHash>().is_err());
        assert!(ActionHash::from_bytes(&[0u8; 31]).is_err());
    }
}
