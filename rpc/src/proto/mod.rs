// Copyright (c) IoTeX Contributors
// SPDX-License-Identifier: Apache-2.0

pub mod iotex;

/// Error produced when a wire payload cannot be converted into a domain
/// value. Always indicates a bug or a schema mismatch, never an expected
/// runtime condition.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed payload: {0}")]
    Malformed(#[from] prost::DecodeError),
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid field {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

impl DecodeError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    pub fn invalid(field: &'static str, reason: impl ToString) -> Self {
        Self::InvalidField {
            field,
            reason: reason.to_string(),
        }
    }
}
