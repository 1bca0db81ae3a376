// Copyright (c) IoTeX Contributors
// SPDX-License-Identifier: Apache-2.0

//! Hand-maintained prost definitions for the `iotexapi` / `iotextypes`
//! protobuf schema, limited to the surface this client exercises. Field
//! numbers match the canonical schema; do not renumber.

mod action;
mod api;
mod client;
mod receipt;
mod staking;

pub use action::*;
pub use api::*;
pub use client::ApiServiceClient;
pub use receipt::*;
pub use staking::*;
