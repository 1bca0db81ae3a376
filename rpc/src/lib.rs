// Copyright (c) IoTeX Contributors
// SPDX-License-Identifier: Apache-2.0

pub mod api;
pub mod proto;
pub mod staking;
