// Copyright (c) IoTeX Contributors
// SPDX-License-Identifier: Apache-2.0

pub mod client;

pub use client::Client;
