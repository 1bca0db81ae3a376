// Copyright (c) IoTeX Contributors
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use tonic::Status;
use tonic::transport::channel::ClientTlsConfig;

use crate::proto::iotex::{
    AccountMeta, Action, ActionInfo, ApiServiceClient, GetAccountRequest, GetActionsRequest,
    GetReceiptByActionRequest, ReadStateRequest, Receipt, SendActionRequest,
};

pub type Result<T, E = tonic::Status> = std::result::Result<T, E>;
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Shared connection to a chain API endpoint.
///
/// The underlying HTTP/2 channel is established lazily, is cheap to clone,
/// and is safe for concurrent callers; it closes when the last clone is
/// dropped, on every exit path.
#[derive(Clone)]
pub struct Client {
    #[allow(unused)]
    uri: http::Uri,
    channel: tonic::transport::Channel,
}

impl Client {
    pub fn new<T>(uri: T) -> Result<Self>
    where
        T: TryInto<http::Uri>,
        T::Error: Into<BoxError>,
    {
        let uri = uri
            .try_into()
            .map_err(Into::into)
            .map_err(Status::from_error)?;
        let mut endpoint = tonic::transport::Endpoint::from(uri.clone());
        if uri.scheme() == Some(&http::uri::Scheme::HTTPS) {
            endpoint = endpoint
                .tls_config(ClientTlsConfig::new().with_enabled_roots())
                .map_err(Into::into)
                .map_err(Status::from_error)?;
        }
        let channel = endpoint
            .connect_timeout(Duration::from_secs(5))
            .http2_keep_alive_interval(Duration::from_secs(5))
            .connect_lazy();

        Ok(Self { uri, channel })
    }

    fn api(&self) -> ApiServiceClient {
        ApiServiceClient::new(self.channel.clone())
    }

    pub async fn get_account(&self, address: impl Into<String>) -> Result<AccountMeta> {
        let response = self
            .api()
            .get_account(GetAccountRequest {
                address: address.into(),
            })
            .await?;
        response
            .into_inner()
            .account_meta
            .ok_or_else(|| Status::not_found("no account metadata returned"))
    }

    /// Submit a signed action; returns the hex-encoded hash the node
    /// assigned to it.
    pub async fn send_action(&self, action: Action) -> Result<String> {
        let response = self
            .api()
            .send_action(SendActionRequest {
                action: Some(action),
            })
            .await?;
        Ok(response.into_inner().action_hash)
    }

    /// Look up the execution receipt of an action by its hex hash. The node
    /// answers NOT_FOUND while the action is still pending inclusion.
    pub async fn get_receipt_by_action(&self, action_hash: impl Into<String>) -> Result<Receipt> {
        let response = self
            .api()
            .get_receipt_by_action(GetReceiptByActionRequest {
                action_hash: action_hash.into(),
            })
            .await?;
        response
            .into_inner()
            .receipt_info
            .and_then(|info| info.receipt)
            .ok_or_else(|| Status::not_found("no receipt returned"))
    }

    /// Issue a read-only state query against a named protocol module and
    /// return the raw response payload.
    pub async fn read_state(
        &self,
        protocol_id: &[u8],
        method_name: Vec<u8>,
        arguments: Vec<Vec<u8>>,
        height: &str,
    ) -> Result<Vec<u8>> {
        let response = self
            .api()
            .read_state(ReadStateRequest::new(
                protocol_id,
                method_name,
                arguments,
                height,
            ))
            .await?;
        Ok(response.into_inner().data)
    }

    pub async fn get_actions_by_address(
        &self,
        address: impl Into<String>,
        start: u64,
        count: u64,
    ) -> Result<Vec<ActionInfo>> {
        let response = self
            .api()
            .get_actions(GetActionsRequest::by_address(address, start, count))
            .await?;
        Ok(response.into_inner().action_info)
    }
}
