// Copyright (c) IoTeX Contributors
// SPDX-License-Identifier: Apache-2.0

use http::uri::PathAndQuery;
use tonic::codec::ProstCodec;
use tonic::transport::Channel;

use super::{
    GetAccountRequest, GetAccountResponse, GetActionsRequest, GetActionsResponse,
    GetReceiptByActionRequest, GetReceiptByActionResponse, ReadStateRequest, ReadStateResponse,
    SendActionRequest, SendActionResponse,
};

/// Unary client for the `iotexapi.APIService` gRPC service.
#[derive(Debug, Clone)]
pub struct ApiServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl ApiServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    async fn ready(&mut self) -> Result<(), tonic::Status> {
        self.inner
            .ready()
            .await
            .map_err(|e| tonic::Status::unknown(format!("service was not ready: {e}")))
    }

    pub async fn get_account(
        &mut self,
        request: GetAccountRequest,
    ) -> Result<tonic::Response<GetAccountResponse>, tonic::Status> {
        self.ready().await?;
        let codec: ProstCodec<GetAccountRequest, GetAccountResponse> = ProstCodec::default();
        let path = PathAndQuery::from_static("/iotexapi.APIService/GetAccount");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn send_action(
        &mut self,
        request: SendActionRequest,
    ) -> Result<tonic::Response<SendActionResponse>, tonic::Status> {
        self.ready().await?;
        let codec: ProstCodec<SendActionRequest, SendActionResponse> = ProstCodec::default();
        let path = PathAndQuery::from_static("/iotexapi.APIService/SendAction");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_receipt_by_action(
        &mut self,
        request: GetReceiptByActionRequest,
    ) -> Result<tonic::Response<GetReceiptByActionResponse>, tonic::Status> {
        self.ready().await?;
        let codec: ProstCodec<GetReceiptByActionRequest, GetReceiptByActionResponse> =
            ProstCodec::default();
        let path = PathAndQuery::from_static("/iotexapi.APIService/GetReceiptByAction");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn read_state(
        &mut self,
        request: ReadStateRequest,
    ) -> Result<tonic::Response<ReadStateResponse>, tonic::Status> {
        self.ready().await?;
        let codec: ProstCodec<ReadStateRequest, ReadStateResponse> = ProstCodec::default();
        let path = PathAndQuery::from_static("/iotexapi.APIService/ReadState");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_actions(
        &mut self,
        request: GetActionsRequest,
    ) -> Result<tonic::Response<GetActionsResponse>, tonic::Status> {
        self.ready().await?;
        let codec: ProstCodec<GetActionsRequest, GetActionsResponse> = ProstCodec::default();
        let path = PathAndQuery::from_static("/iotexapi.APIService/GetActions");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }
}
