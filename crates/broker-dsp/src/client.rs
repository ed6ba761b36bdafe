//  Copyright (c) 2026 Metaform Systems, Inc
//
//  This program and the accompanying materials are made available under the
//  terms of the Apache License, Version 2.0 which is available at
//  https://www.apache.org/licenses/LICENSE-2.0
//
//  SPDX-License-Identifier: Apache-2.0
//
//  Contributors:
//       Metaform Systems, Inc. - initial API and implementation
//


use crate::config::{ConnectError, DspConnectionConfig};
use crate::rpc::pb::client_service_client::ClientServiceClient;
use crate::rpc::{
    ClientServicePingRequest, ClientServicePingResponse, DspClient, GetProviderCatalogueRequest,
    GetProviderCatalogueResponse, GetProviderDatasetDownloadInformationRequest,
    GetProviderDatasetDownloadInformationResponse, SignalTransferCompleteRequest, SignalTransferCompleteResponse,
};
use async_trait::async_trait;
use log::{debug, info};
use std::path::Path;
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint, Identity};
use tonic::{Response, Status};

/// gRPC implementation of [`DspClient`] over the generated `ClientService` client.
#[derive(Clone)]
pub struct GrpcDspClient {
    inner: ClientServiceClient<Channel>,
}

impl GrpcDspClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: ClientServiceClient::new(channel),
        }
    }

    /// Connects to the peer described by `config` and verifies the connection with a ping.
    pub async fn connect(config: &DspConnectionConfig) -> Result<Self, ConnectError> {
        let endpoint = build_endpoint(config).await?;
        let channel = endpoint.connect().await.map_err(ConnectError::Transport)?;

        let client = Self::new(channel);
        let pong = client
            .ping(ClientServicePingRequest {})
            .await
            .map_err(ConnectError::Ping)?;
        info!("Connected to DSP peer {} ({})", config.address, pong.provider_name);
        Ok(client)
    }
}

#[async_trait]
impl DspClient for GrpcDspClient {
    async fn ping(&self, request: ClientServicePingRequest) -> Result<ClientServicePingResponse, Status> {
        self.inner.clone().ping(request).await.map(Response::into_inner)
    }

    async fn get_provider_catalogue(
        &self,
        request: GetProviderCatalogueRequest,
    ) -> Result<GetProviderCatalogueResponse, Status> {
        debug!("Requesting catalogue of {}", request.provider_uri);
        self.inner
            .clone()
            .get_provider_catalogue(request)
            .await
            .map(Response::into_inner)
    }

    async fn get_provider_dataset_download_information(
        &self,
        request: GetProviderDatasetDownloadInformationRequest,
    ) -> Result<GetProviderDatasetDownloadInformationResponse, Status> {
        debug!("Requesting download information for {} from {}", request.dataset_id, request.provider_url);
        self.inner
            .clone()
            .get_provider_dataset_download_information(request)
            .await
            .map(Response::into_inner)
    }

    async fn signal_transfer_complete(
        &self,
        request: SignalTransferCompleteRequest,
    ) -> Result<SignalTransferCompleteResponse, Status> {
        self.inner
            .clone()
            .signal_transfer_complete(request)
            .await
            .map(Response::into_inner)
    }
}

/// Builds the channel endpoint, loading TLS material from disk unless the connection is insecure.
pub(crate) async fn build_endpoint(config: &DspConnectionConfig) -> Result<Endpoint, ConnectError> {
    let address = config.endpoint_uri();
    let endpoint = Endpoint::from_shared(address.clone())
        .map_err(|source| ConnectError::InvalidAddress {
            address: address.clone(),
            source,
        })?
        .connect_timeout(config.connect_timeout);

    if config.insecure {
        return Ok(endpoint);
    }

    let mut tls = ClientTlsConfig::new();
    match &config.ca_cert {
        Some(path) => tls = tls.ca_certificate(Certificate::from_pem(read_pem(path).await?)),
        None => tls = tls.with_native_roots(),
    }
    if let Some(cert_path) = &config.client_cert {
        let key_path = config
            .client_cert_key
            .as_ref()
            .ok_or_else(|| ConnectError::MissingClientKey(cert_path.clone()))?;
        let identity = Identity::from_pem(read_pem(cert_path).await?, read_pem(key_path).await?);
        tls = tls.identity(identity);
    }

    endpoint
        .tls_config(tls)
        .map_err(|source| ConnectError::InvalidAddress { address, source })
}

async fn read_pem(path: &Path) -> Result<Vec<u8>, ConnectError> {
    tokio::fs::read(path).await.map_err(|source| ConnectError::Io {
        path: path.to_path_buf(),
        source,
    })
}
