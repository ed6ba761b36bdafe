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


//! Messages and client contract of the `dsp.v1alpha1.ClientService` RPC surface.

use async_trait::async_trait;
use tonic::Status;

/// Code generated from `proto/dsp/v1alpha1/client.proto`.
pub mod pb {
    tonic::include_proto!("dsp.v1alpha1");
}

pub use pb::{
    AuthenticationType, ClientServicePingRequest, ClientServicePingResponse, Dataset, GetProviderCatalogueRequest,
    GetProviderCatalogueResponse, GetProviderDatasetDownloadInformationRequest,
    GetProviderDatasetDownloadInformationResponse, PublishInfo, SignalTransferCompleteRequest,
    SignalTransferCompleteResponse,
};

/// Client side of the dataspace protocol RPC service.
///
/// [`crate::GrpcDspClient`] implements it over the generated client; tests substitute their own peers. Errors are returned as the raw RPC status so callers can translate status codes.
#[async_trait]
pub trait DspClient: Send + Sync {
    async fn ping(&self, request: ClientServicePingRequest) -> Result<ClientServicePingResponse, Status>;

    async fn get_provider_catalogue(
        &self,
        request: GetProviderCatalogueRequest,
    ) -> Result<GetProviderCatalogueResponse, Status>;

    async fn get_provider_dataset_download_information(
        &self,
        request: GetProviderDatasetDownloadInformationRequest,
    ) -> Result<GetProviderDatasetDownloadInformationResponse, Status>;

    /// Tells the peer a transfer is finished so it can release it.
    async fn signal_transfer_complete(
        &self,
        request: SignalTransferCompleteRequest,
    ) -> Result<SignalTransferCompleteResponse, Status>;
}
