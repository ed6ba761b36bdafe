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


use crate::rpc::{
    DspClient, GetProviderCatalogueRequest, GetProviderDatasetDownloadInformationRequest,
    GetProviderDatasetDownloadInformationResponse, SignalTransferCompleteRequest,
};
use crate::transfer::{authentication_type, retrieve_dsp_file};
use async_trait::async_trait;
use bon::Builder;
use broker_core::api::{DataspaceConnector, ProviderLister};
use broker_core::error::BrokerError;
use broker_core::types::{DownloadCredentials, Provider, ProviderFile};
use log::{debug, error, info, warn};
use reqwest::Client;
use std::sync::Arc;
use tonic::{Code, Status};

/// Translates RPC status codes carried by an upstream error into the broker's error taxonomy.
///
/// `Unavailable`, `Unauthenticated` and `PermissionDenied` become `InvalidCredentials`, `NotFound` becomes
/// `NotFound`. Every other error is returned unchanged.
pub fn convert_error(error: BrokerError) -> BrokerError {
    match status_code(&error) {
        Some(code @ (Code::Unavailable | Code::Unauthenticated | Code::PermissionDenied)) => {
            debug!("Got status code {:?}", code);
            BrokerError::invalid_credentials(error.to_string())
        }
        Some(Code::NotFound) => BrokerError::not_found(error.to_string()),
        _ => error,
    }
}

fn status_code(error: &BrokerError) -> Option<Code> {
    match error {
        BrokerError::Upstream(inner) => inner.downcast_ref::<Status>().map(Status::code),
        _ => None,
    }
}

fn rpc_error(status: Status) -> BrokerError {
    convert_error(BrokerError::upstream(status))
}

/// Lists and downloads provider datasets through a dataspace protocol peer.
#[derive(Builder)]
pub struct DspDataspaceConnector {
    dsp: Arc<dyn DspClient>,
    provider_lister: Arc<dyn ProviderLister>,
    #[builder(default = Client::new())]
    http_client: Client,
}

impl DspDataspaceConnector {
    async fn resolve_provider(&self, provider_id: &str) -> Result<Provider, BrokerError> {
        self.provider_lister
            .get_provider(provider_id)
            .await
            .map_err(convert_error)
    }

    async fn download_information(
        &self,
        provider: &Provider,
        file_id: &str,
    ) -> Result<GetProviderDatasetDownloadInformationResponse, BrokerError> {
        self.dsp
            .get_provider_dataset_download_information(GetProviderDatasetDownloadInformationRequest {
                provider_url: provider.provider_url.clone(),
                dataset_id: file_id.to_string(),
            })
            .await
            .map_err(|e| {
                error!("Seems file {} for download could not be found: {}", file_id, e);
                BrokerError::not_found(format!("file {} not found at provider {}", file_id, provider.id))
            })
    }

    async fn signal_transfer_complete(&self, transfer_id: &str) {
        let request = SignalTransferCompleteRequest {
            transfer_id: transfer_id.to_string(),
        };
        if let Err(e) = self.dsp.signal_transfer_complete(request).await {
            warn!("Failed to signal completion of transfer {}: {}", transfer_id, e);
        }
    }
}

#[async_trait]
impl DataspaceConnector for DspDataspaceConnector {
    async fn list_provider_files(&self, provider_id: &str) -> Result<Vec<ProviderFile>, BrokerError> {
        let provider = self.resolve_provider(provider_id).await?;
        info!("Listing files at provider {}", provider.name);

        let catalogue = self
            .dsp
            .get_provider_catalogue(GetProviderCatalogueRequest {
                provider_uri: provider.provider_url.clone(),
            })
            .await
            .map_err(rpc_error)?;

        Ok(catalogue
            .datasets
            .into_iter()
            .map(|dataset| ProviderFile {
                id: dataset.id,
                name: dataset.title,
                created_at: dataset.issued.as_ref().map_or(0, |issued| issued.seconds),
                mime_type: dataset.media_type,
                provider: provider.clone(),
                ..Default::default()
            })
            .collect())
    }

    async fn get_provider_file_info(&self, provider_id: &str, file_id: &str) -> Result<ProviderFile, BrokerError> {
        debug!("Getting file info for {} at {}", file_id, provider_id);
        self.list_provider_files(provider_id)
            .await?
            .into_iter()
            .find(|file| file.id == file_id)
            .ok_or_else(|| BrokerError::not_found(format!("file {} not found at provider {}", file_id, provider_id)))
    }

    async fn get_provider_file(&self, provider_id: &str, file_id: &str) -> Result<Vec<u8>, BrokerError> {
        let provider = self.resolve_provider(provider_id).await?;
        let download = self.download_information(&provider, file_id).await?;

        let result = match &download.publish_info {
            Some(publish_info) => match authentication_type(publish_info) {
                Ok(auth) => {
                    info!("Got download information with auth type {}", auth.as_str_name());
                    retrieve_dsp_file(&self.http_client, publish_info).await
                }
                Err(unknown) => {
                    self.signal_transfer_complete(&download.transfer_id).await;
                    panic!("unexpected authentication type: {}", unknown);
                }
            },
            None => Err(BrokerError::bad_gateway(format!(
                "no publish information for transfer {}",
                download.transfer_id
            ))),
        };

        self.signal_transfer_complete(&download.transfer_id).await;
        result
    }

    async fn get_download_credentials(
        &self,
        provider_id: &str,
        file_id: &str,
    ) -> Result<DownloadCredentials, BrokerError> {
        let provider = self.resolve_provider(provider_id).await?;
        let download = self.download_information(&provider, file_id).await?;

        let publish_info = download.publish_info.ok_or_else(|| {
            BrokerError::bad_gateway(format!("no publish information for transfer {}", download.transfer_id))
        })?;
        info!(
            "Got download information with auth type {}",
            publish_info.authentication_type().as_str_name()
        );

        Ok(DownloadCredentials {
            authentication_type: i64::from(publish_info.authentication_type),
            url: publish_info.url,
            username: publish_info.username,
            password: publish_info.password,
        })
    }
}
