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


use crate::config::{ConnectError, StudyCatalogConfig};
use crate::rpc::{
    DspClient, GetProviderCatalogueRequest, GetProviderDatasetDownloadInformationRequest,
    SignalTransferCompleteRequest,
};
use crate::study::convert_study;
use crate::study::model::ResearchStudy;
use crate::transfer::{authentication_type, retrieve_dsp_file};
use async_trait::async_trait;
use bon::Builder;
use broker_core::api::StudyLister;
use broker_core::cache::{CacheError, CacheStore};
use broker_core::error::BrokerError;
use broker_core::poller::{Poller, SyncError, SyncTask};
use broker_core::types::{ProviderFile, Study};
use log::{debug, error, info, warn};
use reqwest::Client;
use std::sync::Arc;
use uuid::Uuid;

/// Cache key holding the serialized study catalogue.
pub const STUDY_NAMESPACE: &str = "studies:dsp-studies";

const TASK_NAME: &str = "dsp study lister";

/// Serves studies from the catalogue blob stored by the [`StudySynchronizer`].
///
/// Until the first successful synchronization there is no blob, and listing returns `BrokerError::Store` rather
/// than `NotFound`.
#[derive(Builder)]
pub struct DspStudyManager {
    cache: Arc<dyn CacheStore>,
}

#[async_trait]
impl StudyLister for DspStudyManager {
    async fn list_studies(&self) -> Result<Vec<Study>, BrokerError> {
        debug!("Listing studies");
        let data = self.cache.get(STUDY_NAMESPACE).await.map_err(|e| match e {
            CacheError::KeyNotFound { .. } => BrokerError::store("study catalogue has not been synchronized yet"),
            other => BrokerError::store(format!("couldn't get studies: {}", other)),
        })?;

        let studies: Vec<ResearchStudy> = serde_json::from_str(&data)
            .map_err(|e| BrokerError::bad_gateway(format!("couldn't decode study catalogue: {}", e)))?;
        studies.iter().map(convert_study).collect()
    }

    async fn get_study(&self, study_id: Uuid) -> Result<Study, BrokerError> {
        debug!("Getting study {}", study_id);
        self.list_studies()
            .await?
            .into_iter()
            .find(|study| study.id == study_id)
            .ok_or_else(|| BrokerError::not_found(format!("study {} not found", study_id)))
    }

    async fn list_study_files(&self, _study_id: Uuid) -> Result<Vec<ProviderFile>, BrokerError> {
        // Files are fetched through the provider API instead.
        Ok(Vec::new())
    }
}

/// Downloads the study catalogue dataset from the dataspace peer and stores it whole.
#[derive(Builder)]
pub struct StudySynchronizer {
    dsp: Arc<dyn DspClient>,
    cache: Arc<dyn CacheStore>,
    #[builder(into)]
    study_catalog_uri: String,
    #[builder(default = Client::new())]
    http_client: Client,
}

impl StudySynchronizer {
    pub fn from_config(
        config: &StudyCatalogConfig,
        dsp: Arc<dyn DspClient>,
        cache: Arc<dyn CacheStore>,
    ) -> Result<Self, ConnectError> {
        Ok(Self::builder()
            .dsp(dsp)
            .cache(cache)
            .study_catalog_uri(config.study_catalog_uri.clone())
            .http_client(config.http_client()?)
            .build())
    }

    /// Wraps the synchronizer in a poller using the configured interval. The poller is not started.
    pub fn into_poller(self, config: &StudyCatalogConfig) -> Poller {
        Poller::builder()
            .task(Arc::new(self))
            .interval(config.poll_interval)
            .build()
    }

    async fn download(&self, dataset_id: String) -> Result<Vec<u8>, SyncError> {
        let download = self
            .dsp
            .get_provider_dataset_download_information(GetProviderDatasetDownloadInformationRequest {
                provider_url: self.study_catalog_uri.clone(),
                dataset_id,
            })
            .await
            .map_err(|e| SyncError::fetch(format!("Seems file for download could not be found: {}", e)))?;

        let result = match &download.publish_info {
            Some(publish_info) => match authentication_type(publish_info) {
                Ok(auth) => {
                    info!("Got download information with auth type {}", auth.as_str_name());
                    retrieve_dsp_file(&self.http_client, publish_info)
                        .await
                        .map_err(|e| SyncError::fetch(format!("Failed to download study information: {}", e)))
                }
                Err(unknown) => {
                    error!("Peer announced unexpected authentication type {}", unknown);
                    Err(SyncError::invalid_data(format!("unexpected authentication type: {}", unknown)))
                }
            },
            None => Err(SyncError::invalid_data("download information carries no publish info")),
        };

        let signal = SignalTransferCompleteRequest {
            transfer_id: download.transfer_id.clone(),
        };
        if let Err(e) = self.dsp.signal_transfer_complete(signal).await {
            warn!("Failed to signal completion of transfer {}: {}", download.transfer_id, e);
        }
        result
    }
}

#[async_trait]
impl SyncTask for StudySynchronizer {
    fn name(&self) -> &str {
        TASK_NAME
    }

    async fn run_pass(&self) -> Result<(), SyncError> {
        let catalogue = self
            .dsp
            .get_provider_catalogue(GetProviderCatalogueRequest {
                provider_uri: self.study_catalog_uri.clone(),
            })
            .await
            .map_err(|e| SyncError::fetch(format!("Failed to retrieve catalogue: {}", e)))?;

        let [dataset] = <[_; 1]>::try_from(catalogue.datasets).map_err(|datasets| {
            SyncError::invalid_data(format!(
                "catalogue does not contain single dataset: {} items",
                datasets.len()
            ))
        })?;

        let body = self.download(dataset.id).await?;
        let body = String::from_utf8(body)
            .map_err(|e| SyncError::invalid_data(format!("study catalogue is not UTF-8: {}", e)))?;
        serde_json::from_str::<Vec<ResearchStudy>>(&body)
            .map_err(|e| SyncError::invalid_data(format!("study catalogue is not a study list: {}", e)))?;

        self.cache
            .set(STUDY_NAMESPACE, &body)
            .await
            .map_err(|e| SyncError::persist(format!("Failed to store studies: {}", e)))?;
        info!("Stored study catalogue");
        Ok(())
    }
}
