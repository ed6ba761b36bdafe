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

use crate::error::BrokerError;
use crate::types::{DownloadCredentials, Provider, ProviderFile, Study};
use async_trait::async_trait;
use uuid::Uuid;

/// Looks up providers known to the broker.
#[async_trait]
pub trait ProviderLister: Send + Sync {
    /// Returns every known provider. Order is unspecified.
    async fn list_providers(&self) -> Result<Vec<Provider>, BrokerError>;

    /// Returns a single provider.
    ///
    /// # Errors
    /// Returns `BrokerError::NotFound` if the provider is unknown.
    async fn get_provider(&self, provider_id: &str) -> Result<Provider, BrokerError>;

    /// Returns the network location of a provider.
    ///
    /// Catalog-backed implementations return the bare host, not the `protocol://host` form found in
    /// [`Provider::provider_url`].
    async fn get_provider_url(&self, provider_id: &str) -> Result<String, BrokerError>;
}

/// Looks up studies and the files they are interested in.
#[async_trait]
pub trait StudyLister: Send + Sync {
    async fn list_studies(&self) -> Result<Vec<Study>, BrokerError>;
    async fn get_study(&self, study_id: Uuid) -> Result<Study, BrokerError>;
    async fn list_study_files(&self, study_id: Uuid) -> Result<Vec<ProviderFile>, BrokerError>;
}

/// Lists and retrieves files hosted by providers over the dataspace.
#[async_trait]
pub trait DataspaceConnector: Send + Sync {
    async fn list_provider_files(&self, provider_id: &str) -> Result<Vec<ProviderFile>, BrokerError>;

    async fn get_provider_file_info(&self, provider_id: &str, file_id: &str) -> Result<ProviderFile, BrokerError>;

    /// Downloads the file contents.
    // TODO: return a stream instead of a buffer once the route layer can forward large bodies.
    async fn get_provider_file(&self, provider_id: &str, file_id: &str) -> Result<Vec<u8>, BrokerError>;

    /// Returns the credentials needed to download the file without downloading it.
    async fn get_download_credentials(
        &self,
        provider_id: &str,
        file_id: &str,
    ) -> Result<DownloadCredentials, BrokerError>;
}
