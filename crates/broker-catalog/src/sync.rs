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


use crate::PROVIDER_NAMESPACE;
use crate::client::{CatalogSource, FederatedCatalogClient};
use crate::config::{CatalogConfig, ConfigError};
use crate::normalize::normalise_providers;
use async_trait::async_trait;
use bon::Builder;
use broker_core::cache::CacheStore;
use broker_core::poller::{Poller, SyncError, SyncTask};
use log::info;
use std::sync::Arc;

const TASK_NAME: &str = "federated catalog provider lister";

/// Pulls participants and provider addresses from the federated catalog and replaces the provider namespace.
#[derive(Builder)]
pub struct ProviderSynchronizer {
    source: Arc<dyn CatalogSource>,
    cache: Arc<dyn CacheStore>,
}

impl ProviderSynchronizer {
    /// Creates a synchronizer backed by the HTTP catalog client described by `config`.
    pub fn from_config(config: &CatalogConfig, cache: Arc<dyn CacheStore>) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = FederatedCatalogClient::builder()
            .http_client(config.http_client()?)
            .catalog_url(config.catalog_url.clone())
            .build();
        Ok(Self::builder().source(Arc::new(client)).cache(cache).build())
    }

    /// Wraps the synchronizer in a poller using the configured interval. The poller is not started.
    pub fn into_poller(self, config: &CatalogConfig) -> Poller {
        Poller::builder()
            .task(Arc::new(self))
            .interval(config.poll_interval)
            .build()
    }
}

#[async_trait]
impl SyncTask for ProviderSynchronizer {
    fn name(&self) -> &str {
        TASK_NAME
    }

    async fn run_pass(&self) -> Result<(), SyncError> {
        let participants = self
            .source
            .get_participants()
            .await
            .map_err(|e| SyncError::fetch(format!("Failed to get participants: {}", e)))?;

        // Address failures abort the pass; the previous generation stays in place.
        let addresses = self
            .source
            .get_provider_query_data()
            .await
            .map_err(|e| SyncError::fetch(format!("Failed to get provider info: {}", e)))?;
        info!(
            "Received {} participants and {} provider addresses",
            participants.len(),
            addresses.len()
        );

        let providers = normalise_providers(&participants, &addresses);
        let entries = providers
            .iter()
            .map(|provider| {
                serde_json::to_string(provider)
                    .map(|json| (provider.id.clone(), json))
                    .map_err(|e| SyncError::invalid_data(format!("Couldn't encode provider {}: {}", provider.id, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!("Saving {} providers", entries.len());
        self.cache
            .replace_hash(PROVIDER_NAMESPACE, entries)
            .await
            .map_err(|e| SyncError::persist(format!("Error saving providers: {}", e)))
    }
}
