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


mod fixed;

pub use fixed::{NoopProviderLister, StaticProviderLister};

use crate::PROVIDER_NAMESPACE;
use crate::config::CatalogConfig;
use crate::model::ProviderInfo;
use async_trait::async_trait;
use bon::Builder;
use broker_core::api::ProviderLister;
use broker_core::cache::{CacheError, CacheStore};
use broker_core::error::BrokerError;
use broker_core::types::{DEFAULT_CONTACT_INFORMATION, DEFAULT_DESCRIPTION, NO_KEY_FOUND, Provider};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// Serves providers from the cache namespace filled by the [`crate::sync::ProviderSynchronizer`].
#[derive(Builder)]
pub struct FcProviderLister {
    cache: Arc<dyn CacheStore>,
    /// Public keys keyed by provider URL.
    #[builder(default)]
    public_keys: HashMap<String, String>,
}

impl FcProviderLister {
    pub fn from_config(config: &CatalogConfig, cache: Arc<dyn CacheStore>) -> Self {
        Self::builder()
            .cache(cache)
            .public_keys(config.public_keys.clone())
            .build()
    }

    async fn fetch(&self, provider_id: &str) -> Result<ProviderInfo, BrokerError> {
        let raw = self
            .cache
            .hash_get(PROVIDER_NAMESPACE, provider_id)
            .await
            .map_err(|e| match e {
                CacheError::KeyNotFound { .. } => BrokerError::not_found(format!("provider {} not found", provider_id)),
                other => BrokerError::store(format!("couldn't get provider {}: {}", provider_id, other)),
            })?;
        serde_json::from_str(&raw)
            .map_err(|e| BrokerError::store(format!("couldn't decode provider {}: {}", provider_id, e)))
    }

    fn convert_provider(&self, info: ProviderInfo) -> Result<Provider, serde_json::Error> {
        let verifiable_credential = serde_json::to_string(&info.verifiable_credential)?;
        let provider_url = format!("{}://{}", info.protocol, info.host);
        let public_key = self
            .public_keys
            .get(&provider_url)
            .filter(|key| !key.is_empty())
            .cloned()
            .unwrap_or_else(|| NO_KEY_FOUND.to_string());

        Ok(Provider {
            id: info.id,
            name: info.name,
            description: DEFAULT_DESCRIPTION.to_string(),
            logo_uri: String::new(),
            contact_information: DEFAULT_CONTACT_INFORMATION.to_string(),
            verifiable_credential,
            provider_url,
            public_key,
        })
    }
}

#[async_trait]
impl ProviderLister for FcProviderLister {
    async fn list_providers(&self) -> Result<Vec<Provider>, BrokerError> {
        debug!("Listing providers");
        let values = self.cache.hash_values(PROVIDER_NAMESPACE).await?;

        let mut providers = Vec::with_capacity(values.len());
        for raw in values {
            let converted = serde_json::from_str::<ProviderInfo>(&raw).and_then(|info| self.convert_provider(info));
            match converted {
                Ok(provider) => providers.push(provider),
                Err(e) => warn!("Skipping undecodable provider record: {}", e),
            }
        }
        Ok(providers)
    }

    async fn get_provider(&self, provider_id: &str) -> Result<Provider, BrokerError> {
        debug!("Getting provider {}", provider_id);
        let info = self.fetch(provider_id).await?;
        self.convert_provider(info)
            .map_err(|e| BrokerError::store(format!("couldn't convert provider {}: {}", provider_id, e)))
    }

    async fn get_provider_url(&self, provider_id: &str) -> Result<String, BrokerError> {
        debug!("Getting provider URL for {}", provider_id);
        Ok(self.fetch(provider_id).await?.host)
    }
}
