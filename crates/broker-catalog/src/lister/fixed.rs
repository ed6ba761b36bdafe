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


use async_trait::async_trait;
use broker_core::api::ProviderLister;
use broker_core::error::BrokerError;
use broker_core::types::Provider;

pub(crate) const STATIC_PROVIDER_ID: &str = "0E1EE0FB-9F9D-45E1-9C22-3F32FA24E0AA";
const STATIC_PROVIDER_URL: &str = "https://example.org/provider/";

/// Provider lister returning a single fixed provider. Intended for local development.
#[derive(Debug, Default, Clone)]
pub struct StaticProviderLister;

impl StaticProviderLister {
    pub fn new() -> Self {
        Self
    }

    fn providers() -> Vec<Provider> {
        vec![Provider {
            id: STATIC_PROVIDER_ID.to_string(),
            name: "Example Provider".to_string(),
            description: "This is an example provider.".to_string(),
            logo_uri: "https://example.org/logo.png".to_string(),
            contact_information: "Example Street 1, 12345 Example City".to_string(),
            verifiable_credential: String::new(),
            provider_url: "http://localhost:8080".to_string(),
            public_key: "An RSA public key for the provider".to_string(),
        }]
    }
}

#[async_trait]
impl ProviderLister for StaticProviderLister {
    async fn list_providers(&self) -> Result<Vec<Provider>, BrokerError> {
        Ok(Self::providers())
    }

    async fn get_provider(&self, provider_id: &str) -> Result<Provider, BrokerError> {
        Self::providers()
            .into_iter()
            .find(|p| p.id == provider_id)
            .ok_or_else(|| BrokerError::not_found(format!("provider {} not found", provider_id)))
    }

    async fn get_provider_url(&self, _provider_id: &str) -> Result<String, BrokerError> {
        Ok(STATIC_PROVIDER_URL.to_string())
    }
}

/// Provider lister that knows no providers.
#[derive(Debug, Default, Clone)]
pub struct NoopProviderLister;

#[async_trait]
impl ProviderLister for NoopProviderLister {
    async fn list_providers(&self) -> Result<Vec<Provider>, BrokerError> {
        Ok(Vec::new())
    }

    async fn get_provider(&self, provider_id: &str) -> Result<Provider, BrokerError> {
        Err(BrokerError::not_found(format!("provider {} not found", provider_id)))
    }

    async fn get_provider_url(&self, provider_id: &str) -> Result<String, BrokerError> {
        Err(BrokerError::not_found(format!("provider {} not found", provider_id)))
    }
}
