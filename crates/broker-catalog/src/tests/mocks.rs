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


use crate::client::{CatalogClientError, CatalogSource};
use crate::model::{FcProviderInfo, ParticipantInfoWithVp};
use broker_core::cache::{CacheError, CacheStore};
use mockall::mock;

mock! {
    pub CatalogSource {}

    #[async_trait::async_trait]
    impl CatalogSource for CatalogSource {
        async fn get_participants(&self) -> Result<Vec<ParticipantInfoWithVp>, CatalogClientError>;
        async fn get_provider_query_data(&self) -> Result<Vec<FcProviderInfo>, CatalogClientError>;
    }
}

mock! {
    pub CacheStore {}

    #[async_trait::async_trait]
    impl CacheStore for CacheStore {
        async fn replace_hash(&self, namespace: &str, entries: Vec<(String, String)>) -> Result<(), CacheError>;
        async fn hash_get(&self, namespace: &str, field: &str) -> Result<String, CacheError>;
        async fn hash_values(&self, namespace: &str) -> Result<Vec<String>, CacheError>;
        async fn get(&self, key: &str) -> Result<String, CacheError>;
        async fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
    }
}
