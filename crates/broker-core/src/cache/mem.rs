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

use crate::cache::{CacheError, CacheStore};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory cache store for testing and single-instance deployments.
///
/// A namespace replace builds the new generation before taking the write lock and then swaps it in, so readers
/// never see a half-populated namespace.
///
/// # Example
///
/// ```
/// # use broker_core::cache::{CacheStore, MemoryCacheStore};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryCacheStore::new();
/// store
///     .replace_hash("catalogue:fc", vec![("id1".into(), "{}".into())])
///     .await?;
/// assert_eq!(store.hash_get("catalogue:fc", "id1").await?, "{}");
/// # Ok(())
/// # }
/// ```
pub struct MemoryCacheStore {
    hashes: RwLock<HashMap<String, HashMap<String, String>>>,
    values: RwLock<HashMap<String, String>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self {
            hashes: RwLock::new(HashMap::new()),
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Number of fields currently stored under a namespace.
    pub async fn hash_len(&self, namespace: &str) -> usize {
        self.hashes.read().await.get(namespace).map_or(0, HashMap::len)
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn replace_hash(&self, namespace: &str, entries: Vec<(String, String)>) -> Result<(), CacheError> {
        let generation: HashMap<String, String> = entries.into_iter().collect();

        let mut hashes = self.hashes.write().await;
        if generation.is_empty() {
            hashes.remove(namespace);
        } else {
            hashes.insert(namespace.to_string(), generation);
        }
        Ok(())
    }

    async fn hash_get(&self, namespace: &str, field: &str) -> Result<String, CacheError> {
        self.hashes
            .read()
            .await
            .get(namespace)
            .and_then(|hash| hash.get(field))
            .cloned()
            .ok_or_else(|| CacheError::key_not_found(namespace, field))
    }

    async fn hash_values(&self, namespace: &str) -> Result<Vec<String>, CacheError> {
        Ok(self
            .hashes
            .read()
            .await
            .get(namespace)
            .map(|hash| hash.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn get(&self, key: &str) -> Result<String, CacheError> {
        self.values
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| CacheError::value_not_found(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.values.write().await.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
