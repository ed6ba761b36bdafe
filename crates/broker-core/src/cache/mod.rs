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

pub mod mem;
pub mod postgres;

#[cfg(test)]
mod tests;

pub use mem::MemoryCacheStore;
pub use postgres::PostgresCacheStore;

use async_trait::async_trait;
use thiserror::Error;

/// Fast lookup store holding the synchronized catalog generations.
///
/// Two shapes of data are supported: hashes (a namespace key mapping fields to values, used for one record per
/// provider) and plain values (one blob per key, used for the study catalogue). Every single operation is atomic;
/// the storage backend (in-memory, database, etc.) is implementation-dependent.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Replaces the whole content of a hash namespace.
    ///
    /// Readers observe either the previous generation or the new one, never a partially written namespace. An empty
    /// `entries` list clears the namespace.
    ///
    /// # Arguments
    /// * `namespace` - Hash key
    /// * `entries` - `(field, value)` pairs forming the new generation
    async fn replace_hash(&self, namespace: &str, entries: Vec<(String, String)>) -> Result<(), CacheError>;

    /// Retrieves a single field of a hash namespace.
    ///
    /// # Errors
    /// Returns `CacheError::KeyNotFound` if the namespace or the field does not exist.
    async fn hash_get(&self, namespace: &str, field: &str) -> Result<String, CacheError>;

    /// Returns every value stored in a hash namespace, in no particular order. A missing namespace yields an
    /// empty list.
    async fn hash_values(&self, namespace: &str) -> Result<Vec<String>, CacheError>;

    /// Retrieves a plain value.
    ///
    /// # Errors
    /// Returns `CacheError::KeyNotFound` if the key does not exist.
    async fn get(&self, key: &str) -> Result<String, CacheError>;

    /// Stores a plain value, overwriting any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
}

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("No cache entry for key '{key}'")]
    KeyNotFound { key: String },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl CacheError {
    pub fn key_not_found(namespace: &str, field: &str) -> Self {
        CacheError::KeyNotFound {
            key: format!("{}/{}", namespace, field),
        }
    }

    pub fn value_not_found(key: impl Into<String>) -> Self {
        CacheError::KeyNotFound { key: key.into() }
    }

    pub fn database_error(message: impl Into<String>) -> Self {
        CacheError::DatabaseError(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::KeyNotFound { .. })
    }
}
