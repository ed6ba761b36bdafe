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

use crate::cache::CacheError;
use thiserror::Error;

/// Type-erased error carried through [`BrokerError::Upstream`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced to callers of the lookup and transfer services.
///
/// `NotFound`, `Invalid`, `InvalidCredentials` and `BadGateway` form the taxonomy the route layer maps onto client
/// responses. `Upstream` keeps the original error intact so callers can still inspect it, e.g. by downcasting to an
/// RPC status.
#[derive(Debug, Error)]
pub enum BrokerError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Upstream error: {0}")]
    Upstream(#[source] BoxError),
}

impl BrokerError {
    pub fn not_found(message: impl Into<String>) -> Self {
        BrokerError::NotFound(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        BrokerError::Invalid(message.into())
    }

    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        BrokerError::InvalidCredentials(message.into())
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        BrokerError::BadGateway(message.into())
    }

    pub fn store(message: impl Into<String>) -> Self {
        BrokerError::Store(message.into())
    }

    pub fn upstream(error: impl Into<BoxError>) -> Self {
        BrokerError::Upstream(error.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BrokerError::NotFound(_))
    }
}

impl From<CacheError> for BrokerError {
    fn from(error: CacheError) -> Self {
        match error {
            CacheError::KeyNotFound { .. } => BrokerError::NotFound(error.to_string()),
            CacheError::DatabaseError(message) => BrokerError::Store(message),
        }
    }
}
