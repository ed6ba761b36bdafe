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


//! Federated catalog synchronization and cache-backed provider lookup.
//!
//! A [`sync::ProviderSynchronizer`] periodically pulls participants and their network addresses from the federated
//! catalog, joins them by legal name and replaces the `catalogue:fc` namespace of the cache store. The
//! [`lister::FcProviderLister`] serves provider lookups from that namespace.

pub mod client;
pub mod config;
pub mod lister;
pub mod model;
pub mod normalize;
pub mod sync;

#[cfg(test)]
mod tests;

pub use client::{CatalogClientError, CatalogSource, FederatedCatalogClient};
pub use config::{CatalogConfig, ConfigError, load_public_keys};
pub use lister::{FcProviderLister, NoopProviderLister, StaticProviderLister};
pub use sync::ProviderSynchronizer;

/// Cache namespace holding one serialized [`model::ProviderInfo`] per provider id.
pub const PROVIDER_NAMESPACE: &str = "catalogue:fc";
