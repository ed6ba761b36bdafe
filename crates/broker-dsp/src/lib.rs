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


//! Dataspace protocol connector: catalogue browsing, authenticated transfers and the study catalogue.
//!
//! [`connector::DspDataspaceConnector`] resolves providers through a [`broker_core::api::ProviderLister`] and talks
//! to the dataspace peer through a [`rpc::DspClient`], usually the [`client::GrpcDspClient`].

pub mod client;
pub mod config;
pub mod connector;
pub mod rpc;
pub mod study;
pub mod transfer;

#[cfg(test)]
mod tests;

pub use client::GrpcDspClient;
pub use config::{ConnectError, DspConnectionConfig, StudyCatalogConfig};
pub use connector::{DspDataspaceConnector, convert_error};
pub use rpc::DspClient;
pub use study::{DspStudyManager, StaticStudyManager, StudySynchronizer};
