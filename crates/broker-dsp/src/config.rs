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


use bon::Builder;
use broker_core::poller::DEFAULT_POLL_INTERVAL;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the study catalogue synchronizer.
#[derive(Builder, Clone, Debug)]
pub struct StudyCatalogConfig {
    /// URI of the dataspace peer publishing the study catalogue
    #[builder(into)]
    pub study_catalog_uri: String,
    /// Delay between two synchronization passes (defaults to 60 seconds)
    #[builder(default = DEFAULT_POLL_INTERVAL)]
    pub poll_interval: Duration,
    /// HTTP request timeout for the catalogue download (defaults to 10 seconds)
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub request_timeout: Duration,
}

impl StudyCatalogConfig {
    pub fn http_client(&self) -> Result<Client, ConnectError> {
        Client::builder()
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| ConnectError::HttpClient(e.to_string()))
    }
}

/// Connection settings for the dataspace protocol RPC peer.
#[derive(Builder, Clone)]
pub struct DspConnectionConfig {
    /// Address of the RPC endpoint, either `host:port` or a full URI
    #[builder(into)]
    pub address: String,
    /// Connect without TLS
    #[builder(default)]
    pub insecure: bool,
    /// PEM file with a custom CA for the peer's certificate. Native roots are used when absent.
    #[builder(into)]
    pub ca_cert: Option<PathBuf>,
    /// PEM file with the client certificate used to authenticate with the peer
    #[builder(into)]
    pub client_cert: Option<PathBuf>,
    /// PEM file with the key of the client certificate
    #[builder(into)]
    pub client_cert_key: Option<PathBuf>,
    /// Timeout for establishing the connection (defaults to 10 seconds)
    #[builder(default = DEFAULT_CONNECT_TIMEOUT)]
    pub connect_timeout: Duration,
}

impl DspConnectionConfig {
    /// The endpoint URI, adding a scheme matching the TLS setting when the address has none.
    pub fn endpoint_uri(&self) -> String {
        if self.address.contains("://") {
            self.address.clone()
        } else if self.insecure {
            format!("http://{}", self.address)
        } else {
            format!("https://{}", self.address)
        }
    }
}

impl std::fmt::Debug for DspConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DspConnectionConfig")
            .field("address", &self.address)
            .field("insecure", &self.insecure)
            .field("ca_cert", &self.ca_cert)
            .field("client_cert", &self.client_cert)
            .field("client_cert_key", &self.client_cert_key.as_ref().map(|_| "***"))
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Errors raised while connecting to the dataspace peer.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Client certificate {0} configured without a key")]
    MissingClientKey(PathBuf),

    #[error("Invalid DSP address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("Could not connect to DSP peer: {0}")]
    Transport(#[source] tonic::transport::Error),

    #[error("Could not ping DSP peer: {0}")]
    Ping(#[source] tonic::Status),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}
