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
use log::info;
use reqwest::{Client, Url};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the federated catalog provider lister.
#[derive(Builder, Clone, Debug)]
pub struct CatalogConfig {
    /// Base URL of the federated catalog API (e.g., "https://fc.example.com")
    #[builder(into)]
    pub catalog_url: String,
    /// Delay between two synchronization passes (defaults to 60 seconds)
    #[builder(default = DEFAULT_POLL_INTERVAL)]
    pub poll_interval: Duration,
    /// HTTP request timeout for catalog calls (defaults to 10 seconds)
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub request_timeout: Duration,
    /// Provider public keys keyed by provider URL (`protocol://host`)
    #[builder(default)]
    pub public_keys: HashMap<String, String>,
}

impl CatalogConfig {
    /// Checks that the catalog URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.catalog_url)
            .map_err(|e| ConfigError::invalid_url(&self.catalog_url, e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::invalid_url(
                &self.catalog_url,
                format!("unsupported scheme {}", scheme),
            )),
        }
    }

    /// Builds the HTTP client used for catalog calls.
    pub fn http_client(&self) -> Result<Client, ConfigError> {
        Client::builder()
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))
    }
}

/// Errors raised while assembling configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

impl ConfigError {
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Loads the provider public keys from a JSON object mapping provider URLs to keys.
///
/// An empty path yields an empty map.
pub fn load_public_keys(path: impl AsRef<Path>) -> Result<HashMap<String, String>, ConfigError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Ok(HashMap::new());
    }

    info!("Loading provider public keys from {}", path.display());
    let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
