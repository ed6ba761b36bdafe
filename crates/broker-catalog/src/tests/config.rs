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


use crate::config::{CatalogConfig, ConfigError, load_public_keys};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_builder_defaults() {
    let config = CatalogConfig::builder().catalog_url("https://fc.example.com").build();

    assert_eq!(config.poll_interval, Duration::from_secs(60));
    assert_eq!(config.request_timeout, Duration::from_secs(10));
    assert!(config.public_keys.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_urls() {
    let relative = CatalogConfig::builder().catalog_url("fc.example.com").build();
    let ftp = CatalogConfig::builder().catalog_url("ftp://fc.example.com").build();

    assert!(matches!(relative.validate(), Err(ConfigError::InvalidUrl { .. })));
    assert!(matches!(ftp.validate(), Err(ConfigError::InvalidUrl { .. })));
}

#[test]
fn test_load_public_keys_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"https://acme.example": "acme-key", "http://beta.example": "beta-key"}}"#
    )
    .unwrap();

    let keys = load_public_keys(file.path()).unwrap();

    assert_eq!(keys.len(), 2);
    assert_eq!(keys["https://acme.example"], "acme-key");
}

#[test]
fn test_load_public_keys_with_empty_path() {
    assert!(load_public_keys("").unwrap().is_empty());
}

#[test]
fn test_load_public_keys_missing_file() {
    let result = load_public_keys("/nonexistent/provider-keys.json");

    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_load_public_keys_invalid_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[1, 2, 3]").unwrap();

    let result = load_public_keys(file.path());

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}
