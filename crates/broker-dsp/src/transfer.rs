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


use crate::rpc::{AuthenticationType, PublishInfo};
use broker_core::error::BrokerError;
use log::{debug, error};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

/// The authentication type announced in `publish_info`, or the raw value when this client does not know it.
pub fn authentication_type(publish_info: &PublishInfo) -> Result<AuthenticationType, i32> {
    AuthenticationType::try_from(publish_info.authentication_type).map_err(|_| publish_info.authentication_type)
}

/// Downloads a published dataset, authenticating as described by `publish_info`.
///
/// Basic authentication uses the username and password, bearer authentication sends the password as the token.
///
/// # Panics
/// Panics on an authentication type this client does not know; the peer and client disagree on the protocol.
/// Callers holding a transfer check [`authentication_type`] first so the transfer can be released.
pub async fn retrieve_dsp_file(client: &Client, publish_info: &PublishInfo) -> Result<Vec<u8>, BrokerError> {
    debug!("Downloading dataset from {}", publish_info.url);
    let request = client
        .get(&publish_info.url)
        .header(CONTENT_TYPE, "application/json");

    let request = match authentication_type(publish_info) {
        Ok(AuthenticationType::Basic) => request.basic_auth(&publish_info.username, Some(&publish_info.password)),
        Ok(AuthenticationType::Bearer) => request.bearer_auth(&publish_info.password),
        Ok(AuthenticationType::Unspecified) => request,
        Err(unknown) => panic!("unexpected authentication type: {}", unknown),
    };

    let response = request.send().await.map_err(|e| {
        error!("Failed to send download request: {}", e);
        BrokerError::bad_gateway(format!("Failed to download {}: {}", publish_info.url, e))
    })?;

    let status = response.status();
    let body = response.bytes().await.map_err(|e| {
        error!("Failed to read download body: {}", e);
        BrokerError::bad_gateway(format!("Failed to read body from {}: {}", publish_info.url, e))
    })?;

    if !status.is_success() {
        error!(
            "Received non-success status code {} for {}: {}",
            status,
            publish_info.url,
            String::from_utf8_lossy(&body)
        );
        return Err(BrokerError::bad_gateway(format!(
            "non-success status code: {}",
            status.as_u16()
        )));
    }

    Ok(body.to_vec())
}
