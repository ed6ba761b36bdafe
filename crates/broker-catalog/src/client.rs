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


use crate::model::{
    FcParticipantsResponse, FcProviderInfo, FcProviderResponse, FcQuery, ParticipantInfoWithVp,
    VerifiablePresentation,
};
use async_trait::async_trait;
use bon::Builder;
use log::{debug, info};
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use thiserror::Error;

const PARTICIPANTS_PATH: &str = "participants";
const QUERY_PATH: &str = "query";

/// Graph query returning the `ids` service access point of every legal participant's service offerings.
pub const PARTICIPANT_QUERY: &str = "MATCH (provider:LegalParticipant) <-[:providedBy]- (offer:ServiceOffering) \
-[:aggregationOf]-> (s:SoftwareResource) <-[:instanceOf]- (rh:InstantiatedVirtualResource) -[:serviceAccessPoint]-> \
(access:ServiceAccessPoint) WHERE access.name = 'ids' return {provider: provider.legalName, protocol: access.protocol, \
port: access.port, host: access.host}";

/// Source of participant and provider address records.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches every participant and parses its self-description.
    ///
    /// # Errors
    /// Fails if the request fails, the response is not successful, the body cannot be decoded, or any
    /// self-description is not a valid verifiable presentation.
    async fn get_participants(&self) -> Result<Vec<ParticipantInfoWithVp>, CatalogClientError>;

    /// Runs the provider address query and flattens the result rows.
    async fn get_provider_query_data(&self) -> Result<Vec<FcProviderInfo>, CatalogClientError>;
}

/// Errors returned by the federated catalog client.
#[derive(Debug, Error)]
pub enum CatalogClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid catalog data: {0}")]
    InvalidData(String),
}

impl CatalogClientError {
    pub fn network(message: impl Into<String>) -> Self {
        CatalogClientError::Network(message.into())
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        CatalogClientError::InvalidData(message.into())
    }
}

/// HTTP client for the federated catalog API.
#[derive(Clone, Builder)]
pub struct FederatedCatalogClient {
    #[builder(default = Client::new())]
    http_client: Client,
    #[builder(into)]
    catalog_url: String,
}

impl FederatedCatalogClient {
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.catalog_url.trim_end_matches('/'), path)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CatalogClientError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(CatalogClientError::Status { status, body });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogClientError::network(format!("Failed to read response body: {}", e)))?;
        serde_json::from_str(&body)
            .map_err(|e| CatalogClientError::invalid_data(format!("Failed to decode response: {}", e)))
    }
}

#[async_trait]
impl CatalogSource for FederatedCatalogClient {
    async fn get_participants(&self) -> Result<Vec<ParticipantInfoWithVp>, CatalogClientError> {
        let url = self.endpoint(PARTICIPANTS_PATH);
        info!("Retrieving participant info from {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CatalogClientError::network(format!("Failed to get participants: {}", e)))?;
        let participants: FcParticipantsResponse = Self::read_json(response).await?;
        debug!("Catalog reported {} participants", participants.total_count);

        participants
            .items
            .into_iter()
            .map(|participant| -> Result<ParticipantInfoWithVp, CatalogClientError> {
                let presentation: VerifiablePresentation = serde_json::from_str(&participant.self_description)
                    .map_err(|e| {
                        CatalogClientError::invalid_data(format!(
                            "Invalid self-description for participant {}: {}",
                            participant.id, e
                        ))
                    })?;
                Ok(ParticipantInfoWithVp {
                    id: participant.id,
                    name: participant.name,
                    public_key: participant.public_key,
                    self_description: participant.self_description,
                    verifiable_presentation: presentation,
                })
            })
            .collect()
    }

    async fn get_provider_query_data(&self) -> Result<Vec<FcProviderInfo>, CatalogClientError> {
        let url = self.endpoint(QUERY_PATH);
        info!("Retrieving provider info from {}", url);

        let query = FcQuery {
            statement: PARTICIPANT_QUERY.to_string(),
        };
        let response = self
            .http_client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(&query)
            .send()
            .await
            .map_err(|e| CatalogClientError::network(format!("Failed to query providers: {}", e)))?;
        let result: FcProviderResponse = Self::read_json(response).await?;

        Ok(result.items.into_iter().flat_map(HashMap::into_values).collect())
    }
}
