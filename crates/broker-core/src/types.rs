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

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Returned in [`Provider::public_key`] when no key is configured for the provider URL.
pub const NO_KEY_FOUND: &str = "No key found";
pub const DEFAULT_DESCRIPTION: &str = "No description available.";
pub const DEFAULT_CONTACT_INFORMATION: &str = "No contact information available.";

/// A data-holding organization as presented to the frontend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo_uri: String,
    pub contact_information: String,
    /// The provider's verifiable credential, serialized as JSON.
    pub verifiable_credential: String,
    /// `protocol://host` of the provider's dataspace endpoint.
    pub provider_url: String,
    pub public_key: String,
}

/// A file hosted by a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderFile {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unix timestamp in seconds, 0 when unknown.
    pub created_at: i64,
    pub mime_type: String,
    pub size: i64,
    pub provider: Provider,
}

/// Credentials a caller needs to fetch a dataset itself.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadCredentials {
    pub authentication_type: i64,
    pub url: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for DownloadCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadCredentials")
            .field("authentication_type", &self.authentication_type)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Level of access a study requests for a piece of research data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum AccessType {
    /// Access to the full resource, including real names.
    #[default]
    Full,
    Anonymized,
    Pseudonymized,
}

impl From<AccessType> for i64 {
    fn from(access_type: AccessType) -> Self {
        match access_type {
            AccessType::Full => 0,
            AccessType::Anonymized => 1,
            AccessType::Pseudonymized => 2,
        }
    }
}

impl TryFrom<i64> for AccessType {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccessType::Full),
            1 => Ok(AccessType::Anonymized),
            2 => Ok(AccessType::Pseudonymized),
            other => Err(format!("unknown access type {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchData {
    pub name: String,
    pub description: String,
    pub data_type: String,
    pub access_type: AccessType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Study {
    pub id: Uuid,
    pub organization: Organization,
    pub name: String,
    pub description: String,
    pub description_summary: String,
    pub study_uri: String,
    pub study_start: i64,
    pub study_end: i64,
    pub research_data: Vec<ResearchData>,
}
