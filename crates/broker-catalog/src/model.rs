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


//! Wire and cache records of the federated catalog.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A participant as returned by the catalog's `participants` endpoint.
///
/// `self_description` holds a verifiable presentation encoded as a JSON string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantInfo {
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub public_key: String,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub self_description: String,
}

/// A participant together with its parsed self-description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticipantInfoWithVp {
    pub id: String,
    pub name: String,
    pub public_key: String,
    pub self_description: String,
    pub verifiable_presentation: VerifiablePresentation,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FcParticipantsResponse {
    pub total_count: i64,
    pub items: Vec<ParticipantInfo>,
}

/// Body of a graph query against the catalog's `query` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct FcQuery {
    pub statement: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FcProviderResponse {
    pub total_count: i64,
    pub items: Vec<HashMap<String, FcProviderInfo>>,
}

/// Network address of a provider's dataspace endpoint, keyed by the provider's legal name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FcProviderInfo {
    #[serde(deserialize_with = "null_as_empty")]
    pub host: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub protocol: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub provider: String,
    #[serde(deserialize_with = "string_or_number")]
    pub port: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifiablePresentation {
    #[serde(rename = "@context", skip_serializing_if = "Value::is_null")]
    pub context: Value,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Value::is_null")]
    pub presentation_type: Value,
    pub verifiable_credential: Vec<VerifiableCredential>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<Proof>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifiableCredential {
    #[serde(rename = "@context", skip_serializing_if = "Value::is_null")]
    pub context: Value,
    #[serde(rename = "type", skip_serializing_if = "Value::is_null")]
    pub credential_type: Value,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub issuer: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuance_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    pub credential_subject: CredentialSubject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<Proof>,
}

/// Gaia-X legal participant claims.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialSubject {
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub subject_type: String,
    #[serde(
        rename = "gx:legalName",
        alias = "legalName",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub legal_name: String,
    #[serde(rename = "gx:legalRegistrationNumber", skip_serializing_if = "Option::is_none")]
    pub legal_registration_number: Option<RegistrationNumber>,
    #[serde(rename = "gx:headquarterAddress", skip_serializing_if = "Option::is_none")]
    pub headquarter_address: Option<Address>,
    #[serde(rename = "gx:legalAddress", skip_serializing_if = "Option::is_none")]
    pub legal_address: Option<Address>,
    #[serde(
        rename = "gx-terms-and-conditions:gaiaxTermsAndConditions",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub terms_and_conditions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationNumber {
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(
        rename = "gx:addressCountryCode",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub country_code: String,
    #[serde(rename = "gx:addressCode", deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(rename = "gx:streetAddress", deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub street_address: String,
    #[serde(rename = "gx:postalCode", deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    #[serde(rename = "gx:locality", deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub locality: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Proof {
    #[serde(rename = "type", deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub proof_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub proof_purpose: String,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub proof_value: String,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub verification_method: String,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub jws: String,
}

/// The provider record persisted in the cache, one per joined participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    pub public_key: String,
    pub protocol_version: String,
    pub self_description: String,
    pub verifiable_credential: VerifiableCredential,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub protocol: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provider: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub port: String,
}

// The catalog emits `null` for unset strings; treat it like a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Graph query results carry the port as whatever type the catalog stored.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(de::Error::custom(format!("unexpected port value: {}", other))),
    }
}
