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


use crate::rpc::{AuthenticationType, Dataset, GetProviderDatasetDownloadInformationResponse, PublishInfo};
use broker_core::types::Provider;
use serde_json::{Value, json};

pub const PROVIDER_ID: &str = "400bf287241973f09596d61bcfafc6d126e0738e10d86187754ca48efcf906fa";
pub const PROVIDER_URL: &str = "https://acme.example";
pub const STUDY_ID: &str = "842b90d4-4007-4f67-87ae-301317d728b6";
pub const ORGANIZATION_ID: &str = "bdcfb2c3-d787-4915-a990-91559c1685b2";

pub fn provider() -> Provider {
    Provider {
        id: PROVIDER_ID.to_string(),
        name: "Acme".to_string(),
        provider_url: PROVIDER_URL.to_string(),
        ..Default::default()
    }
}

pub fn dataset(id: &str, title: &str, issued: Option<i64>) -> Dataset {
    Dataset {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        issued: issued.map(|seconds| prost_types::Timestamp { seconds, nanos: 0 }),
        media_type: "application/json".to_string(),
    }
}

pub fn download_information(
    url: &str,
    authentication_type: AuthenticationType,
    transfer_id: &str,
) -> GetProviderDatasetDownloadInformationResponse {
    GetProviderDatasetDownloadInformationResponse {
        publish_info: Some(PublishInfo {
            url: url.to_string(),
            authentication_type: authentication_type as i32,
            username: "alice".to_string(),
            password: "s3cret".to_string(),
        }),
        transfer_id: transfer_id.to_string(),
    }
}

/// A study document with a primary investigator, its organization and one collecting plan action.
pub fn research_study() -> Value {
    json!({
        "resourceType": "ResearchStudy",
        "id": STUDY_ID,
        "title": "Example Study",
        "description": "This is an example study and this is the longer description..",
        "descriptionSummary": "This is an example study.",
        "associatedParty": [
            {
                "name": "Sponsor Inc",
                "role": { "coding": [{ "code": "sponsor" }] }
            },
            {
                "name": "Example Research Institute",
                "role": { "coding": [{ "system": "http://hl7.org/fhir/research-study-party-role", "code": "primary-investigator" }] }
            }
        ],
        "contained": [
            { "resourceType": "Organization", "id": "6f5a3c1e-0f7d-4b39-9f0b-2f0d3b1f6a11", "name": "Sponsor Inc" },
            { "resourceType": "Organization", "id": ORGANIZATION_ID, "name": "Example Research Institute" },
            {
                "resourceType": "PlanDefinition",
                "id": "plan",
                "action": [
                    {
                        "title": "Gather vitals",
                        "code": { "coding": [{ "code": "collect-information" }] },
                        "output": [{ "title": "Heart rate" }, { "title": "Caffeine level" }]
                    },
                    {
                        "title": "Send report",
                        "code": { "coding": [{ "code": "notify" }] },
                        "output": [{ "title": "Report" }]
                    }
                ]
            },
            { "resourceType": "Group", "id": "cohort", "quantity": 12 }
        ]
    })
}
