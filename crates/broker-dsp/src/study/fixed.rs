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


use async_trait::async_trait;
use broker_core::api::StudyLister;
use broker_core::error::BrokerError;
use broker_core::types::{AccessType, Organization, Provider, ProviderFile, ResearchData, Study};
use uuid::{Uuid, uuid};

const EXAMPLE_STUDY_ID: Uuid = uuid!("842b90d4-4007-4f67-87ae-301317d728b6");
const ANOTHER_STUDY_ID: Uuid = uuid!("333f20fb-c323-46fa-bed8-1656bb2ef613");

/// Study lister returning fixed example studies. Intended for local development.
#[derive(Debug, Default, Clone)]
pub struct StaticStudyManager;

impl StaticStudyManager {
    pub fn new() -> Self {
        Self
    }

    fn studies() -> Vec<Study> {
        vec![
            Study {
                id: EXAMPLE_STUDY_ID,
                organization: Organization {
                    id: uuid!("bdcfb2c3-d787-4915-a990-91559c1685b2"),
                    name: "Example Research Institute".to_string(),
                },
                name: "Example Study".to_string(),
                description: "This is an example study and this is the longer description..".to_string(),
                description_summary: "This is an example study.".to_string(),
                study_uri: "https://researchinstitute.edu/ExampleStudy".to_string(),
                study_start: 1706742000000,
                study_end: 1717192800000,
                research_data: vec![
                    research_data(
                        "Caffeine level",
                        "The level of caffeine in the blood of the participants.",
                        "C8H10N402",
                    ),
                    research_data("Heart rate", "The heart rate of the participants.", "STRSS180"),
                ],
            },
            Study {
                id: ANOTHER_STUDY_ID,
                organization: Organization {
                    id: uuid!("4be32995-11f7-4264-b47d-048fbd078e0b"),
                    name: "Another Research Institute".to_string(),
                },
                name: "Another study".to_string(),
                description: "Different study".to_string(),
                description_summary: "This is a completely different study than the other one.".to_string(),
                study_uri: "https://researchinstitute.edu/AnotherStudy".to_string(),
                study_start: 1709593200000,
                study_end: 1733353200000,
                research_data: vec![
                    research_data("Height", "How tall the person is.", "TALL210"),
                    research_data("Vision", "How good the person can see.", "HINDSIGHT2020"),
                ],
            },
        ]
    }

    fn study_files() -> Vec<ProviderFile> {
        let starbucks = Provider {
            id: "f4d55ac8-e0b6-47c0-81e6-0920594a858f".to_string(),
            name: "Starbucks".to_string(),
            description: "The local caffeine provider.".to_string(),
            logo_uri: "https://logo.link/maybe.jpg".to_string(),
            contact_information: "We're at the corner serving expensive 'coffee".to_string(),
            ..Default::default()
        };
        let pizza_hut = Provider {
            id: "290d34d7-dc03-4ec5-a052-65f685856350".to_string(),
            name: "Pizza Hut".to_string(),
            description: "The local pizza provider.".to_string(),
            logo_uri: "https://logo.link/maybe.jpg".to_string(),
            contact_information: "We're easy to find, just google it".to_string(),
            ..Default::default()
        };

        vec![
            study_file(
                "842b90d4-4007-4f67-87ae-301317d728b6",
                "caffeine_levels.json",
                "The level of caffeine in the blood of the patient.",
                1706742000000,
                starbucks.clone(),
            ),
            study_file(
                "159ef473-3afd-40a4-a657-77b401dee68e",
                "heart_rate.json",
                "The heart rate of the patient.",
                1706742000000,
                starbucks,
            ),
            study_file(
                "333f20fb-c323-46fa-bed8-1656bb2ef613",
                "colesterol_levels.json",
                "The colesterol levels of the patient.",
                1709593200000,
                pizza_hut,
            ),
        ]
    }
}

fn research_data(name: &str, description: &str, data_type: &str) -> ResearchData {
    ResearchData {
        name: name.to_string(),
        description: description.to_string(),
        data_type: data_type.to_string(),
        access_type: AccessType::Anonymized,
    }
}

fn study_file(id: &str, name: &str, description: &str, created_at: i64, provider: Provider) -> ProviderFile {
    ProviderFile {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        created_at,
        mime_type: "application/json".to_string(),
        size: 1024,
        provider,
    }
}

#[async_trait]
impl StudyLister for StaticStudyManager {
    async fn list_studies(&self) -> Result<Vec<Study>, BrokerError> {
        Ok(Self::studies())
    }

    async fn get_study(&self, study_id: Uuid) -> Result<Study, BrokerError> {
        Self::studies()
            .into_iter()
            .find(|study| study.id == study_id)
            .ok_or_else(|| BrokerError::not_found(format!("study {} not found", study_id)))
    }

    async fn list_study_files(&self, _study_id: Uuid) -> Result<Vec<ProviderFile>, BrokerError> {
        Ok(Self::study_files())
    }
}
