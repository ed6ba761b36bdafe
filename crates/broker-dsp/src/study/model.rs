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


//! The subset of FHIR `ResearchStudy` documents read from the study catalogue.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResearchStudy {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub description_summary: String,
    pub associated_party: Vec<AssociatedParty>,
    pub contained: Vec<ContainedResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssociatedParty {
    pub name: String,
    pub role: CodeableConcept,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeableConcept {
    pub coding: Vec<Coding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CodeableConcept {
    pub fn has_code(&self, code: &str) -> bool {
        self.coding.iter().any(|c| c.code == code)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coding {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub system: String,
    pub code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display: String,
}

/// Resources embedded in a study, discriminated by `resourceType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resourceType")]
pub enum ContainedResource {
    Organization(FhirOrganization),
    PlanDefinition(PlanDefinition),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FhirOrganization {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanDefinition {
    pub id: Option<String>,
    pub action: Vec<PlanAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanAction {
    pub title: Option<String>,
    pub code: Option<CodeableConcept>,
    pub output: Vec<ActionOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionOutput {
    pub title: String,
}
