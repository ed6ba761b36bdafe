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


pub mod fixed;
pub mod manager;
pub mod model;

pub use fixed::StaticStudyManager;
pub use manager::{DspStudyManager, STUDY_NAMESPACE, StudySynchronizer};

use broker_core::error::BrokerError;
use broker_core::types::{AccessType, Organization, ResearchData, Study};
use model::{ContainedResource, FhirOrganization, ResearchStudy};
use uuid::Uuid;

const PRIMARY_INVESTIGATOR: &str = "primary-investigator";
const COLLECT_INFORMATION: &str = "collect-information";

/// Organizations embedded in the study.
pub fn get_organizations(study: &ResearchStudy) -> Vec<&FhirOrganization> {
    study
        .contained
        .iter()
        .filter_map(|resource| match resource {
            ContainedResource::Organization(organization) => Some(organization),
            _ => None,
        })
        .collect()
}

/// The organization named by the study's primary investigator party, if any.
pub fn find_matching_organization<'a>(
    study: &ResearchStudy,
    organizations: &[&'a FhirOrganization],
) -> Option<&'a FhirOrganization> {
    study
        .associated_party
        .iter()
        .filter(|party| party.role.has_code(PRIMARY_INVESTIGATOR))
        .find_map(|party| organizations.iter().copied().find(|o| o.name == party.name))
}

/// Research data requested by the study: every output of a `collect-information` plan action.
pub fn extract_research_data(study: &ResearchStudy) -> Vec<ResearchData> {
    study
        .contained
        .iter()
        .filter_map(|resource| match resource {
            ContainedResource::PlanDefinition(plan) => Some(plan),
            _ => None,
        })
        .flat_map(|plan| plan.action.iter())
        .filter(|action| action.code.as_ref().is_some_and(|code| code.has_code(COLLECT_INFORMATION)))
        .flat_map(|action| action.output.iter())
        .map(|output| ResearchData {
            name: output.title.clone(),
            access_type: AccessType::Pseudonymized,
            ..Default::default()
        })
        .collect()
}

/// Projects a study document onto the broker's [`Study`].
pub fn convert_study(study: &ResearchStudy) -> Result<Study, BrokerError> {
    let organizations = get_organizations(study);
    let organization = find_matching_organization(study, &organizations).ok_or_else(|| {
        BrokerError::bad_gateway(format!("no matching organization found for study {}", study.title))
    })?;

    Ok(Study {
        id: parse_id(study.id.as_deref(), "study", &study.title)?,
        organization: Organization {
            id: parse_id(organization.id.as_deref(), "organization", &organization.name)?,
            name: organization.name.clone(),
        },
        name: study.title.clone(),
        description: study.description.clone(),
        description_summary: study.description_summary.clone(),
        research_data: extract_research_data(study),
        ..Default::default()
    })
}

fn parse_id(id: Option<&str>, kind: &str, name: &str) -> Result<Uuid, BrokerError> {
    let id = id.ok_or_else(|| BrokerError::bad_gateway(format!("{} {} has no id", kind, name)))?;
    Uuid::parse_str(id).map_err(|e| BrokerError::bad_gateway(format!("{} {} has invalid id {}: {}", kind, name, id, e)))
}
