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


use crate::model::{FcProviderInfo, ParticipantInfoWithVp, ProviderInfo};
use log::{info, warn};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Derives the stable provider id: the lowercase hex SHA-256 of the credential subject id.
pub fn provider_id(subject_id: &str) -> String {
    hex::encode(Sha256::digest(subject_id.as_bytes()))
}

/// Joins participants with provider network addresses on the legal name of the participant's first credential.
///
/// Participants without a credential, without a matching address, or whose address lacks a host or protocol are
/// dropped. When several addresses share a legal name the last one wins. The output follows participant order.
pub fn normalise_providers(participants: &[ParticipantInfoWithVp], addresses: &[FcProviderInfo]) -> Vec<ProviderInfo> {
    let by_legal_name: HashMap<&str, &FcProviderInfo> = addresses
        .iter()
        .map(|address| (address.provider.as_str(), address))
        .collect();

    let mut providers = Vec::with_capacity(participants.len());
    for participant in participants {
        let Some(credential) = participant.verifiable_presentation.verifiable_credential.first() else {
            warn!("Participant {} has no verifiable credential, skipping", participant.id);
            continue;
        };
        let subject = &credential.credential_subject;

        let Some(address) = by_legal_name.get(subject.legal_name.as_str()) else {
            info!("Could not find matching provider address for provider {}", subject.legal_name);
            continue;
        };
        if address.host.is_empty() || address.protocol.is_empty() {
            warn!("Provider address for {} has no host or protocol, skipping", subject.legal_name);
            continue;
        }

        providers.push(ProviderInfo {
            id: provider_id(&subject.id),
            name: subject.legal_name.clone(),
            public_key: participant.public_key.clone(),
            protocol_version: String::new(),
            self_description: participant.self_description.clone(),
            verifiable_credential: credential.clone(),
            host: address.host.clone(),
            protocol: address.protocol.clone(),
            provider: address.provider.clone(),
            port: address.port.clone(),
        });
    }
    providers
}
