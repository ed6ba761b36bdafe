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
    CredentialSubject, FcProviderInfo, ParticipantInfoWithVp, VerifiableCredential, VerifiablePresentation,
};
use serde_json::json;

/// Self-description string as published by the catalog: a verifiable presentation encoded as JSON text.
pub fn self_description(legal_name: &str, subject_id: &str) -> String {
    json!({
        "@context": ["https://www.w3.org/2018/credentials/v1"],
        "type": ["VerifiablePresentation"],
        "verifiableCredential": [{
            "@context": ["https://www.w3.org/2018/credentials/v1"],
            "type": ["VerifiableCredential"],
            "id": format!("{}#legal-participant", subject_id),
            "issuer": subject_id,
            "issuanceDate": "2024-01-15T10:00:00Z",
            "credentialSubject": {
                "id": subject_id,
                "type": "gx:LegalParticipant",
                "gx:legalName": legal_name,
                "gx:legalAddress": { "gx:addressCountryCode": "DE" }
            }
        }]
    })
    .to_string()
}

pub fn participant(id: &str, legal_name: &str, subject_id: &str) -> ParticipantInfoWithVp {
    let credential = VerifiableCredential {
        id: format!("{}#legal-participant", subject_id),
        credential_subject: CredentialSubject {
            id: subject_id.to_string(),
            legal_name: legal_name.to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    ParticipantInfoWithVp {
        id: id.to_string(),
        name: legal_name.to_string(),
        public_key: format!("{}-participant-key", id),
        self_description: self_description(legal_name, subject_id),
        verifiable_presentation: VerifiablePresentation {
            verifiable_credential: vec![credential],
            ..Default::default()
        },
    }
}

pub fn address(legal_name: &str, host: &str, protocol: &str) -> FcProviderInfo {
    FcProviderInfo {
        host: host.to_string(),
        protocol: protocol.to_string(),
        provider: legal_name.to_string(),
        port: "443".to_string(),
    }
}
