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


use crate::rpc::{AuthenticationType, GetProviderCatalogueResponse};
use crate::study::{STUDY_NAMESPACE, StudySynchronizer};
use crate::tests::fixtures::{dataset, download_information, research_study};
use crate::tests::mocks::MockDspClient;
use broker_core::cache::{CacheStore, MemoryCacheStore};
use broker_core::poller::{Poller, SyncError, SyncTask};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tonic::Status;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CATALOG_URI: &str = "https://studies.example";

fn synchronizer(dsp: MockDspClient, cache: Arc<MemoryCacheStore>) -> StudySynchronizer {
    StudySynchronizer::builder()
        .dsp(Arc::new(dsp))
        .cache(cache)
        .study_catalog_uri(CATALOG_URI)
        .build()
}

fn single_dataset_client(url: String) -> MockDspClient {
    let mut dsp = MockDspClient::new();
    dsp.expect_get_provider_catalogue()
        .withf(|request| request.provider_uri == CATALOG_URI)
        .once()
        .returning(|_| {
            Ok(GetProviderCatalogueResponse {
                datasets: vec![dataset("studies", "studies.json", None)],
            })
        });
    dsp.expect_get_provider_dataset_download_information()
        .withf(|request| request.provider_url == CATALOG_URI && request.dataset_id == "studies")
        .once()
        .returning(move |_| Ok(download_information(&url, AuthenticationType::Bearer, "transfer-7")));
    dsp.expect_signal_transfer_complete()
        .withf(|request| request.transfer_id == "transfer-7")
        .once()
        .returning(|_| Ok(Default::default()));
    dsp
}

async fn serve(body: String) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/studies.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_pass_stores_study_catalogue() {
    let body = json!([research_study()]).to_string();
    let server = serve(body.clone()).await;
    let cache = Arc::new(MemoryCacheStore::new());

    let synchronizer = synchronizer(
        single_dataset_client(format!("{}/studies.json", server.uri())),
        cache.clone(),
    );
    synchronizer.run_pass().await.unwrap();

    assert_eq!(cache.get(STUDY_NAMESPACE).await.unwrap(), body);
}

#[tokio::test]
async fn test_catalogue_must_hold_exactly_one_dataset() {
    let mut dsp = MockDspClient::new();
    dsp.expect_get_provider_catalogue().returning(|_| {
        Ok(GetProviderCatalogueResponse {
            datasets: vec![dataset("a", "a.json", None), dataset("b", "b.json", None)],
        })
    });
    dsp.expect_get_provider_dataset_download_information().never();
    let cache = Arc::new(MemoryCacheStore::new());

    let result = synchronizer(dsp, cache.clone()).run_pass().await;

    assert!(matches!(result, Err(SyncError::InvalidData(ref m)) if m.contains("2 items")));
    assert!(cache.get(STUDY_NAMESPACE).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_empty_catalogue_is_rejected() {
    let mut dsp = MockDspClient::new();
    dsp.expect_get_provider_catalogue()
        .returning(|_| Ok(GetProviderCatalogueResponse { datasets: vec![] }));

    let result = synchronizer(dsp, Arc::new(MemoryCacheStore::new())).run_pass().await;

    assert!(matches!(result, Err(SyncError::InvalidData(_))));
}

#[tokio::test]
async fn test_catalogue_failure_is_fetch_error() {
    let mut dsp = MockDspClient::new();
    dsp.expect_get_provider_catalogue()
        .returning(|_| Err(Status::unavailable("peer down")));

    let result = synchronizer(dsp, Arc::new(MemoryCacheStore::new())).run_pass().await;

    assert!(matches!(result, Err(SyncError::Fetch(_))));
}

#[tokio::test]
async fn test_invalid_catalogue_keeps_previous_generation() {
    let server = serve("<html>maintenance</html>".to_string()).await;
    let cache = Arc::new(MemoryCacheStore::new());
    cache.set(STUDY_NAMESPACE, "[]").await.unwrap();

    let synchronizer = synchronizer(
        single_dataset_client(format!("{}/studies.json", server.uri())),
        cache.clone(),
    );
    let result = synchronizer.run_pass().await;

    assert!(matches!(result, Err(SyncError::InvalidData(_))));
    assert_eq!(cache.get(STUDY_NAMESPACE).await.unwrap(), "[]");
}

#[tokio::test]
async fn test_failed_download_still_signals_completion() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let synchronizer = synchronizer(
        single_dataset_client(format!("{}/studies.json", server.uri())),
        Arc::new(MemoryCacheStore::new()),
    );

    assert!(matches!(synchronizer.run_pass().await, Err(SyncError::Fetch(_))));
}

/// Announces an authentication type outside the known set and counts catalogue requests and completion signals.
fn unknown_auth_client(passes: Arc<AtomicUsize>, signals: Arc<AtomicUsize>) -> MockDspClient {
    let mut dsp = MockDspClient::new();
    dsp.expect_get_provider_catalogue().returning(move |_| {
        passes.fetch_add(1, Ordering::SeqCst);
        Ok(GetProviderCatalogueResponse {
            datasets: vec![dataset("studies", "studies.json", None)],
        })
    });
    dsp.expect_get_provider_dataset_download_information().returning(|_| {
        let mut download =
            download_information("http://127.0.0.1:9/studies.json", AuthenticationType::Basic, "transfer-9");
        if let Some(publish_info) = download.publish_info.as_mut() {
            publish_info.authentication_type = 9;
        }
        Ok(download)
    });
    dsp.expect_signal_transfer_complete()
        .withf(|request| request.transfer_id == "transfer-9")
        .returning(move |_| {
            signals.fetch_add(1, Ordering::SeqCst);
            Ok(Default::default())
        });
    dsp
}

#[tokio::test]
async fn test_unknown_authentication_type_is_invalid_data_and_signals() {
    let passes = Arc::new(AtomicUsize::new(0));
    let signals = Arc::new(AtomicUsize::new(0));
    let cache = Arc::new(MemoryCacheStore::new());

    let result = synchronizer(unknown_auth_client(passes, signals.clone()), cache.clone())
        .run_pass()
        .await;

    assert!(matches!(result, Err(SyncError::InvalidData(ref m)) if m.contains("authentication type: 9")));
    assert_eq!(signals.load(Ordering::SeqCst), 1);
    assert!(cache.get(STUDY_NAMESPACE).await.unwrap_err().is_not_found());
}

#[tokio::test(start_paused = true)]
async fn test_poller_keeps_running_after_unknown_authentication_type() {
    let passes = Arc::new(AtomicUsize::new(0));
    let signals = Arc::new(AtomicUsize::new(0));
    let dsp = unknown_auth_client(passes.clone(), signals.clone());
    let handle = Poller::builder()
        .task(Arc::new(synchronizer(dsp, Arc::new(MemoryCacheStore::new()))))
        .interval(Duration::from_secs(60))
        .build()
        .start();

    tokio::time::sleep(Duration::from_secs(130)).await;
    assert_eq!(passes.load(Ordering::SeqCst), 3);
    assert_eq!(signals.load(Ordering::SeqCst), 3);
    assert!(!handle.is_finished());

    handle.shutdown().await;
}
