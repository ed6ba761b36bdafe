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

use crate::cache::{CacheStore, MemoryCacheStore};
use std::sync::Arc;

fn entries(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[tokio::test]
async fn test_new_store_is_empty() {
    let store = MemoryCacheStore::new();

    assert!(store.hash_values("catalogue:fc").await.unwrap().is_empty());
    assert!(store.hash_get("catalogue:fc", "id1").await.unwrap_err().is_not_found());
    assert!(store.get("studies:dsp-studies").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_replace_hash_and_get_field() {
    let store = MemoryCacheStore::new();
    store
        .replace_hash("catalogue:fc", entries(&[("id1", "one"), ("id2", "two")]))
        .await
        .unwrap();

    assert_eq!(store.hash_get("catalogue:fc", "id1").await.unwrap(), "one");
    assert_eq!(store.hash_get("catalogue:fc", "id2").await.unwrap(), "two");
    assert_eq!(store.hash_len("catalogue:fc").await, 2);
}

#[tokio::test]
async fn test_replace_hash_drops_previous_generation() {
    let store = MemoryCacheStore::new();
    store
        .replace_hash("catalogue:fc", entries(&[("id1", "one"), ("id2", "two")]))
        .await
        .unwrap();
    store
        .replace_hash("catalogue:fc", entries(&[("id3", "three")]))
        .await
        .unwrap();

    assert!(store.hash_get("catalogue:fc", "id1").await.unwrap_err().is_not_found());
    assert_eq!(store.hash_values("catalogue:fc").await.unwrap(), vec!["three".to_string()]);
}

#[tokio::test]
async fn test_replace_hash_with_no_entries_clears_namespace() {
    let store = MemoryCacheStore::new();
    store
        .replace_hash("catalogue:fc", entries(&[("id1", "one")]))
        .await
        .unwrap();
    store.replace_hash("catalogue:fc", Vec::new()).await.unwrap();

    assert_eq!(store.hash_len("catalogue:fc").await, 0);
    assert!(store.hash_values("catalogue:fc").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_namespaces_are_isolated() {
    let store = MemoryCacheStore::new();
    store
        .replace_hash("catalogue:fc", entries(&[("id1", "provider")]))
        .await
        .unwrap();
    store
        .replace_hash("catalogue:other", entries(&[("id1", "other")]))
        .await
        .unwrap();

    assert_eq!(store.hash_get("catalogue:fc", "id1").await.unwrap(), "provider");
    assert_eq!(store.hash_get("catalogue:other", "id1").await.unwrap(), "other");
}

#[tokio::test]
async fn test_set_overwrites_value() {
    let store = MemoryCacheStore::new();
    store.set("studies:dsp-studies", "[]").await.unwrap();
    store.set("studies:dsp-studies", "[{}]").await.unwrap();

    assert_eq!(store.get("studies:dsp-studies").await.unwrap(), "[{}]");
}

#[tokio::test]
async fn test_readers_never_observe_partial_generation() {
    let store = Arc::new(MemoryCacheStore::new());
    let generation = |tag: &str| -> Vec<(String, String)> {
        (0..50).map(|i| (format!("id{}", i), tag.to_string())).collect()
    };
    store.replace_hash("catalogue:fc", generation("a")).await.unwrap();

    let writer = {
        let store = store.clone();
        tokio::spawn(async move {
            for i in 0..100 {
                let tag = if i % 2 == 0 { "b" } else { "a" };
                store.replace_hash("catalogue:fc", generation(tag)).await.unwrap();
                tokio::task::yield_now().await;
            }
        })
    };

    for _ in 0..100 {
        let values = store.hash_values("catalogue:fc").await.unwrap();
        assert_eq!(values.len(), 50);
        assert!(values.iter().all(|v| v == &values[0]));
        tokio::task::yield_now().await;
    }

    writer.await.unwrap();
}
