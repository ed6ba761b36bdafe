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

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use bon::Builder;
use log::{debug, error, info};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Default delay between two synchronization passes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// A unit of periodic synchronization work, e.g. pulling the federated catalog into the cache.
#[async_trait]
pub trait SyncTask: Send + Sync {
    /// Human readable name used in log output.
    fn name(&self) -> &str;

    /// Runs one complete pass. A failed pass leaves the cache untouched.
    async fn run_pass(&self) -> Result<(), SyncError>;
}

/// Errors that can abort a synchronization pass.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Invalid upstream data: {0}")]
    InvalidData(String),

    #[error("Persist failed: {0}")]
    Persist(String),
}

impl SyncError {
    pub fn fetch(message: impl Into<String>) -> Self {
        SyncError::Fetch(message.into())
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        SyncError::InvalidData(message.into())
    }

    pub fn persist(message: impl Into<String>) -> Self {
        SyncError::Persist(message.into())
    }
}

/// Handle for managing a running poller.
///
/// Dropping the handle signals the poller to stop; a pass already in flight is allowed to finish.
pub struct PollerHandle {
    shutdown_tx: watch::Sender<bool>,
    task_handle: Option<JoinHandle<()>>,
}

impl PollerHandle {
    fn new(shutdown_tx: watch::Sender<bool>, task_handle: JoinHandle<()>) -> Self {
        Self {
            shutdown_tx,
            task_handle: Some(task_handle),
        }
    }

    /// Signals the poller to stop and waits until the loop has exited.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(handle) = self.task_handle.take() {
            if let Err(e) = handle.await {
                error!("Poller task terminated abnormally: {}", e);
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task_handle.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}

/// Runs a [`SyncTask`] immediately and then once per interval until shut down.
///
/// Pass failures, including panics, are logged and never stop the loop. Passes never overlap: if a pass outlasts
/// the interval, the next tick is delayed rather than fired in a burst.
#[derive(Builder)]
pub struct Poller {
    task: Arc<dyn SyncTask>,
    #[builder(default = DEFAULT_POLL_INTERVAL)]
    interval: Duration,
}

impl Poller {
    /// Starts the poll loop in a background task.
    pub fn start(self) -> PollerHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task_handle = tokio::spawn(self.run(shutdown_rx));
        PollerHandle::new(shutdown_tx, task_handle)
    }

    /// Starts the poll loop bound to an externally owned shutdown signal.
    pub fn start_with_shutdown(self, shutdown_rx: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown_rx))
    }

    /// Main poll loop. Returns once shutdown is signalled or the sender is dropped.
    pub async fn run(self, mut shutdown_rx: watch::Receiver<bool>) {
        let period = self.interval.max(Duration::from_millis(1));
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("Starting {} with interval {:?}", self.task.name(), period);

        loop {
            if *shutdown_rx.borrow() {
                break;
            }

            tokio::select! {
                biased;
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.run_once().await;
                }
            }
        }

        info!("Stopped {}", self.task.name());
    }

    /// Executes a single pass and logs its outcome.
    ///
    /// The pass runs in its own task and is awaited, so a panicking pass is reported and the loop keeps going.
    pub async fn run_once(&self) {
        debug!("Running {}", self.task.name());
        let task = self.task.clone();
        match tokio::spawn(async move { task.run_pass().await }).await {
            Ok(Ok(())) => debug!("{} pass completed", self.task.name()),
            Ok(Err(e)) => error!("{} pass failed: {}", self.task.name(), e),
            Err(e) => error!("{} pass aborted: {}", self.task.name(), e),
        }
    }
}
