//! Test helper module
//!
//! Provides mock collaborator implementations and convenient factory
//! functions.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{DomainEditor, EditorContext};
use crate::traits::{DomainListNotifier, DomainTransport};
use crate::types::{ConnectionProbe, ConnectionReport, DomainUpsert, UpsertAck};

// ===== MockTransport =====

pub struct MockTransport {
    /// Response for `create_or_update`; `Err` simulates a transport failure
    upsert_response: RwLock<Result<UpsertAck, String>>,
    /// Response for `test_connection`; `Err` simulates a transport failure
    test_response: RwLock<Result<ConnectionReport, String>>,
    /// Requests received, in order
    pub upsert_calls: RwLock<Vec<DomainUpsert>>,
    /// Probes received, in order
    pub probe_calls: RwLock<Vec<ConnectionProbe>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            upsert_response: RwLock::new(Ok(UpsertAck::accepted())),
            test_response: RwLock::new(Ok(ConnectionReport::all_passed())),
            upsert_calls: RwLock::new(Vec::new()),
            probe_calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_upsert_ack(&self, ack: UpsertAck) {
        *self.upsert_response.write().await = Ok(ack);
    }

    pub async fn set_upsert_error(&self, message: &str) {
        *self.upsert_response.write().await = Err(message.to_string());
    }

    pub async fn set_report(&self, report: ConnectionReport) {
        *self.test_response.write().await = Ok(report);
    }

    pub async fn set_test_error(&self, message: &str) {
        *self.test_response.write().await = Err(message.to_string());
    }
}

#[async_trait]
impl DomainTransport for MockTransport {
    async fn create_or_update(&self, request: &DomainUpsert) -> CoreResult<UpsertAck> {
        self.upsert_calls.write().await.push(request.clone());
        self.upsert_response
            .read()
            .await
            .clone()
            .map_err(CoreError::Transport)
    }

    async fn test_connection(&self, probe: &ConnectionProbe) -> CoreResult<ConnectionReport> {
        self.probe_calls.write().await.push(probe.clone());
        self.test_response
            .read()
            .await
            .clone()
            .map_err(CoreError::Transport)
    }
}

// ===== MockListNotifier =====

pub struct MockListNotifier {
    notifications: RwLock<u32>,
}

impl MockListNotifier {
    pub fn new() -> Self {
        Self {
            notifications: RwLock::new(0),
        }
    }

    /// Number of refresh notifications received
    pub async fn count(&self) -> u32 {
        *self.notifications.read().await
    }
}

#[async_trait]
impl DomainListNotifier for MockListNotifier {
    async fn domain_list_changed(&self) {
        *self.notifications.write().await += 1;
    }
}

// ===== Factory functions =====

/// Create a `DomainEditor` over mock collaborators
pub fn create_test_editor() -> (DomainEditor, Arc<MockTransport>, Arc<MockListNotifier>) {
    let transport = Arc::new(MockTransport::new());
    let notifier = Arc::new(MockListNotifier::new());
    let ctx = Arc::new(EditorContext::new(transport.clone(), notifier.clone()));
    (DomainEditor::new(ctx), transport, notifier)
}

/// Fill every required field so `can_save`/`can_test` hold
pub fn complete_form(editor: &mut DomainEditor) {
    editor.set_name("example.com");
    editor.set_imap_server("imap.example.com");
    editor.set_smtp_server("smtp.example.com");
}
