//! Domain editing service
//!
//! State machine behind the add/edit-domain popup: form state, derived
//! predicates, focus and security-change side effects, and the asynchronous
//! save and test-connection workflows.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::rules::{
    derive_smtp_host, imap_port_for_security, smtp_port_for_security, strip_wildcard_markers,
};
use crate::services::EditorContext;
use crate::types::{parse_port, DomainForm, DomainRecord, SecurityMode, UpsertErrorCode};

/// Classified result of a save attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Domain persisted; the list was notified and the session closed
    Saved,
    /// The remote declined the save because the name is taken
    AlreadyExists,
    /// Transport failure or unrecognized response
    Failed,
}

/// Ephemeral per-session flags. Reset on every open, discarded on close.
#[derive(Debug, Default)]
struct SessionState {
    saving: bool,
    saving_error: String,
    testing: bool,
    testing_done: bool,
    imap_error: bool,
    imap_error_detail: String,
    smtp_error: bool,
    smtp_error_detail: String,
    whitelist_panel: bool,
    name_focused: bool,
    imap_server_focused: bool,
    smtp_server_focused: bool,
}

/// Interactive editing workflow for a single domain configuration record.
///
/// One instance lives for exactly one open/close cycle of the popup. All
/// mutation goes through methods so the focus and security-change rules
/// cannot be bypassed.
pub struct DomainEditor {
    ctx: Arc<EditorContext>,
    form: DomainForm,
    session: SessionState,
}

impl DomainEditor {
    /// Create an editor instance
    #[must_use]
    pub fn new(ctx: Arc<EditorContext>) -> Self {
        let form = DomainForm::with_defaults(ctx.defaults);
        Self {
            ctx,
            form,
            session: SessionState::default(),
        }
    }

    // ===== Session lifecycle =====

    /// Open the editing session.
    ///
    /// Resets all session flags and the form, then populates the form and
    /// enters edit mode when an existing record is supplied.
    pub fn open(&mut self, record: Option<&DomainRecord>) {
        self.session = SessionState::default();
        self.form.clear(self.ctx.defaults);
        if let Some(record) = record {
            self.form.load_record(record);
            log::info!("Editing domain: {}", self.form.name);
        }
    }

    /// Close hook: force the whitelist panel shut. The caller discards the
    /// session afterwards.
    pub fn close(&mut self) {
        self.session.whitelist_panel = false;
    }

    /// Ask for input focus on the name field while it is still empty.
    ///
    /// Returns whether focus was requested.
    pub fn request_initial_focus(&mut self) -> bool {
        if self.form.name.is_empty() {
            self.session.name_focused = true;
            return true;
        }
        false
    }

    // ===== Derived predicates =====

    /// All five required fields are non-empty
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.form.is_complete()
    }

    /// The save command is available
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.session.saving && self.form.is_complete()
    }

    /// The test-connection command is available
    #[must_use]
    pub fn can_test(&self) -> bool {
        !self.session.testing && self.form.is_complete()
    }

    /// Popup header for the current mode and name
    #[must_use]
    pub fn header_label(&self) -> String {
        self.form.header_label()
    }

    // ===== Field mutation =====

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_imap_server(&mut self, host: impl Into<String>) {
        self.form.imap_server = host.into();
    }

    pub fn set_imap_port(&mut self, port: impl Into<String>) {
        self.form.imap_port = port.into();
    }

    pub fn set_imap_short_login(&mut self, short_login: bool) {
        self.form.imap_short_login = short_login;
    }

    pub fn set_smtp_server(&mut self, host: impl Into<String>) {
        self.form.smtp_server = host.into();
    }

    pub fn set_smtp_port(&mut self, port: impl Into<String>) {
        self.form.smtp_port = port.into();
    }

    pub fn set_smtp_short_login(&mut self, short_login: bool) {
        self.form.smtp_short_login = short_login;
    }

    pub fn set_smtp_auth(&mut self, auth: bool) {
        self.form.smtp_auth = auth;
    }

    pub fn set_whitelist(&mut self, whitelist: impl Into<String>) {
        self.form.whitelist = whitelist.into();
    }

    /// Change the IMAP security mode, snapping a recognized default port to
    /// the new scheme.
    pub fn set_imap_security(&mut self, mode: SecurityMode) {
        if self.form.imap_security == mode {
            return;
        }
        self.form.imap_security = mode;
        if let Some(port) = imap_port_for_security(mode, parse_port(&self.form.imap_port)) {
            self.form.imap_port = port.to_string();
        }
    }

    /// Change the SMTP security mode, snapping a recognized default port to
    /// the new scheme.
    pub fn set_smtp_security(&mut self, mode: SecurityMode) {
        if self.form.smtp_security == mode {
            return;
        }
        self.form.smtp_security = mode;
        if let Some(port) = smtp_port_for_security(mode, parse_port(&self.form.smtp_port)) {
            self.form.smtp_port = port.to_string();
        }
    }

    // ===== Focus transitions =====

    /// Record a focus change on the name field
    pub fn set_name_focus(&mut self, focused: bool) {
        self.session.name_focused = focused;
    }

    /// Record a focus change on the IMAP server field.
    ///
    /// On the gaining edge, pre-fills the host from the domain name (with
    /// wildcard markers stripped) while the field is still empty.
    pub fn set_imap_server_focus(&mut self, focused: bool) {
        let gained = focused && !self.session.imap_server_focused;
        self.session.imap_server_focused = focused;
        if gained && !self.form.name.is_empty() && self.form.imap_server.is_empty() {
            self.form.imap_server = strip_wildcard_markers(&self.form.name);
        }
    }

    /// Record a focus change on the SMTP server field.
    ///
    /// On the gaining edge, derives the host from the IMAP server while the
    /// field is still empty.
    pub fn set_smtp_server_focus(&mut self, focused: bool) {
        let gained = focused && !self.session.smtp_server_focused;
        self.session.smtp_server_focused = focused;
        if gained && !self.form.imap_server.is_empty() && self.form.smtp_server.is_empty() {
            self.form.smtp_server = derive_smtp_host(&self.form.imap_server);
        }
    }

    // ===== Whitelist panel =====

    /// Flip the whitelist panel visibility
    pub fn toggle_whitelist_panel(&mut self) {
        self.session.whitelist_panel = !self.session.whitelist_panel;
    }

    // ===== Async workflows =====

    /// Persist the form through the transport.
    ///
    /// Rejected with [`CoreError::SaveInFlight`] or [`CoreError::Incomplete`]
    /// when the precondition fails. Remote failures never propagate: they are
    /// classified into the session error message and the returned outcome.
    pub async fn save(&mut self) -> CoreResult<SaveOutcome> {
        if self.session.saving {
            return Err(CoreError::SaveInFlight);
        }
        if !self.form.is_complete() {
            return Err(CoreError::Incomplete);
        }

        self.session.saving = true;
        self.session.saving_error.clear();

        let request = self.form.upsert_request();
        log::info!("Saving domain: {}", request.name);
        let response = self.ctx.transport.create_or_update(&request).await;
        self.session.saving = false;

        match response {
            Ok(ack) if ack.result => {
                self.ctx.list_notifier.domain_list_changed().await;
                self.close();
                log::info!("Domain saved: {}", request.name);
                Ok(SaveOutcome::Saved)
            }
            Ok(ack) => {
                if ack.error_code == Some(UpsertErrorCode::DomainAlreadyExists) {
                    self.session.saving_error = "Domain already exists".to_string();
                    log::warn!("Domain already exists: {}", request.name);
                    Ok(SaveOutcome::AlreadyExists)
                } else {
                    self.session.saving_error = "Unknown error".to_string();
                    log::warn!("Unrecognized save response for domain: {}", request.name);
                    Ok(SaveOutcome::Failed)
                }
            }
            Err(e) => {
                self.session.saving_error = "Unknown error".to_string();
                log::error!("Failed to save domain {}: {e}", request.name);
                Ok(SaveOutcome::Failed)
            }
        }
    }

    /// Probe connectivity for the current settings.
    ///
    /// Rejected with [`CoreError::TestInFlight`] or [`CoreError::Incomplete`]
    /// when the precondition fails. The per-protocol results land in the
    /// session flags; a transport failure marks both protocols failed with no
    /// detail.
    pub async fn test_connection(&mut self) -> CoreResult<()> {
        if self.session.testing {
            return Err(CoreError::TestInFlight);
        }
        if !self.form.is_complete() {
            return Err(CoreError::Incomplete);
        }

        self.session.whitelist_panel = false;
        self.session.testing_done = false;
        self.set_imap_error(false);
        self.set_smtp_error(false);
        self.session.testing = true;

        let probe = self.form.connection_probe();
        log::info!("Testing connection for domain: {}", probe.name);
        let response = self.ctx.transport.test_connection(&probe).await;
        self.session.testing = false;

        match response {
            Ok(report) => {
                self.session.testing_done = true;

                self.set_imap_error(report.imap.is_failed());
                if let Some(detail) = report.imap.detail() {
                    self.session.imap_error_detail = detail.to_string();
                }

                self.set_smtp_error(report.smtp.is_failed());
                if let Some(detail) = report.smtp.detail() {
                    self.session.smtp_error_detail = detail.to_string();
                }

                if self.session.imap_error || self.session.smtp_error {
                    log::warn!(
                        "Connection test reported failures for {} (imap: {}, smtp: {})",
                        probe.name,
                        self.session.imap_error,
                        self.session.smtp_error
                    );
                }
            }
            Err(e) => {
                self.set_imap_error(true);
                self.set_smtp_error(true);
                log::error!("Connection test failed for domain {}: {e}", probe.name);
            }
        }

        Ok(())
    }

    // ===== State access =====

    /// Current form contents
    #[must_use]
    pub fn form(&self) -> &DomainForm {
        &self.form
    }

    #[must_use]
    pub fn saving(&self) -> bool {
        self.session.saving
    }

    /// User-readable save failure message, empty when the last save did not
    /// fail
    #[must_use]
    pub fn saving_error(&self) -> &str {
        &self.session.saving_error
    }

    #[must_use]
    pub fn testing(&self) -> bool {
        self.session.testing
    }

    /// A test run completed and produced a per-protocol report
    #[must_use]
    pub fn testing_done(&self) -> bool {
        self.session.testing_done
    }

    #[must_use]
    pub fn imap_test_failed(&self) -> bool {
        self.session.imap_error
    }

    /// Non-empty only while `imap_test_failed` is true
    #[must_use]
    pub fn imap_test_detail(&self) -> &str {
        &self.session.imap_error_detail
    }

    #[must_use]
    pub fn smtp_test_failed(&self) -> bool {
        self.session.smtp_error
    }

    /// Non-empty only while `smtp_test_failed` is true
    #[must_use]
    pub fn smtp_test_detail(&self) -> &str {
        &self.session.smtp_error_detail
    }

    #[must_use]
    pub fn whitelist_panel_visible(&self) -> bool {
        self.session.whitelist_panel
    }

    #[must_use]
    pub fn name_focus_requested(&self) -> bool {
        self.session.name_focused
    }

    // Clearing an error flag clears its detail text.
    fn set_imap_error(&mut self, failed: bool) {
        self.session.imap_error = failed;
        if !failed {
            self.session.imap_error_detail.clear();
        }
    }

    fn set_smtp_error(&mut self, failed: bool) {
        self.session.smtp_error = failed;
        if !failed {
            self.session.smtp_error_detail.clear();
        }
    }
}
