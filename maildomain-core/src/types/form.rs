//! Form state for a single domain editing session

use serde::{Deserialize, Serialize};

use super::connection::ConnectionProbe;
use super::domain::{DomainRecord, DomainUpsert};

/// Connection encryption scheme for a mail server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityMode {
    /// Plain connection
    #[default]
    None,
    /// Implicit SSL/TLS
    Ssl,
    /// Opportunistic STARTTLS
    StartTls,
}

/// Default ports applied when the form is cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainDefaults {
    /// IMAP default port
    pub imap_port: u16,
    /// SMTP default port
    pub smtp_port: u16,
}

impl Default for DomainDefaults {
    fn default() -> Self {
        Self {
            imap_port: 143,
            smtp_port: 25,
        }
    }
}

/// Coerce a port field to an integer. Invalid or non-numeric text parses to 0.
#[must_use]
pub fn parse_port(text: &str) -> u16 {
    text.trim().parse().unwrap_or(0)
}

/// Mutable form state for one editing session.
///
/// Ports are held as text exactly as typed; use [`parse_port`] wherever a
/// numeric value is compared or transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainForm {
    /// True when editing an existing domain, false when creating a new one
    pub edit: bool,
    /// Domain identifier; empty means unset
    pub name: String,
    pub imap_server: String,
    pub imap_port: String,
    pub imap_security: SecurityMode,
    pub imap_short_login: bool,
    pub smtp_server: String,
    pub smtp_port: String,
    pub smtp_security: SecurityMode,
    pub smtp_short_login: bool,
    pub smtp_auth: bool,
    /// Free-text list of allowed address patterns
    pub whitelist: String,
}

impl Default for DomainForm {
    fn default() -> Self {
        Self::with_defaults(DomainDefaults::default())
    }
}

impl DomainForm {
    /// Empty form carrying the configured default ports
    #[must_use]
    pub fn with_defaults(defaults: DomainDefaults) -> Self {
        Self {
            edit: false,
            name: String::new(),
            imap_server: String::new(),
            imap_port: defaults.imap_port.to_string(),
            imap_security: SecurityMode::None,
            imap_short_login: false,
            smtp_server: String::new(),
            smtp_port: defaults.smtp_port.to_string(),
            smtp_security: SecurityMode::None,
            smtp_short_login: false,
            smtp_auth: true,
            whitelist: String::new(),
        }
    }

    /// Reset every field to its default
    pub fn clear(&mut self, defaults: DomainDefaults) {
        *self = Self::with_defaults(defaults);
    }

    /// Populate from an existing record and switch to edit mode.
    ///
    /// String fields are trimmed on load.
    pub fn load_record(&mut self, record: &DomainRecord) {
        self.edit = true;
        self.name = record.name.trim().to_string();
        self.imap_server = record.inc_host.trim().to_string();
        self.imap_port = record.inc_port.to_string();
        self.imap_security = record.inc_secure;
        self.imap_short_login = record.inc_short_login;
        self.smtp_server = record.out_host.trim().to_string();
        self.smtp_port = record.out_port.to_string();
        self.smtp_security = record.out_secure;
        self.smtp_short_login = record.out_short_login;
        self.smtp_auth = record.out_auth;
        self.whitelist = record.white_list.trim().to_string();
    }

    /// All five required fields are non-empty.
    ///
    /// Port fields count by text, not numeric validity: a non-numeric port
    /// string still makes the form complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.imap_server.is_empty()
            && !self.imap_port.is_empty()
            && !self.smtp_server.is_empty()
            && !self.smtp_port.is_empty()
    }

    /// Popup header for the current mode and name
    #[must_use]
    pub fn header_label(&self) -> String {
        if self.edit {
            format!("Edit Domain \"{}\"", self.name)
        } else if self.name.is_empty() {
            "Add Domain".to_string()
        } else {
            format!("Add Domain \"{}\"", self.name)
        }
    }

    /// Build the create-or-update payload. `create` is the negated edit flag.
    #[must_use]
    pub fn upsert_request(&self) -> DomainUpsert {
        DomainUpsert {
            create: !self.edit,
            name: self.name.clone(),
            imap_host: self.imap_server.clone(),
            imap_port: parse_port(&self.imap_port),
            imap_security: self.imap_security,
            imap_short_login: self.imap_short_login,
            smtp_host: self.smtp_server.clone(),
            smtp_port: parse_port(&self.smtp_port),
            smtp_security: self.smtp_security,
            smtp_short_login: self.smtp_short_login,
            smtp_auth: self.smtp_auth,
            whitelist: self.whitelist.clone(),
        }
    }

    /// Build the connection probe. Credentials are never included.
    #[must_use]
    pub fn connection_probe(&self) -> ConnectionProbe {
        ConnectionProbe {
            name: self.name.clone(),
            imap_host: self.imap_server.clone(),
            imap_port: parse_port(&self.imap_port),
            imap_security: self.imap_security,
            smtp_host: self.smtp_server.clone(),
            smtp_port: parse_port(&self.smtp_port),
            smtp_security: self.smtp_security,
            smtp_auth: self.smtp_auth,
        }
    }
}
