//! Domain record and create-or-update shapes

use serde::{Deserialize, Serialize};

use super::form::SecurityMode;

/// Stored domain configuration, as supplied when opening the editor on an
/// existing domain.
///
/// Field names follow the admin API wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainRecord {
    /// Domain identifier
    pub name: String,
    /// Incoming (IMAP) server host
    pub inc_host: String,
    /// Incoming (IMAP) server port
    pub inc_port: u16,
    /// Incoming (IMAP) security mode
    pub inc_secure: SecurityMode,
    /// Authenticate to IMAP with the local part only
    pub inc_short_login: bool,
    /// Outgoing (SMTP) server host
    pub out_host: String,
    /// Outgoing (SMTP) server port
    pub out_port: u16,
    /// Outgoing (SMTP) security mode
    pub out_secure: SecurityMode,
    /// Authenticate to SMTP with the local part only
    pub out_short_login: bool,
    /// Whether SMTP requires authentication
    pub out_auth: bool,
    /// Free-text list of allowed address patterns
    pub white_list: String,
}

/// Create-or-update request payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainUpsert {
    /// True when creating a new domain, false when updating an existing one
    pub create: bool,
    pub name: String,
    pub imap_host: String,
    pub imap_port: u16,
    pub imap_security: SecurityMode,
    pub imap_short_login: bool,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_security: SecurityMode,
    pub smtp_short_login: bool,
    pub smtp_auth: bool,
    pub whitelist: String,
}

/// Error code carried by a negative create-or-update acknowledgment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpsertErrorCode {
    /// A domain with the same name already exists
    DomainAlreadyExists,
    /// Any other code the remote may report
    #[serde(other)]
    Unknown,
}

/// Acknowledgment of a create-or-update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsertAck {
    /// True when the domain was persisted
    pub result: bool,
    /// Set when `result` is false and the remote classified the rejection
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_code: Option<UpsertErrorCode>,
}

impl UpsertAck {
    /// Positive acknowledgment
    #[must_use]
    pub fn accepted() -> Self {
        Self {
            result: true,
            error_code: None,
        }
    }

    /// Negative acknowledgment with a classification code
    #[must_use]
    pub fn rejected(code: UpsertErrorCode) -> Self {
        Self {
            result: false,
            error_code: Some(code),
        }
    }
}
