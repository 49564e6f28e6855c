//! Connection probing shapes for the test-connection operation

use serde::{Deserialize, Serialize};

use super::form::SecurityMode;

/// Settings sent to the connectivity probe.
///
/// Tests server reachability and negotiation only; no credentials are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionProbe {
    pub name: String,
    pub imap_host: String,
    pub imap_port: u16,
    pub imap_security: SecurityMode,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_security: SecurityMode,
    pub smtp_auth: bool,
}

/// Outcome of probing a single server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum ServerCheck {
    /// The server accepted the connection and negotiated successfully
    Passed,
    /// The probe failed; carries the server message when one was produced
    Failed(Option<String>),
}

impl ServerCheck {
    /// Failure with a descriptive message
    #[must_use]
    pub fn failed_with(detail: impl Into<String>) -> Self {
        Self::Failed(Some(detail.into()))
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Descriptive failure text, if the probe produced one
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Failed(Some(detail)) if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}

/// Per-protocol result of one test-connection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionReport {
    pub imap: ServerCheck,
    pub smtp: ServerCheck,
}

impl ConnectionReport {
    /// Report with both protocols passing
    #[must_use]
    pub fn all_passed() -> Self {
        Self {
            imap: ServerCheck::Passed,
            smtp: ServerCheck::Passed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_absent_for_passes_and_empty_text() {
        assert_eq!(ServerCheck::Passed.detail(), None);
        assert_eq!(ServerCheck::Failed(None).detail(), None);
        assert_eq!(ServerCheck::Failed(Some(String::new())).detail(), None);
        assert_eq!(
            ServerCheck::failed_with("auth failed").detail(),
            Some("auth failed")
        );
    }

    #[test]
    fn is_failed_covers_both_failure_shapes() {
        assert!(!ServerCheck::Passed.is_failed());
        assert!(ServerCheck::Failed(None).is_failed());
        assert!(ServerCheck::failed_with("timeout").is_failed());
    }
}
