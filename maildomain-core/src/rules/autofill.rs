//! Focus-gain auto-fill rules
//!
//! Fired on a focus-gain transition only. Callers must leave fields the
//! administrator already typed untouched.

use std::sync::LazyLock;

use regex::Regex;

// Wildcard domain markers: "*.", ".*", ".*." or a bare "*".
#[allow(clippy::expect_used)]
static WILDCARD_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.?\*\.?").expect("pattern is valid"));

#[allow(clippy::expect_used)]
static IMAP_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)imap").expect("pattern is valid"));

/// Turn a domain name into an IMAP host candidate by removing every wildcard
/// marker, e.g. `*.example.com` becomes `example.com`.
#[must_use]
pub fn strip_wildcard_markers(name: &str) -> String {
    WILDCARD_MARKER.replace_all(name, "").into_owned()
}

/// Derive an SMTP host from an IMAP host by swapping the protocol token,
/// case-insensitively: `imap.example.com` becomes `smtp.example.com`.
#[must_use]
pub fn derive_smtp_host(imap_host: &str) -> String {
    IMAP_TOKEN.replace_all(imap_host, "smtp").into_owned()
}
