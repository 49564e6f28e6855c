//! Cross-field convenience rules
//!
//! Pure functions backing the editor's focus auto-fill and security/port
//! synchronization. Kept separate from the editor so each rule is testable
//! on its own.

mod autofill;
mod ports;

pub use autofill::{derive_smtp_host, strip_wildcard_markers};
pub use ports::{imap_port_for_security, smtp_port_for_security};
