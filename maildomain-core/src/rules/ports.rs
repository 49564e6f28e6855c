//! Security-mode to well-known-port snapping
//!
//! When the administrator changes a security mode, a port that is a
//! recognized default of the previous scheme snaps to the default of the new
//! one. A custom port never changes.

use crate::types::SecurityMode;

/// Replacement IMAP port after a security-mode change, if the current port is
/// a recognized default. Returns `None` when the port must stay as typed.
#[must_use]
pub fn imap_port_for_security(mode: SecurityMode, current: u16) -> Option<u16> {
    match mode {
        SecurityMode::None if current == 993 => Some(143),
        SecurityMode::Ssl if current == 143 => Some(993),
        _ => None,
    }
}

/// Replacement SMTP port after a security-mode change, if the current port is
/// a recognized default. Returns `None` when the port must stay as typed.
#[must_use]
pub fn smtp_port_for_security(mode: SecurityMode, current: u16) -> Option<u16> {
    match mode {
        SecurityMode::None if matches!(current, 465 | 587) => Some(25),
        SecurityMode::Ssl if matches!(current, 25 | 587) => Some(465),
        SecurityMode::StartTls if matches!(current, 25 | 465) => Some(587),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imap_snaps_between_plain_and_ssl_defaults() {
        assert_eq!(imap_port_for_security(SecurityMode::None, 993), Some(143));
        assert_eq!(imap_port_for_security(SecurityMode::Ssl, 143), Some(993));
    }

    #[test]
    fn imap_starttls_never_snaps() {
        assert_eq!(imap_port_for_security(SecurityMode::StartTls, 143), None);
        assert_eq!(imap_port_for_security(SecurityMode::StartTls, 993), None);
    }

    #[test]
    fn imap_custom_ports_are_kept() {
        assert_eq!(imap_port_for_security(SecurityMode::None, 1430), None);
        assert_eq!(imap_port_for_security(SecurityMode::Ssl, 0), None);
    }

    #[test]
    fn smtp_snaps_across_all_three_defaults() {
        assert_eq!(smtp_port_for_security(SecurityMode::None, 465), Some(25));
        assert_eq!(smtp_port_for_security(SecurityMode::None, 587), Some(25));
        assert_eq!(smtp_port_for_security(SecurityMode::Ssl, 25), Some(465));
        assert_eq!(smtp_port_for_security(SecurityMode::Ssl, 587), Some(465));
        assert_eq!(smtp_port_for_security(SecurityMode::StartTls, 25), Some(587));
        assert_eq!(smtp_port_for_security(SecurityMode::StartTls, 465), Some(587));
    }

    #[test]
    fn smtp_custom_ports_are_kept() {
        assert_eq!(smtp_port_for_security(SecurityMode::Ssl, 2525), None);
        assert_eq!(smtp_port_for_security(SecurityMode::None, 25), None);
        assert_eq!(smtp_port_for_security(SecurityMode::StartTls, 587), None);
    }
}
