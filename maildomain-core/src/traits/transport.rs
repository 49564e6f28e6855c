//! Remote-call abstraction for domain persistence and probing

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{ConnectionProbe, ConnectionReport, DomainUpsert, UpsertAck};

/// Transport for the two asynchronous domain operations.
///
/// Platform implementations:
/// - HTTP client against the admin API
/// - in-process facade for embedded deployments
#[async_trait]
pub trait DomainTransport: Send + Sync {
    /// Create a new domain or update an existing one.
    ///
    /// A failed or malformed remote call surfaces as `Err`; a remote that
    /// processed the request but declined it answers `Ok` with
    /// `result == false` and an optional error code.
    ///
    /// # Arguments
    /// * `request` - full form contents with ports already coerced
    async fn create_or_update(&self, request: &DomainUpsert) -> CoreResult<UpsertAck>;

    /// Probe IMAP and SMTP reachability and negotiation for the given
    /// settings. No credentials are involved.
    ///
    /// # Arguments
    /// * `probe` - connection settings under test
    async fn test_connection(&self, probe: &ConnectionProbe) -> CoreResult<ConnectionReport>;
}
