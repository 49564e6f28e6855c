//! Refresh signal to the screen owning the domain collection

use async_trait::async_trait;

/// Fire-and-forget notification channel to the owning domain list.
///
/// Injected at construction instead of looked up globally, so the editor
/// stays testable and free of process-wide state.
#[async_trait]
pub trait DomainListNotifier: Send + Sync {
    /// Tell the owning list screen to refetch and redisplay its domains
    async fn domain_list_changed(&self);
}
