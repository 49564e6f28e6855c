//! Business logic service layer

mod editor;

pub use editor::{DomainEditor, SaveOutcome};

use std::sync::Arc;

use crate::traits::{DomainListNotifier, DomainTransport};
use crate::types::DomainDefaults;

/// Editor context - holds all dependencies
///
/// The platform layer creates this context and injects its transport and
/// list-screen implementations.
pub struct EditorContext {
    /// Remote-call transport for save and test-connection
    pub transport: Arc<dyn DomainTransport>,
    /// Refresh signal to the owning domain list
    pub list_notifier: Arc<dyn DomainListNotifier>,
    /// Default ports applied when the form is cleared
    pub defaults: DomainDefaults,
}

impl EditorContext {
    /// Create an editor context with the built-in port defaults
    #[must_use]
    pub fn new(
        transport: Arc<dyn DomainTransport>,
        list_notifier: Arc<dyn DomainListNotifier>,
    ) -> Self {
        Self {
            transport,
            list_notifier,
            defaults: DomainDefaults::default(),
        }
    }

    /// Override the ports a cleared form starts with
    #[must_use]
    pub fn with_defaults(mut self, defaults: DomainDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}
