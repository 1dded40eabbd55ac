//! Service registry lookup errors.

use thiserror::Error;

/// Errors from the process-wide service registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No service is registered under this name.
    #[error("uninitialized service: {name}")]
    UnknownService {
        /// The name that was looked up.
        name: String,
    },

    /// A thread panicked while holding a registry or configuration lock.
    #[error("{resource} lock poisoned")]
    Poisoned {
        /// Which shared resource was poisoned.
        resource: &'static str,
    },
}

impl RegistryError {
    /// Creates an unknown service error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownService { name: name.into() }
    }
}
