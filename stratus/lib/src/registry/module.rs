//! A registered service: client type, error namespace and shared defaults.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::ServiceName;
use crate::client::{Client, ClientType, Transport};
use crate::config::{resolve, ClientOptions, ConfigStore};
use crate::error::StratusError;
use crate::model::ApiModel;
use crate::taxonomy::ErrorNamespace;

/// The unit `add_service` produces and the registry stores.
///
/// Cloning the `Arc<ServiceModule>` handed out by the registry is cheap;
/// every handle sees the same client type, namespace and defaults.
#[derive(Debug)]
pub struct ServiceModule {
    name: ServiceName,
    client_type: Arc<ClientType>,
    errors: Arc<ErrorNamespace>,
    defaults: Arc<ConfigStore>,
    transport: Arc<dyn Transport>,
}

impl ServiceModule {
    pub(crate) fn new(
        name: ServiceName,
        client_type: ClientType,
        errors: ErrorNamespace,
        defaults: Arc<ConfigStore>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            name,
            client_type: Arc::new(client_type),
            errors: Arc::new(errors),
            defaults,
            transport,
        }
    }

    pub fn name(&self) -> &ServiceName {
        &self.name
    }

    /// The generated client type.
    pub fn client_type(&self) -> &ClientType {
        &self.client_type
    }

    /// The service's error namespace.
    pub fn errors(&self) -> &ErrorNamespace {
        &self.errors
    }

    /// Shortcut for `client_type().api()`.
    pub fn api(&self) -> &ApiModel {
        self.client_type.api()
    }

    /// Constructs a client, merging `options` over the process-wide defaults.
    ///
    /// ## Errors
    ///
    /// Returns [`StratusError::Config`] when the merged configuration lacks a
    /// region or credentials the model requires, or holds a malformed value.
    #[instrument(skip(self, options), fields(service = %self.name))]
    pub fn new_client(&self, options: ClientOptions) -> Result<Client, StratusError> {
        let config = resolve(self.name.as_str(), self.api(), &self.defaults, &options)?;
        debug!("client constructed");
        Ok(Client::new(
            Arc::clone(&self.client_type),
            Arc::clone(&self.errors),
            config,
            Arc::clone(&self.transport),
        ))
    }
}
