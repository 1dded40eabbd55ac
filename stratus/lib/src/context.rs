//! The top-level entry point: shared defaults plus the service registry.

use std::sync::{Arc, OnceLock};

use serde_json::Value;
use tracing::{info, instrument};

use crate::client::{build_client, Transport, UnconfiguredTransport};
use crate::config::ConfigStore;
use crate::error::{ArgumentError, StratusError};
use crate::model::{normalize, ApiDescription};
use crate::registry::{ServiceModule, ServiceName, ServiceRegistry};
use crate::taxonomy::build_errors;

static GLOBAL: OnceLock<Stratus> = OnceLock::new();

/// Owns the configuration defaults and the registry of services.
///
/// Most programs use the process-wide instance from [`Stratus::global`].
/// Tests and embedders that need isolation create their own with
/// [`Stratus::new`].
#[derive(Debug)]
pub struct Stratus {
    config: Arc<ConfigStore>,
    registry: ServiceRegistry,
    transport: Arc<dyn Transport>,
}

impl Default for Stratus {
    fn default() -> Self {
        Self::new()
    }
}

impl Stratus {
    /// An isolated context with empty defaults and no transport.
    pub fn new() -> Self {
        Self {
            config: Arc::new(ConfigStore::new()),
            registry: ServiceRegistry::new(),
            transport: Arc::new(UnconfiguredTransport),
        }
    }

    /// Replaces the transport handed to clients of services added afterwards.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Replaces the configuration defaults.
    pub fn with_config(mut self, config: ConfigStore) -> Self {
        self.config = Arc::new(config);
        self
    }

    /// The process-wide context.
    ///
    /// Created on first use with defaults read from the `STRATUS_*`
    /// environment variables.
    pub fn global() -> &'static Stratus {
        GLOBAL.get_or_init(|| Self::new().with_config(ConfigStore::from_env()))
    }

    /// The shared configuration defaults.
    ///
    /// Changes are visible to every client constructed afterwards, for every
    /// registered service.
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Replaces the defaults wholesale.
    ///
    /// ## Errors
    ///
    /// Returns [`ArgumentError::NonMappingConfig`] unless `value` is an object.
    pub fn set_config(&self, value: Value) -> Result<(), ArgumentError> {
        self.config.set(value)
    }

    /// Registers a service from any API description form.
    ///
    /// The model is normalized once; the client type and the error namespace
    /// are both built from that same instance. Nothing is registered unless
    /// every step succeeds. Registering an existing name replaces it.
    ///
    /// ## Errors
    ///
    /// - [`StratusError::Argument`] for an invalid name or description form
    /// - [`StratusError::Load`] if a path cannot be read or parsed
    /// - [`StratusError::Taxonomy`] if error codes produce colliding class names
    #[instrument(skip(self, name, api), fields(service = %name))]
    pub fn add_service(
        &self,
        name: &str,
        api: impl Into<ApiDescription>,
    ) -> Result<Arc<ServiceModule>, StratusError> {
        let name = ServiceName::new(name)?;
        let model = normalize(api)?;
        let errors = build_errors(name.as_str(), &model)?;
        let client_type = build_client(name.as_str(), model);

        let module = Arc::new(ServiceModule::new(
            name,
            client_type,
            errors,
            Arc::clone(&self.config),
            Arc::clone(&self.transport),
        ));

        let replaced = self.registry.insert(Arc::clone(&module))?;
        info!(
            operations = module.client_type().operation_names().len(),
            error_classes = module.errors().len(),
            replaced = replaced.is_some(),
            "service registered"
        );

        Ok(module)
    }

    /// Unregisters a service, returning its module.
    ///
    /// ## Errors
    ///
    /// Returns [`StratusError::Registry`] if no service has that name.
    pub fn remove_service(&self, name: &str) -> Result<Arc<ServiceModule>, StratusError> {
        let module = self.registry.remove(name)?;
        info!(service = name, "service removed");
        Ok(module)
    }

    /// Looks up a registered service.
    ///
    /// ## Errors
    ///
    /// Returns [`StratusError::Registry`] if no service has that name.
    pub fn service(&self, name: &str) -> Result<Arc<ServiceModule>, StratusError> {
        Ok(self.registry.get(name)?)
    }

    /// Names of every registered service, sorted.
    pub fn service_names(&self) -> Result<Vec<String>, StratusError> {
        Ok(self.registry.names()?)
    }
}
