//! The process-wide table of registered services.

mod module;
mod service_name;

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::RegistryError;

pub use module::ServiceModule;
pub use service_name::ServiceName;

type Services = BTreeMap<String, Arc<ServiceModule>>;

/// Name-to-module table with last-write-wins semantics.
///
/// Readers never observe a partially registered service: modules are fully
/// built before [`ServiceRegistry::insert`] takes the write lock.
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    services: RwLock<Services>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a module under its name, returning the module it replaced.
    pub fn insert(
        &self,
        module: Arc<ServiceModule>,
    ) -> Result<Option<Arc<ServiceModule>>, RegistryError> {
        let name = module.name().to_string();
        Ok(self.write()?.insert(name, module))
    }

    /// Looks up a registered service.
    ///
    /// ## Errors
    ///
    /// Returns [`RegistryError::UnknownService`] if nothing is bound to `name`.
    pub fn get(&self, name: &str) -> Result<Arc<ServiceModule>, RegistryError> {
        self.read()?
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::unknown(name))
    }

    /// Unbinds a service. Handles obtained earlier stay usable.
    ///
    /// ## Errors
    ///
    /// Returns [`RegistryError::UnknownService`] if nothing is bound to `name`.
    pub fn remove(&self, name: &str) -> Result<Arc<ServiceModule>, RegistryError> {
        self.write()?
            .remove(name)
            .ok_or_else(|| RegistryError::unknown(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().is_ok_and(|services| services.contains_key(name))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Result<Vec<String>, RegistryError> {
        Ok(self.read()?.keys().cloned().collect())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Services>, RegistryError> {
        self.services.read().map_err(|_| RegistryError::Poisoned {
            resource: "service registry",
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Services>, RegistryError> {
        self.services.write().map_err(|_| RegistryError::Poisoned {
            resource: "service registry",
        })
    }
}
