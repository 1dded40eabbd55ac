//! Error namespace construction.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use super::error_class::{class_name_for_code, ErrorClass};
use super::service_error::{ErrorContext, ServiceError};
use crate::error::TaxonomyError;
use crate::model::ApiModel;

/// Name of the base class in every namespace.
pub const BASE_CLASS_NAME: &str = "ServiceError";

/// The error classes generated for one service.
///
/// Two namespaces built from equal models compare equal, even though the
/// classes are distinct allocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNamespace {
    service: String,
    base: Arc<ErrorClass>,
    classes: BTreeMap<String, Arc<ErrorClass>>,
    by_code: BTreeMap<String, String>,
}

impl ErrorNamespace {
    /// The service this namespace belongs to.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The base `ServiceError` class.
    pub fn base(&self) -> &Arc<ErrorClass> {
        &self.base
    }

    /// Looks up a class by name; `"ServiceError"` returns the base class.
    pub fn class(&self, name: &str) -> Option<&Arc<ErrorClass>> {
        if name == BASE_CLASS_NAME {
            return Some(&self.base);
        }
        self.classes.get(name)
    }

    /// Looks up the declared class for an error code.
    pub fn declared_class_for_code(&self, code: &str) -> Option<&Arc<ErrorClass>> {
        self.by_code.get(code).and_then(|name| self.classes.get(name))
    }

    /// Returns the class for `code`, synthesizing an undeclared one if needed.
    ///
    /// Services sometimes report codes their description never lists. Those
    /// still get a class derived from the base, so they can be handled by
    /// code or generically. Synthesized classes are not added to the
    /// namespace.
    pub fn class_for_code(&self, code: &str) -> Arc<ErrorClass> {
        if let Some(class) = self.declared_class_for_code(code) {
            return Arc::clone(class);
        }

        let name = class_name_for_code(code)
            .ok()
            .filter(|name| name != BASE_CLASS_NAME && !self.classes.contains_key(name));
        match name {
            Some(name) => Arc::new(ErrorClass::derived(&self.service, name, code, false)),
            None => Arc::clone(&self.base),
        }
    }

    /// Builds a raisable error for `code`.
    pub fn error(
        &self,
        code: &str,
        message: impl Into<String>,
        context: ErrorContext,
    ) -> ServiceError {
        ServiceError::new(self.class_for_code(code), code, message, context)
    }

    /// The derived (non-base) classes, ordered by name.
    pub fn classes(&self) -> impl Iterator<Item = &Arc<ErrorClass>> {
        self.classes.values()
    }

    /// Every class name, base first, then derived classes by name.
    pub fn class_names(&self) -> Vec<&str> {
        std::iter::once(BASE_CLASS_NAME)
            .chain(self.classes.keys().map(String::as_str))
            .collect()
    }

    /// Number of derived classes (the base is not counted).
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if the namespace holds only the base class.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Builds the error namespace for a service.
///
/// ## Errors
///
/// Returns [`TaxonomyError`] if a code produces no class name, maps onto
/// `ServiceError`, or collides with another code's class name.
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use stratus_lib::{build_errors, ApiModel};
///
/// let model = ApiModel::try_from(json!({
///     "shapes": {
///         "Foo": { "exception": true },
///         "Bar": { "exception": true }
///     }
/// })).unwrap();
///
/// let errors = build_errors("Dummy", &model).unwrap();
/// assert_eq!(errors.class_names(), vec!["ServiceError", "Bar", "Foo"]);
/// assert_eq!(errors.len(), 2);
/// ```
pub fn build_errors(service: &str, model: &ApiModel) -> Result<ErrorNamespace, TaxonomyError> {
    let mut names: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for code in model.error_codes() {
        let name = class_name_for_code(&code)?;
        names.entry(name).or_default().push(code);
    }

    let mut classes = BTreeMap::new();
    let mut by_code = BTreeMap::new();
    for (name, codes) in names {
        if codes.len() > 1 || name == BASE_CLASS_NAME {
            return Err(TaxonomyError::NameCollision { name, codes });
        }
        let code = &codes[0];
        by_code.insert(code.clone(), name.clone());
        classes.insert(
            name.clone(),
            Arc::new(ErrorClass::derived(service, name, code, true)),
        );
    }

    debug!(service, classes = classes.len(), "built error namespace");

    Ok(ErrorNamespace {
        service: service.to_string(),
        base: Arc::new(ErrorClass::base(service)),
        classes,
        by_code,
    })
}
