//! Error classes and their naming rules.

use std::fmt;

use crate::error::TaxonomyError;

/// The library-wide capability every service error class satisfies.
pub const SERVICE_ERROR_CAPABILITY: &str = "stratus::errors::ServiceError";

/// The language-level error capability at the root of every class.
pub const ERROR_CAPABILITY: &str = "std::error::Error";

/// One error "type" inside a service's error namespace.
///
/// A class without a code is the namespace base (`ServiceError`); every
/// other class derives from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorClass {
    service: String,
    name: String,
    code: Option<String>,
    declared: bool,
}

impl ErrorClass {
    pub(crate) fn base(service: &str) -> Self {
        Self {
            service: service.to_string(),
            name: super::BASE_CLASS_NAME.to_string(),
            code: None,
            declared: true,
        }
    }

    pub(crate) fn derived(service: &str, name: String, code: &str, declared: bool) -> Self {
        Self {
            service: service.to_string(),
            name,
            code: Some(code.to_string()),
            declared,
        }
    }

    /// The owning service.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The class name within the namespace (e.g. `NotFound`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The error code this class stands for; `None` for the base class.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns `true` for the namespace's base `ServiceError` class.
    pub fn is_base(&self) -> bool {
        self.code.is_none()
    }

    /// Returns `false` for classes synthesized for codes the model never declared.
    pub fn is_declared(&self) -> bool {
        self.declared
    }

    /// The fully qualified name, `<Service>::Errors::<Name>`.
    pub fn qualified_name(&self) -> String {
        format!("{}::Errors::{}", self.service, self.name)
    }

    /// The ancestry chain, most specific first.
    ///
    /// ```
    /// use serde_json::json;
    /// use stratus_lib::{build_errors, ApiModel};
    ///
    /// let model = ApiModel::try_from(json!({
    ///     "shapes": { "Foo": { "exception": true } }
    /// })).unwrap();
    /// let errors = build_errors("Dummy", &model).unwrap();
    ///
    /// assert_eq!(
    ///     errors.class("Foo").unwrap().ancestors(),
    ///     vec![
    ///         "Dummy::Errors::Foo",
    ///         "Dummy::Errors::ServiceError",
    ///         "stratus::errors::ServiceError",
    ///         "std::error::Error",
    ///     ]
    /// );
    /// ```
    pub fn ancestors(&self) -> Vec<String> {
        let mut chain = vec![self.qualified_name()];
        if !self.is_base() {
            chain.push(format!("{}::Errors::{}", self.service, super::BASE_CLASS_NAME));
        }
        chain.push(SERVICE_ERROR_CAPABILITY.to_string());
        chain.push(ERROR_CAPABILITY.to_string());
        chain
    }

    /// Returns `true` if `self` is `ancestor` or derives from it.
    ///
    /// Classes from different services are unrelated.
    pub fn descends_from(&self, ancestor: &ErrorClass) -> bool {
        if self.service != ancestor.service {
            return false;
        }
        ancestor.is_base() || self.name == ancestor.name
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

/// Derives a class name from an error code.
///
/// The code is split on every non-alphanumeric character and each segment's
/// first letter is upper-cased. Names that would start with a digit are
/// prefixed with `Error`.
///
/// ## Examples
///
/// ```
/// use stratus_lib::taxonomy::class_name_for_code;
///
/// assert_eq!(class_name_for_code("NotFound").unwrap(), "NotFound");
/// assert_eq!(class_name_for_code("InvalidParameter.Value").unwrap(), "InvalidParameterValue");
/// assert_eq!(class_name_for_code("throttling-exception").unwrap(), "ThrottlingException");
/// assert_eq!(class_name_for_code("404").unwrap(), "Error404");
/// assert!(class_name_for_code("...").is_err());
/// ```
pub fn class_name_for_code(code: &str) -> Result<String, TaxonomyError> {
    let mut name = String::with_capacity(code.len());
    for segment in code.split(|c: char| !c.is_alphanumeric()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }

    match name.chars().next() {
        None => Err(TaxonomyError::EmptyName {
            code: code.to_string(),
        }),
        Some(first) if !first.is_alphabetic() => Ok(format!("Error{name}")),
        Some(_) => Ok(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_class_shape() {
        let base = ErrorClass::base("Dummy");
        assert!(base.is_base());
        assert!(base.is_declared());
        assert_eq!(base.code(), None);
        assert_eq!(base.qualified_name(), "Dummy::Errors::ServiceError");
        assert_eq!(
            base.ancestors(),
            vec![
                "Dummy::Errors::ServiceError",
                SERVICE_ERROR_CAPABILITY,
                ERROR_CAPABILITY
            ]
        );
    }

    #[test]
    fn derived_descends_from_base_and_itself() {
        let base = ErrorClass::base("Dummy");
        let foo = ErrorClass::derived("Dummy", "Foo".to_string(), "Foo", true);
        let bar = ErrorClass::derived("Dummy", "Bar".to_string(), "Bar", true);

        assert!(foo.descends_from(&base));
        assert!(foo.descends_from(&foo));
        assert!(!foo.descends_from(&bar));
        assert!(!base.descends_from(&foo));
    }

    #[test]
    fn classes_of_other_services_are_unrelated() {
        let foo = ErrorClass::derived("A", "Foo".to_string(), "Foo", true);
        assert!(!foo.descends_from(&ErrorClass::base("B")));
    }

    #[test]
    fn display_is_qualified() {
        let foo = ErrorClass::derived("Dummy", "Foo".to_string(), "Foo", true);
        assert_eq!(foo.to_string(), "Dummy::Errors::Foo");
    }

    #[test]
    fn naming_rules() {
        assert_eq!(class_name_for_code("Foo").unwrap(), "Foo");
        assert_eq!(class_name_for_code("foo").unwrap(), "Foo");
        assert_eq!(class_name_for_code("Foo.Bar").unwrap(), "FooBar");
        assert_eq!(class_name_for_code("Client.Foo_bar").unwrap(), "ClientFooBar");
        assert_eq!(class_name_for_code("5xx").unwrap(), "Error5xx");
        assert!(matches!(
            class_name_for_code(""),
            Err(TaxonomyError::EmptyName { .. })
        ));
    }
}
