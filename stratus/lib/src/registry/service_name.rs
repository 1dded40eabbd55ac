use std::fmt;

use crate::error::ArgumentError;

/// A validated service name.
///
/// Rules:
/// 1. Must start with an ASCII letter.
/// 2. Remaining characters must be ASCII alphanumeric or `_`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceName(String);

impl ServiceName {
    /// Validates and wraps a service name.
    ///
    /// ## Errors
    ///
    /// Returns [`ArgumentError::InvalidServiceName`] if the name breaks a rule.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, ArgumentError> {
        let name = name.into();
        match Self::validate(&name) {
            Ok(()) => Ok(Self(name)),
            Err(reason) => Err(ArgumentError::InvalidServiceName { name, reason }),
        }
    }

    fn validate(s: &str) -> Result<(), &'static str> {
        let mut chars = s.chars();

        match chars.next() {
            None => return Err("must not be empty"),
            Some(c) if !c.is_ascii_alphabetic() => return Err("must start with a letter"),
            _ => {}
        }

        if chars.any(|c| !c.is_ascii_alphanumeric() && c != '_') {
            return Err("may only contain letters, digits and '_'");
        }

        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ServiceName> for String {
    fn from(name: ServiceName) -> Self {
        name.0
    }
}

impl TryFrom<String> for ServiceName {
    type Error = ArgumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ServiceName {
    type Error = ArgumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
