//! Error taxonomy construction errors.

use thiserror::Error;

/// Errors while deriving error classes from a model's error codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    /// Two or more codes map to the same class name, or a code maps to the
    /// reserved base class name.
    #[error("error class name collision for '{name}': codes {codes:?}")]
    NameCollision {
        /// The colliding class name.
        name: String,
        /// Every code that produced this name.
        codes: Vec<String>,
    },

    /// A code contains no alphanumeric characters.
    #[error("error code '{code}' does not produce a class name")]
    EmptyName {
        /// The offending code.
        code: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collision_lists_codes() {
        let err = TaxonomyError::NameCollision {
            name: "FooBar".to_string(),
            codes: vec!["Foo.Bar".to_string(), "FooBar".to_string()],
        };
        let display = err.to_string();
        assert!(display.contains("FooBar"));
        assert!(display.contains("Foo.Bar"));
    }
}
