//! Schema document loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reading an API description from disk.
#[derive(Debug, Error)]
pub enum SchemaLoadError {
    /// The file could not be read.
    #[error("failed to read API description '{}': {source}", .path.display())]
    Read {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("failed to parse API description '{}': {source}", .path.display())]
    Parse {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed, but its top level is not a JSON object.
    #[error("API description '{}' must contain a JSON object, got {kind}", .path.display())]
    NotAnObject {
        /// The path that was requested.
        path: PathBuf,
        /// The JSON kind found at the top level.
        kind: &'static str,
    },
}

impl SchemaLoadError {
    /// The path of the document that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::NotAnObject { path, .. } => {
                path
            }
        }
    }

    /// Returns `true` if the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_reports_path() {
        let err = SchemaLoadError::Read {
            path: PathBuf::from("/nope/api.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nope/api.json"));
        assert!(err.is_not_found());
        assert_eq!(err.path(), std::path::Path::new("/nope/api.json"));
    }

    #[test]
    fn parse_error_is_not_not_found() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SchemaLoadError::Parse {
            path: PathBuf::from("api.json"),
            source,
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("failed to parse"));
    }
}
