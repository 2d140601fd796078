//! Error types for catalog loading and resolution

use crate::locale::Locale;
use thiserror::Error;

/// Errors that can occur while loading or resolving message catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Neither the requested locale's catalog nor the default catalog exists.
    ///
    /// This signals a packaging defect rather than a transient condition;
    /// callers should treat it as fatal.
    #[error("no catalog available for bundle '{base_name}' (requested locale: {locale})")]
    CatalogNotFound {
        /// Bundle base name that was requested
        base_name: String,
        /// Locale that was requested
        locale: Locale,
    },

    /// Failed to read a catalog file from disk
    #[error("failed to load catalog file: {path}")]
    ResourceLoad {
        /// Path of the file that could not be read
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file held something other than a flat string-to-string object
    #[error("failed to parse catalog '{name}'")]
    Parse {
        /// Registry name of the offending catalog
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
