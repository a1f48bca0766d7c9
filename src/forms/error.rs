use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::paths::ResolveError;

/// Errors produced while locating, reading and validating form setup files.
#[derive(Error, Debug)]
pub enum FormError {
    /// Setup file locations could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The bundle configuration was unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Wrapper for underlying IO errors, tagged with the setup file.
    #[error("Failed to read form setup file `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A form definition failed validation.
    #[error("Invalid form configuration for path \"{path}\": {reason}")]
    Invalid { path: String, reason: String },
}

impl FormError {
    pub(crate) fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        FormError::Invalid {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
