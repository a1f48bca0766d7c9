use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or validating the bundle configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Wrapper for underlying IO errors, tagged with the file being read.
    #[error("Failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured defaults file is missing.
    #[error("Default config file not found at \"{0}\"")]
    DefaultsNotFound(PathBuf),

    /// The defaults path exists but is a directory or special file.
    #[error("Default config path \"{0}\" is not a file")]
    DefaultsNotAFile(PathBuf),

    /// The file is not valid YAML or does not match the expected shape.
    #[error("Failed to parse `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_saphyr::Error,
    },

    /// A key failed validation after defaults were applied.
    #[error("Invalid configuration for path \"{path}\": {reason}")]
    Invalid { path: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
