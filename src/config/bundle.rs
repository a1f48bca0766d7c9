use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::paths::PathComponents;

/// Name of the configuration root node.
pub const ROOT_NODE: &str = "quick_forms";

/// Placeholder replaced by the bundle directory in root paths and in the
/// defaults file path.
pub const BUNDLE_DIR_PLACEHOLDER: &str = "__BUNDLE_DIR__";

/// Data class used when neither the configuration nor its defaults name one.
pub const DEFAULT_DATA_CLASS: &str = "QuickFormsData";

/// A YAML value that may be written as a single string or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// Bundle configuration as written in a file, before defaults and
/// validation. Absent keys and explicit `null`s both read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawBundleConfig {
    #[serde(default)]
    pub root_paths: Option<OneOrMany>,
    #[serde(default)]
    pub directory_paths: Option<OneOrMany>,
    #[serde(default)]
    pub file_names: Option<OneOrMany>,
    #[serde(default)]
    pub form_class_prefix: Option<String>,
    #[serde(default)]
    pub default_data_class: Option<String>,
}

impl RawBundleConfig {
    /// Fill every unset key of `self` from `defaults`.
    pub fn merged_over(self, defaults: RawBundleConfig) -> RawBundleConfig {
        RawBundleConfig {
            root_paths: self.root_paths.or(defaults.root_paths),
            directory_paths: self.directory_paths.or(defaults.directory_paths),
            file_names: self.file_names.or(defaults.file_names),
            form_class_prefix: self.form_class_prefix.or(defaults.form_class_prefix),
            default_data_class: self.default_data_class.or(defaults.default_data_class),
        }
    }
}

/// Validated bundle configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleConfig {
    pub root_paths: Vec<String>,
    pub directory_paths: Vec<String>,
    pub file_names: Vec<String>,
    pub form_class_prefix: String,
    pub default_data_class: String,
}

impl BundleConfig {
    /// Validate a merged raw configuration.
    pub fn from_raw(raw: RawBundleConfig) -> Result<Self, ConfigError> {
        let root_paths = scalar_list("root_paths", raw.root_paths, false)?;
        let directory_paths = scalar_list("directory_paths", raw.directory_paths, true)?;
        let file_names = scalar_list("file_names", raw.file_names, true)?;

        let form_class_prefix = match raw.form_class_prefix {
            Some(prefix) if !prefix.trim().is_empty() => prefix,
            Some(_) => {
                return Err(ConfigError::invalid(
                    node_path("form_class_prefix"),
                    "The path cannot contain an empty value.",
                ))
            }
            None => {
                return Err(ConfigError::invalid(
                    node_path("form_class_prefix"),
                    "The value must be configured.",
                ))
            }
        };

        let default_data_class = match raw.default_data_class {
            Some(class) if class.trim().is_empty() => {
                return Err(ConfigError::invalid(
                    node_path("default_data_class"),
                    "The path cannot contain an empty value.",
                ))
            }
            Some(class) => class,
            None => DEFAULT_DATA_CLASS.to_string(),
        };

        Ok(Self {
            root_paths,
            directory_paths,
            file_names,
            form_class_prefix,
            default_data_class,
        })
    }

    /// Replace every bundle directory placeholder in the root paths.
    pub fn resolve_bundle_dir(&mut self, bundle_dir: &str) {
        for root in &mut self.root_paths {
            *root = resolve_bundle_dir(root, bundle_dir);
        }
    }

    /// The defaults a path resolver should work from.
    pub fn path_components(&self) -> PathComponents {
        PathComponents {
            root_paths: self.root_paths.clone(),
            sub_paths: self.directory_paths.clone(),
            file_names: self.file_names.clone(),
        }
    }
}

/// Replace [`BUNDLE_DIR_PLACEHOLDER`] in `path` with `bundle_dir`.
pub fn resolve_bundle_dir(path: &str, bundle_dir: &str) -> String {
    path.replace(BUNDLE_DIR_PLACEHOLDER, bundle_dir)
}

fn node_path(key: &str) -> String {
    format!("{ROOT_NODE}.{key}")
}

fn scalar_list(
    key: &str,
    value: Option<OneOrMany>,
    requires_element: bool,
) -> Result<Vec<String>, ConfigError> {
    let values = value.map(OneOrMany::into_vec).unwrap_or_default();
    if requires_element && values.is_empty() {
        return Err(ConfigError::invalid(
            node_path(key),
            "The path should have at least 1 element(s) defined.",
        ));
    }
    if let Some(index) = values.iter().position(|v| v.trim().is_empty()) {
        return Err(ConfigError::invalid(
            format!("{}.{index}", node_path(key)),
            "The path cannot contain an empty value.",
        ));
    }
    Ok(values)
}
