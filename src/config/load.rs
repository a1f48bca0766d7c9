use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use super::bundle::{resolve_bundle_dir, BundleConfig, RawBundleConfig};
use super::error::ConfigError;
use crate::paths::PathType;

// Application config files may carry other top-level sections; only ours is read.
#[derive(Debug, Default, Deserialize)]
struct AppConfigFile {
    #[serde(default)]
    quick_forms: Option<RawBundleConfig>,
}

/// Parse YAML text, attributing errors to `origin`.
pub fn parse_yaml<T: DeserializeOwned>(text: &str, origin: &Path) -> Result<T, ConfigError> {
    serde_saphyr::from_str(text).map_err(|source| ConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the `quick_forms` section of an application config file.
///
/// A file without the section yields an empty configuration so defaults
/// apply to every key.
pub fn read_bundle_config(path: &Path) -> Result<RawBundleConfig, ConfigError> {
    let text = read(path)?;
    if text.trim().is_empty() {
        return Ok(RawBundleConfig::default());
    }
    let file: AppConfigFile = parse_yaml(&text, path)?;
    Ok(file.quick_forms.unwrap_or_default())
}

/// Load the bundle defaults file. `path` may contain the bundle directory
/// placeholder.
pub fn load_defaults(path: &str, bundle_dir: &str) -> Result<RawBundleConfig, ConfigError> {
    let path = PathBuf::from(resolve_bundle_dir(path, bundle_dir));
    match PathType::of(&path) {
        PathType::File => {}
        PathType::NotFound => return Err(ConfigError::DefaultsNotFound(path)),
        PathType::Directory | PathType::Other => {
            return Err(ConfigError::DefaultsNotAFile(path));
        }
    }
    debug!(path = %path.display(), "loading bundle defaults");
    parse_yaml(&read(&path)?, &path)
}

/// Build the effective configuration: user values over defaults, validated,
/// with the bundle directory placeholder expanded in the root paths.
pub fn effective_config(
    user: RawBundleConfig,
    defaults: RawBundleConfig,
    bundle_dir: &str,
) -> Result<BundleConfig, ConfigError> {
    let mut config = BundleConfig::from_raw(user.merged_over(defaults))?;
    config.resolve_bundle_dir(bundle_dir);
    info!(
        roots = config.root_paths.len(),
        directories = config.directory_paths.len(),
        files = config.file_names.len(),
        "bundle configuration ready"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OneOrMany;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_the_quick_forms_section() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.yml");
        fs::write(
            &path,
            "framework:\n  secret: abc\nquick_forms:\n  root_paths: /srv/app\n  file_names: [a.yml, b.yml]\n",
        )
        .unwrap();
        let raw = read_bundle_config(&path).unwrap();
        assert_eq!(raw.root_paths, Some(OneOrMany::One("/srv/app".into())));
        assert_eq!(
            raw.file_names,
            Some(OneOrMany::Many(vec!["a.yml".into(), "b.yml".into()]))
        );
        assert_eq!(raw.directory_paths, None);
    }

    #[test]
    fn null_values_fall_back_to_defaults() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.yml");
        fs::write(&path, "quick_forms:\n  directory_paths: ~\n").unwrap();
        let raw = read_bundle_config(&path).unwrap();
        assert_eq!(raw.directory_paths, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.yml");
        fs::write(&path, "quick_forms:\n  colour: blue\n").unwrap();
        let err = read_bundle_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "unexpected error: {err}");
    }

    #[test]
    fn missing_defaults_file_is_reported_with_expanded_path() {
        let tmp = tempdir().unwrap();
        let bundle_dir = tmp.path().to_string_lossy().into_owned();
        let err = load_defaults("__BUNDLE_DIR__/Resources/config/defaults.yml", &bundle_dir)
            .unwrap_err();
        match err {
            ConfigError::DefaultsNotFound(path) => {
                assert_eq!(path, tmp.path().join("Resources/config/defaults.yml"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn defaults_path_pointing_at_a_directory_is_rejected() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("Resources/config/defaults.yml")).unwrap();
        let bundle_dir = tmp.path().to_string_lossy().into_owned();
        let err = load_defaults("__BUNDLE_DIR__/Resources/config/defaults.yml", &bundle_dir)
            .unwrap_err();
        match err {
            ConfigError::DefaultsNotAFile(path) => {
                assert_eq!(path, tmp.path().join("Resources/config/defaults.yml"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn effective_config_merges_and_expands() {
        let tmp = tempdir().unwrap();
        let defaults_path = tmp.path().join("defaults.yml");
        fs::write(
            &defaults_path,
            "root_paths: __BUNDLE_DIR__\ndirectory_paths: Resources/forms\nfile_names: forms.yml\nform_class_prefix: App\\Form\\Type\n",
        )
        .unwrap();
        let defaults = load_defaults(&defaults_path.to_string_lossy(), "/unused").unwrap();
        let user = RawBundleConfig {
            file_names: Some(OneOrMany::One("contact.yml".into())),
            ..RawBundleConfig::default()
        };
        let config = effective_config(user, defaults, "/srv/bundle").unwrap();
        assert_eq!(config.root_paths, vec!["/srv/bundle"]);
        assert_eq!(config.directory_paths, vec!["Resources/forms"]);
        assert_eq!(config.file_names, vec!["contact.yml"]);
        assert_eq!(config.form_class_prefix, "App\\Form\\Type");
    }
}
