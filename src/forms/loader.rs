use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::FormError;
use super::ordered::OrderedMap;
use super::schema::{FormDefinition, RawForm};
use crate::config::{parse_yaml, BundleConfig};
use crate::paths::{PathProbe, PathResolver};

/// Validated forms plus every file they were read from.
#[derive(Debug, Clone, PartialEq)]
pub struct FormsSetup {
    pub forms: Vec<FormDefinition>,
    pub resources: Vec<PathBuf>,
}

/// Locate every form setup file named by `config`, parse them in resolution
/// order and validate the merged result.
///
/// A form defined in more than one file takes its last definition but keeps
/// the position of its first.
pub fn load_setup_info<P: PathProbe>(
    config: &BundleConfig,
    probe: P,
) -> Result<FormsSetup, FormError> {
    let resolver = PathResolver::with_defaults(probe, config.path_components());
    let paths = resolver.resolve(None, None, None)?;
    info!(files = paths.len(), "form setup files resolved");

    let mut merged: OrderedMap<RawForm> = OrderedMap::new();
    let mut resources = Vec::with_capacity(paths.len());
    for path in &paths {
        let path = Path::new(path);
        merged.extend(read_setup_file(path)?);
        resources.push(path.to_path_buf());
    }

    let forms = merged
        .into_iter()
        .map(|(name, raw)| FormDefinition::from_raw(&name, raw, &config.default_data_class))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(forms = forms.len(), "form setup validated");

    Ok(FormsSetup { forms, resources })
}

fn read_setup_file(path: &Path) -> Result<OrderedMap<RawForm>, FormError> {
    let text = fs::read_to_string(path).map_err(|source| FormError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if text.trim().is_empty() {
        warn!(path = %path.display(), "form setup file is empty");
        return Ok(OrderedMap::new());
    }
    Ok(parse_yaml(&text, path)?)
}
