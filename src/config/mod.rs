//! Bundle configuration: where form setup files live and how forms are typed.

pub mod bundle;
pub mod error;
pub mod load;

pub use bundle::{
    resolve_bundle_dir, BundleConfig, OneOrMany, RawBundleConfig, BUNDLE_DIR_PLACEHOLDER,
    DEFAULT_DATA_CLASS, ROOT_NODE,
};
pub use error::ConfigError;
pub use load::{effective_config, load_defaults, parse_yaml, read_bundle_config};
