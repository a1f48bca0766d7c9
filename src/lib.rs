pub mod config;
pub mod forms;
pub mod paths;

pub use crate::config::{BundleConfig, ConfigError};
pub use crate::forms::{load_setup_info, FormError, LoadedForm, QuickForms};
pub use crate::paths::{OsProbe, PathComponents, PathProbe, PathResolver, ResolveError};
