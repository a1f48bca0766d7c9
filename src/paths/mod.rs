//! Resolution of configuration file locations across root and sub directories.

pub mod error;
pub mod normalize;
pub mod probe;
pub mod resolver;

pub use error::ResolveError;
pub use probe::{OsProbe, PathProbe, PathType};

#[cfg(any(test, feature = "test-helpers"))]
pub use probe::MemoryProbe;
pub use resolver::{PathComponents, PathResolver};
