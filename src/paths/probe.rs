#[cfg(any(test, feature = "test-helpers"))]
use std::cell::Cell;
#[cfg(any(test, feature = "test-helpers"))]
use std::collections::BTreeSet;
use std::path::Path;

/// Existence and absoluteness checks the resolver relies on.
///
/// The resolver never touches the filesystem directly; it asks a probe. The
/// real filesystem is [`OsProbe`], tests usually hand over a [`MemoryProbe`].
pub trait PathProbe {
    /// Return `true` if `path` exists.
    fn exists(&self, path: &str) -> bool;

    /// Return `true` if `path` is absolute.
    fn is_absolute(&self, path: &str) -> bool;
}

impl<T: PathProbe + ?Sized> PathProbe for &T {
    fn exists(&self, path: &str) -> bool {
        (**self).exists(path)
    }

    fn is_absolute(&self, path: &str) -> bool {
        (**self).is_absolute(path)
    }
}

/// What sits at a location on disk.
///
/// Setup and defaults files must be [`PathType::File`]; the resolver only
/// cares whether a location is [`PathType::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    NotFound,
    Directory,
    File,
    /// Sockets, FIFOs, devices.
    Other,
}

impl PathType {
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.is_dir() {
            PathType::Directory
        } else if path.is_file() {
            PathType::File
        } else if path.exists() {
            PathType::Other
        } else {
            PathType::NotFound
        }
    }
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProbe;

impl PathProbe for OsProbe {
    fn exists(&self, path: &str) -> bool {
        PathType::of(path) != PathType::NotFound
    }

    fn is_absolute(&self, path: &str) -> bool {
        Path::new(path).is_absolute()
    }
}

/// In-memory probe: a fixed set of paths that "exist".
///
/// Paths are matched by exact string equality, and a path is absolute when it
/// starts with `/` unless [`MemoryProbe::relative_only`] was called. Every call
/// is counted so callers can assert that no lookup happened at all.
///
/// Only built for tests and behind the `test-helpers` feature.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Default)]
pub struct MemoryProbe {
    entries: BTreeSet<String>,
    relative_only: bool,
    lookups: Cell<usize>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl MemoryProbe {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            relative_only: false,
            lookups: Cell::new(0),
        }
    }

    /// Report every path as relative, whatever it starts with.
    pub fn relative_only(mut self) -> Self {
        self.relative_only = true;
        self
    }

    pub fn insert(&mut self, path: impl Into<String>) {
        self.entries.insert(path.into());
    }

    /// Number of `exists`/`is_absolute` calls made so far.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    fn count(&self) {
        self.lookups.set(self.lookups.get() + 1);
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl PathProbe for MemoryProbe {
    fn exists(&self, path: &str) -> bool {
        self.count();
        self.entries.contains(path)
    }

    fn is_absolute(&self, path: &str) -> bool {
        self.count();
        !self.relative_only && path.starts_with('/')
    }
}
