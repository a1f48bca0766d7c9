use tracing::{debug, trace};

use super::error::ResolveError;
use super::normalize::{join, rooted};
use super::probe::PathProbe;

/// Default root paths, sub paths and file names a resolver falls back to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathComponents {
    pub root_paths: Vec<String>,
    pub sub_paths: Vec<String>,
    pub file_names: Vec<String>,
}

/// Builds existing directory and file paths out of root paths, sub paths and
/// file names.
///
/// Results are normalized, free of duplicates and ordered by first
/// discovery. Any failure aborts the whole call; partial results are never
/// returned.
#[derive(Debug, Clone)]
pub struct PathResolver<P> {
    probe: P,
    defaults: PathComponents,
}

impl<P: PathProbe> PathResolver<P> {
    pub fn new(probe: P) -> Self {
        Self::with_defaults(probe, PathComponents::default())
    }

    pub fn with_defaults(probe: P, defaults: PathComponents) -> Self {
        Self { probe, defaults }
    }

    pub fn defaults(&self) -> &PathComponents {
        &self.defaults
    }

    /// Resolve directories, then files when any file names are available.
    ///
    /// Each argument falls back to the matching default independently when it
    /// is `None` or empty. Missing roots or sub paths are reported before the
    /// probe is consulted.
    pub fn resolve(
        &self,
        root_paths: Option<&[String]>,
        sub_paths: Option<&[String]>,
        file_names: Option<&[String]>,
    ) -> Result<Vec<String>, ResolveError> {
        let root_paths = or_default(root_paths, &self.defaults.root_paths);
        if root_paths.is_empty() {
            return Err(ResolveError::MissingRootPaths);
        }
        let sub_paths = or_default(sub_paths, &self.defaults.sub_paths);
        if sub_paths.is_empty() {
            return Err(ResolveError::MissingSubPaths);
        }
        let file_names = or_default(file_names, &self.defaults.file_names);

        let directories = self.resolve_directories(root_paths, sub_paths)?;
        if file_names.is_empty() {
            return Ok(directories);
        }
        self.resolve_files(&directories, file_names)
    }

    /// Resolve every sub path, absolute ones directly and relative ones below
    /// each root path in turn.
    pub fn resolve_directories<R, S>(
        &self,
        root_paths: &[R],
        sub_paths: &[S],
    ) -> Result<Vec<String>, ResolveError>
    where
        R: AsRef<str>,
        S: AsRef<str>,
    {
        let mut resolved = ResolvedPaths::default();

        for sub_path in sub_paths {
            let sub_path = sub_path.as_ref();

            if self.probe.is_absolute(sub_path) {
                let candidate = rooted(sub_path);
                if !self.probe.exists(&candidate) {
                    return Err(ResolveError::DirectoryNotFound(sub_path.to_string()));
                }
                resolved.push(candidate);
                continue;
            }

            let mut found = false;
            for root_path in root_paths {
                let root = rooted(root_path.as_ref());
                if !self.probe.exists(&root) {
                    return Err(ResolveError::RootDirectoryNotFound(root));
                }

                // An empty sub path names the root itself.
                let candidate = join(&root, sub_path);
                if self.probe.exists(&candidate) {
                    found = true;
                    resolved.push(candidate);
                } else {
                    trace!(%candidate, "directory not present under root");
                }
            }

            if !found {
                return Err(ResolveError::SubdirectoryNotFoundInAnyRoot(sub_path.to_string()));
            }
        }

        debug!(count = resolved.len(), "resolved directory paths");
        Ok(resolved.into_vec())
    }

    /// Look for every file name in each of `directory_paths`.
    pub fn resolve_files<D, F>(
        &self,
        directory_paths: &[D],
        file_names: &[F],
    ) -> Result<Vec<String>, ResolveError>
    where
        D: AsRef<str>,
        F: AsRef<str>,
    {
        let mut resolved = ResolvedPaths::default();

        for file_name in file_names {
            let file_name = file_name.as_ref();
            let mut found = false;

            for directory in directory_paths {
                let candidate = join(directory.as_ref(), file_name);
                if self.probe.exists(&candidate) {
                    found = true;
                    resolved.push(candidate);
                }
            }

            if !found {
                return Err(ResolveError::FileNotFoundInDirectories {
                    file_name: file_name.to_string(),
                    searched: directory_paths
                        .iter()
                        .map(|d| d.as_ref().to_string())
                        .collect(),
                });
            }
        }

        debug!(count = resolved.len(), "resolved file paths");
        Ok(resolved.into_vec())
    }
}

fn or_default<'a>(explicit: Option<&'a [String]>, default: &'a [String]) -> &'a [String] {
    match explicit {
        Some(values) if !values.is_empty() => values,
        _ => default,
    }
}

// Insertion-ordered set; the lists involved are small enough for a linear scan.
#[derive(Debug, Default)]
struct ResolvedPaths(Vec<String>);

impl ResolvedPaths {
    fn push(&mut self, path: String) {
        if !self.0.contains(&path) {
            self.0.push(path);
        }
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn into_vec(self) -> Vec<String> {
        self.0
    }
}
