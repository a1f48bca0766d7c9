use thiserror::Error;

/// Errors produced while resolving root, sub directory and file paths.
///
/// Every variant carries the offending input so the rendered message can be
/// shown to an operator as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Neither the call nor the resolver defaults supplied root paths.
    #[error("No root paths have been set.")]
    MissingRootPaths,

    /// Neither the call nor the resolver defaults supplied sub paths.
    #[error("No directories have been set.")]
    MissingSubPaths,

    /// A normalized root path does not exist.
    #[error("The root directory \"{0}\" does not exist.")]
    RootDirectoryNotFound(String),

    /// An absolute sub path does not exist.
    #[error("The directory \"{0}\" does not exist.")]
    DirectoryNotFound(String),

    /// A relative sub path was not found below any root path.
    #[error("The directory \"{0}\" does not exist in any of the root directories.")]
    SubdirectoryNotFoundInAnyRoot(String),

    /// A file name was not found in any of the searched directories.
    #[error(
        "No file named \"{file_name}\" found in the following directories:\n{}",
        quoted_lines(.searched)
    )]
    FileNotFoundInDirectories {
        file_name: String,
        searched: Vec<String>,
    },
}

fn quoted_lines(paths: &[String]) -> String {
    paths.iter().map(|p| format!("\n\"{p}\"")).collect()
}
