// libtool-rs: Library Descriptor Resolution Tool
//
// SPDX-FileCopyrightText: 2026 LibTool Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            LibToolError (~24 bytes)
//!                   |
//!   +------+-------+-------+-------+------+
//!   |      |       |       |       |      |
//!   v      v       v       v       v      v
//! Path  Config  Document Include  Scan  Io/Other
//! Box    Box      Box      Box    Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Path     Empty
//!   Config   InvalidBool, InvalidRelativePathBasis, RootPathNotFound,
//!            CreateFailed, InvalidRootPath
//!   Document FileNotFound, ReadFailed, Malformed
//!   Include  FileNotFound, DirectoryNotFound, SelfInclude, MissingField,
//!            InvalidFilter, Cycle
//!   Scan     DirectoryNotFound, InvalidFilter
//!
//! All variants boxed => LibToolError fits in 24 bytes.
//! ```

use thiserror::Error;

use crate::utility::parse::ParseBoolError;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`LibToolError`].
pub type LibToolResult<T> = std::result::Result<T, LibToolError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum LibToolError {
    /// Path resolution error.
    #[error("path error: {0}")]
    Path(#[from] Box<PathError>),

    /// Configuration directive error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Descriptor document error.
    #[error("document error: {0}")]
    Document(#[from] Box<DocumentError>),

    /// Include resolution error.
    #[error("include error: {0}")]
    Include(#[from] Box<IncludeError>),

    /// Directory scan error.
    #[error("scan error: {0}")]
    Scan(#[from] Box<ScanError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for LibToolError {
                fn from(err: $error) -> Self {
                    LibToolError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    PathError => Path,
    ConfigError => Config,
    DocumentError => Document,
    IncludeError => Include,
    ScanError => Scan,
    std::io::Error => Io,
}

// --- Path Errors ---

/// Path resolution errors.
#[derive(Debug, Error)]
pub enum PathError {
    /// An empty path was supplied to resolution.
    ///
    /// Callers decide whether this is fatal for the directive at hand.
    #[error("path is empty")]
    Empty,
}

// --- Config Errors ---

/// Configuration directive errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A boolean setting carried an unparsable value.
    #[error("invalid value for '{key}': {source}")]
    InvalidBool {
        key: String,
        #[source]
        source: ParseBoolError,
    },

    /// `RelativePath` carried something other than "Root" or "File".
    #[error("invalid relative path mode '{value}', expected \"Root\" or \"File\"")]
    InvalidRelativePathBasis { value: String },

    /// `RootPath` resolved to a directory that does not exist and
    /// `Create` was not requested.
    #[error("root path does not exist: '{path}' (set Create=\"True\" to create it)")]
    RootPathNotFound { path: String },

    /// `RootPath` requested creation but the directory could not be created.
    #[error("failed to create root path '{path}': {source}")]
    CreateFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// `RootPath` carried an unresolvable path value.
    #[error("invalid root path: {source}")]
    InvalidRootPath {
        #[source]
        source: PathError,
    },
}

// --- Document Errors ---

/// Descriptor document errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document path does not exist.
    #[error("file was not found: '{path}'")]
    FileNotFound { path: String },

    /// The document exists but could not be read.
    #[error("failed to read '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML.
    #[error("malformed document '{path}': {message}")]
    Malformed { path: String, message: String },
}

// --- Include Errors ---

/// Include resolution errors.
#[derive(Debug, Error)]
pub enum IncludeError {
    /// An included file does not exist.
    #[error("included file was not found: '{path}' (included from '{origin}')")]
    FileNotFound { path: String, origin: String },

    /// An included directory does not exist.
    #[error("included directory was not found: '{path}' (included from '{origin}')")]
    DirectoryNotFound { path: String, origin: String },

    /// A directive resolved to the file currently being processed.
    #[error("file includes itself: '{path}'")]
    SelfInclude { path: String },

    /// A directory include is missing a required child value.
    #[error("directory include in '{origin}' is missing a non-empty <{field}> value")]
    MissingField { origin: String, field: String },

    /// A directory include carried a filter that is not a valid glob.
    #[error("invalid filter '{filter}' in '{origin}': {message}")]
    InvalidFilter {
        origin: String,
        filter: String,
        message: String,
    },

    /// The include graph loops back on a file that is still open.
    #[error("include cycle detected: {chain}")]
    Cycle { chain: String },
}

// --- Scan Errors ---

/// Directory scan errors.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist.
    #[error("directory was not found: '{path}'")]
    DirectoryNotFound { path: String },

    /// The filter is not a valid glob pattern.
    #[error("invalid glob filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },
}

#[cfg(test)]
mod tests;
