// libtool-rs: Library Descriptor Resolution Tool
//
// SPDX-FileCopyrightText: 2026 LibTool Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Traversal configuration.
//!
//! ```text
//! <Config>
//!   <Override>True</Override>             -> override_existing
//!   <RootPath Create="True">libs</RootPath> -> root_path
//!   <DefaultInRoot>False</DefaultInRoot>  -> default_in_root
//!   <RelativePath>Root</RelativePath>     -> relative_path_basis
//! </Config>
//! ```
//!
//! [`ConfigState`] is a value, not a global: the walker clones the current
//! snapshot for each document frame and applies `Config` directives to the
//! clone. Settings made inside an included file are visible to that file's
//! own descent but never leak back into the including frame.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{ConfigError, Result};
use crate::utility::fs::paths::resolve_path;
use crate::utility::parse::parse_bool;

/// Which base an include without an explicit `InRoot` resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelativePathBasis {
    /// Resolve against the configured root path.
    Root,
    /// Resolve against the including file's directory.
    #[default]
    File,
}

impl FromStr for RelativePathBasis {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("root") {
            Ok(Self::Root)
        } else if value.eq_ignore_ascii_case("file") {
            Ok(Self::File)
        } else {
            Err(ConfigError::InvalidRelativePathBasis {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for RelativePathBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "Root"),
            Self::File => write!(f, "File"),
        }
    }
}

/// One traversal configuration snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigState {
    /// Base directory for in-root resolution. Defaults to the working
    /// directory the tool was started from.
    root_path: PathBuf,
    /// Whether resolved artifacts may overwrite existing ones. Parsed and
    /// validated here, consumed by the library stage.
    override_existing: bool,
    /// Whether includes without an explicit `InRoot` resolve in-root.
    default_in_root: bool,
    /// Alternate control over the same relativity decision.
    relative_path_basis: RelativePathBasis,
}

impl ConfigState {
    /// Creates a snapshot with defaults and the given root path.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            override_existing: false,
            default_in_root: true,
            relative_path_basis: RelativePathBasis::File,
        }
    }

    /// Creates the process-start snapshot rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// The configured root path.
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Whether resolved artifacts may overwrite existing ones.
    #[must_use]
    pub const fn override_existing(&self) -> bool {
        self.override_existing
    }

    /// Whether includes default to in-root resolution.
    #[must_use]
    pub const fn default_in_root(&self) -> bool {
        self.default_in_root
    }

    /// The relative-path basis.
    #[must_use]
    pub const fn relative_path_basis(&self) -> RelativePathBasis {
        self.relative_path_basis
    }

    /// Decides in-root resolution for an include.
    ///
    /// An explicit `InRoot` attribute always wins; otherwise the include
    /// resolves in-root when either `default_in_root` is set or the basis
    /// is [`RelativePathBasis::Root`].
    #[must_use]
    pub fn resolves_in_root(&self, explicit: Option<bool>) -> bool {
        explicit.unwrap_or_else(|| {
            self.default_in_root || self.relative_path_basis == RelativePathBasis::Root
        })
    }

    /// Applies an `Override` value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBool`] naming the offending value.
    pub fn set_override(&mut self, raw: &str) -> std::result::Result<(), ConfigError> {
        self.override_existing = parse_bool(raw).map_err(|source| ConfigError::InvalidBool {
            key: "Override".to_string(),
            source,
        })?;
        Ok(())
    }

    /// Applies a `DefaultInRoot` value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBool`] naming the offending value.
    pub fn set_default_in_root(&mut self, raw: &str) -> std::result::Result<(), ConfigError> {
        self.default_in_root = parse_bool(raw).map_err(|source| ConfigError::InvalidBool {
            key: "DefaultInRoot".to_string(),
            source,
        })?;
        Ok(())
    }

    /// Applies a `RelativePath` value ("Root" or "File", case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRelativePathBasis`] naming the value.
    pub fn set_relative_path_basis(&mut self, raw: &str) -> std::result::Result<(), ConfigError> {
        self.relative_path_basis = raw.parse()?;
        Ok(())
    }

    /// Applies a `RootPath` value resolved against `base_dir`.
    ///
    /// The resolved directory must exist; with `create` it is created
    /// (including missing ancestors) instead.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RootPathNotFound`] when the directory is
    /// absent and `create` is false, [`ConfigError::CreateFailed`] when
    /// creation fails, and [`ConfigError::InvalidRootPath`] for an empty
    /// path value.
    pub fn set_root_path(
        &mut self,
        raw: &str,
        base_dir: &Path,
        create: bool,
    ) -> std::result::Result<(), ConfigError> {
        let path =
            resolve_path(raw, base_dir).map_err(|source| ConfigError::InvalidRootPath { source })?;

        if !path.is_dir() {
            if !create {
                return Err(ConfigError::RootPathNotFound {
                    path: path.display().to_string(),
                });
            }
            fs::create_dir_all(&path).map_err(|source| ConfigError::CreateFailed {
                path: path.display().to_string(),
                source,
            })?;
        }

        self.root_path = path;
        Ok(())
    }
}
