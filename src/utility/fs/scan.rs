// libtool-rs: Library Descriptor Resolution Tool
//
// SPDX-FileCopyrightText: 2026 LibTool Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory scanning.
//!
//! ```text
//! dir + filter --> WalkBuilder (recursive) --> file-name glob --> sorted paths
//! ```
//!
//! The filter applies to file names only (`*.libtool` matches at every
//! depth); the walk itself is always recursive. Hidden files are included
//! and ignore-files are not honored: the scan is a plain enumeration of
//! what exists on disk.

use bon::Builder;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;
use wax::{Glob, Program};

use crate::error::ScanError;

/// Options for a directory scan.
#[derive(Debug, Clone, Builder)]
pub struct ScanOptions {
    /// Follow symbolic links.
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
    /// Maximum depth to descend (None = unlimited).
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ScanOptions {
    /// Returns whether symbolic links are followed.
    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    /// Returns the maximum descent depth (None = unlimited).
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

/// Recursively enumerates files under `dir` whose name matches `filter`.
///
/// Matches from every descendant directory are flattened into one sorted
/// sequence, so the result is deterministic for a given filesystem
/// snapshot.
///
/// # Errors
///
/// Returns [`ScanError::DirectoryNotFound`] if `dir` does not exist and
/// [`ScanError::InvalidFilter`] if the glob fails to compile.
pub fn scan_directory(dir: &Path, filter: &str) -> Result<Vec<PathBuf>, ScanError> {
    scan_directory_with(dir, filter, &ScanOptions::default())
}

/// [`scan_directory`] with explicit [`ScanOptions`].
///
/// # Errors
///
/// Same contract as [`scan_directory`].
pub fn scan_directory_with(
    dir: &Path,
    filter: &str,
    options: &ScanOptions,
) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let glob = Glob::new(filter).map_err(|e| ScanError::InvalidFilter {
        filter: filter.to_string(),
        message: e.to_string(),
    })?;

    let mut builder = WalkBuilder::new(dir);
    builder
        .standard_filters(false)
        .follow_links(options.follow_links());
    if let Some(depth) = options.max_depth() {
        builder.max_depth(Some(depth));
    }

    let mut matches = Vec::new();
    for entry in builder.build() {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                if let Some(name) = entry.path().file_name().and_then(|n| n.to_str())
                    && glob.is_match(name)
                {
                    matches.push(entry.into_path());
                }
            }
            Err(e) => {
                warn!(error = %e, dir = %dir.display(), "scan error, entry skipped");
            }
        }
    }

    matches.sort();
    Ok(matches)
}
