// libtool-rs: Library Descriptor Resolution Tool
//
// SPDX-FileCopyrightText: 2026 LibTool Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Include resolution.
//!
//! ```text
//! directive + TraversalContext + ConfigState
//!        |
//!        v
//!   base dir: root_path (in-root) | including file's dir
//!        |
//!        v
//!   File      -> one absolute path   (exists? not self?)
//!   Directory -> scan matches        (exists? filter? not self?)
//! ```
//!
//! Resolution order is preserved: document order for explicit files,
//! scanner order for directory matches.

use std::path::{Path, PathBuf};

use crate::config::ConfigState;
use crate::error::{IncludeError, Result, ScanError};
use crate::utility::fs::paths::{paths_equal, resolve_path};
use crate::utility::fs::scan::scan_directory;
use crate::walker::TraversalContext;

/// Resolves a `File` include to an absolute path.
///
/// # Errors
///
/// Returns [`IncludeError::FileNotFound`] when the resolved file is absent
/// and [`IncludeError::SelfInclude`] when it is the file currently being
/// processed. An empty path value fails resolution outright.
pub fn resolve_file_include(
    path_text: &str,
    explicit_in_root: Option<bool>,
    ctx: &TraversalContext,
    config: &ConfigState,
) -> Result<PathBuf> {
    let base = base_dir(explicit_in_root, ctx, config);
    let resolved = resolve_path(path_text, base)?;

    if !resolved.is_file() {
        return Err(IncludeError::FileNotFound {
            path: resolved.display().to_string(),
            origin: ctx.file().display().to_string(),
        }
        .into());
    }

    guard_self_include(&resolved, ctx)?;
    Ok(resolved)
}

/// Resolves a `Directory` include to the scan's matches.
///
/// Both the `Path` and `Filter` values must be present and non-empty.
///
/// # Errors
///
/// Returns [`IncludeError::MissingField`] for an absent value,
/// [`IncludeError::DirectoryNotFound`] when the resolved directory is
/// absent, [`IncludeError::InvalidFilter`] for a bad glob, and
/// [`IncludeError::SelfInclude`] per match that resolves back to the file
/// currently being processed.
pub fn resolve_directory_include(
    path_text: Option<&str>,
    filter_text: Option<&str>,
    explicit_in_root: Option<bool>,
    ctx: &TraversalContext,
    config: &ConfigState,
) -> Result<Vec<PathBuf>> {
    let path_text = require_field(path_text, "Path", ctx)?;
    let filter_text = require_field(filter_text, "Filter", ctx)?;

    let base = base_dir(explicit_in_root, ctx, config);
    let dir = resolve_path(path_text, base)?;

    if !dir.is_dir() {
        return Err(IncludeError::DirectoryNotFound {
            path: dir.display().to_string(),
            origin: ctx.file().display().to_string(),
        }
        .into());
    }

    let matches = scan_directory(&dir, filter_text).map_err(|e| match e {
        ScanError::DirectoryNotFound { path } => IncludeError::DirectoryNotFound {
            path,
            origin: ctx.file().display().to_string(),
        },
        ScanError::InvalidFilter { filter, message } => IncludeError::InvalidFilter {
            origin: ctx.file().display().to_string(),
            filter,
            message,
        },
    })?;

    for matched in &matches {
        guard_self_include(matched, ctx)?;
    }

    Ok(matches)
}

fn base_dir<'a>(
    explicit_in_root: Option<bool>,
    ctx: &'a TraversalContext,
    config: &'a ConfigState,
) -> &'a Path {
    if config.resolves_in_root(explicit_in_root) {
        config.root_path()
    } else {
        ctx.dir()
    }
}

fn require_field<'a>(
    value: Option<&'a str>,
    field: &str,
    ctx: &TraversalContext,
) -> Result<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            IncludeError::MissingField {
                origin: ctx.file().display().to_string(),
                field: field.to_string(),
            }
            .into()
        })
}

fn guard_self_include(resolved: &Path, ctx: &TraversalContext) -> Result<()> {
    if paths_equal(resolved, ctx.file()) {
        return Err(IncludeError::SelfInclude {
            path: resolved.display().to_string(),
        }
        .into());
    }
    Ok(())
}
