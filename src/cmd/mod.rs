// libtool-rs: Library Descriptor Resolution Tool
//
// SPDX-FileCopyrightText: 2026 LibTool Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers.
//!
//! ```text
//! resolve: cwd -> root ConfigState -> DocumentWalker -> stats
//! ```

use anyhow::Context as _;
use tracing::info;

use crate::cli::resolve::ResolveArgs;
use crate::config::ConfigState;
use crate::error::Result;
use crate::library::NoopLibraryResolver;
use crate::utility::fs::paths::resolve_path;
use crate::walker::DocumentWalker;

/// Runs the `resolve` command.
///
/// # Errors
///
/// Returns the first fatal traversal error.
pub fn run_resolve_command(args: &ResolveArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let root_file = resolve_path(&args.file.to_string_lossy(), &cwd)
        .context("invalid --file argument")?;

    let config = ConfigState::new(&cwd);
    let libraries = NoopLibraryResolver;
    let mut walker = DocumentWalker::new(&libraries);
    walker.run(&root_file, &config)?;

    let stats = walker.stats();
    info!(
        files = stats.files_visited,
        includes = stats.includes_resolved,
        libraries = stats.library_requests,
        warnings = stats.warnings,
        "resolution finished"
    );

    Ok(())
}
