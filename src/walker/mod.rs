// libtool-rs: Library Descriptor Resolution Tool
//
// SPDX-FileCopyrightText: 2026 LibTool Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recursive descriptor traversal.
//!
//! ```text
//! walk(file)
//!   Load -> root markers? -- none --> skip (Ok)
//!   clone ConfigState             (frame-local snapshot)
//!   per directive:
//!     Config*   -> snapshot setters
//!     Include*  -> resolver -> open-chain check -> walk(resolved)
//!     Library   -> injected LibraryResolver
//!     Unknown   -> warn, continue
//! ```
//!
//! Depth-first and synchronous; a fatal error anywhere aborts the whole
//! traversal. The open chain carried by [`TraversalContext`] catches
//! indirect cycles (A includes B includes A), not just direct
//! self-inclusion.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tracing::{debug, info, warn};

use crate::config::ConfigState;
use crate::document::Document;
use crate::document::directive::{Directive, parse_directives};
use crate::error::{ConfigError, IncludeError, Result};
use crate::library::LibraryResolver;
use crate::resolver::{resolve_directory_include, resolve_file_include};
use crate::utility::fs::paths::{normalize_path, paths_equal};
use crate::utility::parse::parse_bool;

/// Per-frame traversal state: the open file, its directory, and the chain
/// of files above it.
#[derive(Debug, Clone)]
pub struct TraversalContext {
    file: PathBuf,
    dir: PathBuf,
    open_chain: Vec<PathBuf>,
}

impl TraversalContext {
    /// Creates the root frame for an absolute file path.
    #[must_use]
    pub fn root(file: &Path) -> Self {
        let file = normalize_path(file);
        let dir = parent_dir(&file);
        Self {
            open_chain: vec![file.clone()],
            file,
            dir,
        }
    }

    /// Creates the frame for an included file, extending the open chain.
    #[must_use]
    pub fn descend(&self, file: PathBuf) -> Self {
        let file = normalize_path(&file);
        let dir = parent_dir(&file);
        let mut open_chain = self.open_chain.clone();
        open_chain.push(file.clone());
        Self {
            file,
            dir,
            open_chain,
        }
    }

    /// The file this frame is processing.
    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// The directory containing [`Self::file`].
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether `path` is already open somewhere up the chain.
    #[must_use]
    pub fn is_open(&self, path: &Path) -> bool {
        self.open_chain.iter().any(|open| paths_equal(open, path))
    }

    /// Formats the open chain plus the offending next file.
    fn chain_with(&self, next: &Path) -> String {
        let mut chain = self
            .open_chain
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>();
        chain.push(next.display().to_string());
        chain.join(" -> ")
    }
}

fn parent_dir(file: &Path) -> PathBuf {
    file.parent().map_or_else(PathBuf::new, Path::to_path_buf)
}

/// Counters reported after a traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Documents loaded, including those without a root marker.
    pub files_visited: usize,
    /// Include targets resolved and entered.
    pub includes_resolved: usize,
    /// Library declarations handed to the resolver.
    pub library_requests: usize,
    /// Non-fatal warnings emitted (unknown tags).
    pub warnings: usize,
}

/// Depth-first walker over a descriptor include graph.
pub struct DocumentWalker<'a> {
    libraries: &'a dyn LibraryResolver,
    stats: WalkStats,
}

impl<'a> DocumentWalker<'a> {
    /// Creates a walker with the given library capability.
    #[must_use]
    pub fn new(libraries: &'a dyn LibraryResolver) -> Self {
        Self {
            libraries,
            stats: WalkStats::default(),
        }
    }

    /// The counters accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> &WalkStats {
        &self.stats
    }

    /// Walks the graph rooted at `root_file` with the starting snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error; the traversal does not continue past
    /// it.
    pub fn run(&mut self, root_file: &Path, config: &ConfigState) -> Result<()> {
        let ctx = TraversalContext::root(root_file);
        info!(file = %ctx.file().display(), "starting resolution");
        self.walk(&ctx, config)
    }

    fn walk(&mut self, ctx: &TraversalContext, config: &ConfigState) -> Result<()> {
        let document = Document::load(ctx.file())?;
        self.stats.files_visited += 1;

        let markers = document.root_markers();
        if markers.is_empty() {
            debug!(file = %ctx.file().display(), "no root marker, skipping");
            return Ok(());
        }

        debug!(file = %ctx.file().display(), markers = markers.len(), "processing");

        // frame-local snapshot; config changes stay within this descent
        let mut config = config.clone();

        for marker in markers {
            for directive in parse_directives(marker) {
                self.apply(directive, ctx, &mut config)?;
            }
        }

        Ok(())
    }

    fn apply(
        &mut self,
        directive: Directive,
        ctx: &TraversalContext,
        config: &mut ConfigState,
    ) -> Result<()> {
        let origin = || format!("in '{}'", ctx.file().display());

        match directive {
            Directive::ConfigOverride { value } => {
                config.set_override(&value).with_context(origin)?;
            }
            Directive::ConfigDefaultInRoot { value } => {
                config.set_default_in_root(&value).with_context(origin)?;
            }
            Directive::ConfigRelativePath { value } => {
                config.set_relative_path_basis(&value).with_context(origin)?;
            }
            Directive::ConfigRootPath { path, create } => {
                let create = parse_flag(create.as_deref(), "Create")
                    .with_context(origin)?
                    .unwrap_or(false);
                config
                    .set_root_path(&path, ctx.dir(), create)
                    .with_context(origin)?;
                debug!(root = %config.root_path().display(), "root path set");
            }
            Directive::IncludeFile { path, in_root } => {
                let explicit = parse_flag(in_root.as_deref(), "InRoot").with_context(origin)?;
                let resolved = resolve_file_include(&path, explicit, ctx, config)?;
                self.enter(resolved, ctx, config)?;
            }
            Directive::IncludeDirectory {
                path,
                filter,
                in_root,
            } => {
                let explicit = parse_flag(in_root.as_deref(), "InRoot").with_context(origin)?;
                let resolved = resolve_directory_include(
                    path.as_deref(),
                    filter.as_deref(),
                    explicit,
                    ctx,
                    config,
                )?;
                for file in resolved {
                    self.enter(file, ctx, config)?;
                }
            }
            Directive::Library(request) => {
                self.stats.library_requests += 1;
                self.libraries.resolve(&request, config).with_context(origin)?;
            }
            Directive::Unknown { tag } => {
                warn!(file = %ctx.file().display(), tag, "unknown tag ignored");
                self.stats.warnings += 1;
            }
        }

        Ok(())
    }

    fn enter(&mut self, file: PathBuf, ctx: &TraversalContext, config: &ConfigState) -> Result<()> {
        if ctx.is_open(&file) {
            return Err(IncludeError::Cycle {
                chain: ctx.chain_with(&file),
            }
            .into());
        }

        self.stats.includes_resolved += 1;
        let child = ctx.descend(file);
        self.walk(&child, config)
    }
}

fn parse_flag(raw: Option<&str>, key: &str) -> std::result::Result<Option<bool>, ConfigError> {
    raw.map(|value| {
        parse_bool(value).map_err(|source| ConfigError::InvalidBool {
            key: key.to_string(),
            source,
        })
    })
    .transpose()
}
