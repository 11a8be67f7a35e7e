// libtool-rs: Library Descriptor Resolution Tool
//
// SPDX-FileCopyrightText: 2026 LibTool Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolve command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Root descriptor document to start from. Relative paths are resolved
    /// against the current directory.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,
}
