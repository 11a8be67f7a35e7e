// libtool-rs: Library Descriptor Resolution Tool
//
// SPDX-FileCopyrightText: 2026 LibTool Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for libtool-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! libtool [global options] <command>
//! resolve --file <PATH>
//! version
//! ```

pub mod global;
pub mod resolve;


use crate::cli::global::GlobalOptions;
use crate::cli::resolve::ResolveArgs;
use clap::{Parser, Subcommand};

/// LibTool - library dependency descriptor resolver.
///
/// Reads a root descriptor document and recursively resolves its include
/// graph.
#[derive(Debug, Parser)]
#[command(
    name = "libtool",
    author,
    version,
    about = "Library dependency descriptor resolver",
    long_about = "LibTool reads an XML descriptor document, applies its Config\n\
                  directives and recursively resolves Include directives (single\n\
                  files or filtered directory scans) into one processing pass.\n\n\
                  Declared Library dependencies are parsed and handed to the\n\
                  acquisition stage. See `libtool <command> --help` for more\n\
                  information about a command."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Resolves a descriptor document.
    Resolve(ResolveArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
