// libtool-rs: Library Descriptor Resolution Tool
//
// SPDX-FileCopyrightText: 2026 LibTool Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directive extraction.
//!
//! ```text
//! <LibTool> children --> Directive variants
//!   <Config>  -> ConfigOverride | ConfigRootPath | ConfigDefaultInRoot
//!                | ConfigRelativePath
//!   <Include> -> IncludeFile | IncludeDirectory
//!   <Library> -> Library(LibraryRequest)
//!   anything  -> Unknown(tag)
//! ```
//!
//! Raw nodes are converted into this closed set exactly once; the walker
//! then dispatches exhaustively. Value validation (booleans, paths) stays
//! with the consumers so errors carry the right context.

use crate::library::LibraryRequest;
use crate::utility::parse::tags_equal;

use super::XmlElement;

/// A parsed instruction from a descriptor document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `<Config><Override>` value, unvalidated text.
    ConfigOverride { value: String },
    /// `<Config><RootPath>` value plus its optional `Create` attribute.
    ConfigRootPath {
        path: String,
        create: Option<String>,
    },
    /// `<Config><DefaultInRoot>` value, unvalidated text.
    ConfigDefaultInRoot { value: String },
    /// `<Config><RelativePath>` value, unvalidated text.
    ConfigRelativePath { value: String },
    /// `<Include><File>` path plus its optional `InRoot` attribute.
    IncludeFile {
        path: String,
        in_root: Option<String>,
    },
    /// `<Include><Directory>` (or `<Dir>`) scan request.
    IncludeDirectory {
        path: Option<String>,
        filter: Option<String>,
        in_root: Option<String>,
    },
    /// `<Library>` request for the injected resolver.
    Library(LibraryRequest),
    /// Anything else; surfaced so the walker can warn once per tag.
    Unknown { tag: String },
}

/// Extracts the directives under one root marker element, in document
/// order.
#[must_use]
pub fn parse_directives(marker: &XmlElement) -> Vec<Directive> {
    let mut directives = Vec::new();

    for child in marker.children() {
        if tags_equal(child.name(), "Config") {
            parse_config_children(child, &mut directives);
        } else if tags_equal(child.name(), "Include") {
            parse_include_children(child, &mut directives);
        } else if tags_equal(child.name(), "Library") {
            directives.push(Directive::Library(LibraryRequest::from_element(child)));
        } else {
            directives.push(Directive::Unknown {
                tag: child.name().to_string(),
            });
        }
    }

    directives
}

fn parse_config_children(config: &XmlElement, directives: &mut Vec<Directive>) {
    for setting in config.children() {
        let directive = if tags_equal(setting.name(), "Override") {
            Directive::ConfigOverride {
                value: setting.text().to_string(),
            }
        } else if tags_equal(setting.name(), "RootPath") {
            Directive::ConfigRootPath {
                path: setting.text().to_string(),
                create: setting.attribute("Create").map(ToString::to_string),
            }
        } else if tags_equal(setting.name(), "DefaultInRoot") {
            Directive::ConfigDefaultInRoot {
                value: setting.text().to_string(),
            }
        } else if tags_equal(setting.name(), "RelativePath") {
            Directive::ConfigRelativePath {
                value: setting.text().to_string(),
            }
        } else {
            Directive::Unknown {
                tag: setting.name().to_string(),
            }
        };
        directives.push(directive);
    }
}

fn parse_include_children(include: &XmlElement, directives: &mut Vec<Directive>) {
    for entry in include.children() {
        let directive = if tags_equal(entry.name(), "File") {
            Directive::IncludeFile {
                path: entry.text().to_string(),
                in_root: entry.attribute("InRoot").map(ToString::to_string),
            }
        } else if tags_equal(entry.name(), "Directory") || tags_equal(entry.name(), "Dir") {
            Directive::IncludeDirectory {
                path: entry.child("Path").map(|p| p.text().to_string()),
                filter: entry.child("Filter").map(|f| f.text().to_string()),
                in_root: entry.attribute("InRoot").map(ToString::to_string),
            }
        } else {
            Directive::Unknown {
                tag: entry.name().to_string(),
            }
        };
        directives.push(directive);
    }
}
