// libtool-rs: Library Descriptor Resolution Tool
//
// SPDX-FileCopyrightText: 2026 LibTool Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library acquisition seam.
//!
//! `Library` elements are parsed into [`LibraryRequest`] values and handed
//! to an injected [`LibraryResolver`]. Retrieval itself is out of scope
//! here; [`NoopLibraryResolver`] accepts every request so descriptors that
//! declare libraries remain fully processable.

use tracing::debug;

use crate::config::ConfigState;
use crate::document::XmlElement;
use crate::error::Result;

/// One `Library` declaration from a descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryRequest {
    name: String,
}

impl LibraryRequest {
    /// Creates a request by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Builds a request from a `Library` element.
    ///
    /// The name comes from the `Name` attribute, a `Name` child, or the
    /// element text, in that order. Unnamed requests are preserved (the
    /// resolver decides how to treat them).
    #[must_use]
    pub fn from_element(element: &XmlElement) -> Self {
        let name = element
            .attribute("Name")
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .or_else(|| {
                element
                    .child("Name")
                    .map(|child| child.text().to_string())
                    .filter(|name| !name.is_empty())
            })
            .unwrap_or_else(|| element.text().to_string());

        Self { name }
    }

    /// The declared library name; may be empty for unnamed requests.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Capability for acquiring a declared library.
pub trait LibraryResolver {
    /// Handles one library declaration under the given configuration.
    ///
    /// # Errors
    ///
    /// Implementations return an error to abort the traversal.
    fn resolve(&self, request: &LibraryRequest, config: &ConfigState) -> Result<()>;
}

/// Resolver that accepts and ignores every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLibraryResolver;

impl LibraryResolver for NoopLibraryResolver {
    fn resolve(&self, request: &LibraryRequest, config: &ConfigState) -> Result<()> {
        debug!(
            name = request.name(),
            root = %config.root_path().display(),
            override_existing = config.override_existing(),
            "library request ignored"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests;
