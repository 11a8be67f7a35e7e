// libtool-rs: Library Descriptor Resolution Tool
//
// SPDX-FileCopyrightText: 2026 LibTool Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LibraryRequest, LibraryResolver, NoopLibraryResolver};
use crate::config::ConfigState;
use crate::document::Document;
use std::path::Path;

fn first_library(content: &str) -> LibraryRequest {
    let doc = Document::parse(content, Path::new("test.xml")).unwrap();
    let markers = doc.root_markers();
    let library = markers[0].child("Library").unwrap();
    LibraryRequest::from_element(library)
}

#[test]
fn test_request_name_from_attribute() {
    let request = first_library(r#"<LibTool><Library Name="zlib"/></LibTool>"#);
    assert_eq!(request.name(), "zlib");
}

#[test]
fn test_request_name_from_child() {
    let request = first_library("<LibTool><Library><Name>openssl</Name></Library></LibTool>");
    assert_eq!(request.name(), "openssl");
}

#[test]
fn test_request_name_from_text() {
    let request = first_library("<LibTool><Library>curl</Library></LibTool>");
    assert_eq!(request.name(), "curl");
}

#[test]
fn test_attribute_wins_over_child_and_text() {
    let request =
        first_library(r#"<LibTool><Library Name="a"><Name>b</Name>c</Library></LibTool>"#);
    assert_eq!(request.name(), "a");
}

#[test]
fn test_noop_resolver_accepts_everything() {
    let resolver = NoopLibraryResolver;
    let config = ConfigState::new("/work");
    resolver
        .resolve(&LibraryRequest::new("anything"), &config)
        .unwrap();
    resolver.resolve(&LibraryRequest::default(), &config).unwrap();
}
