// libtool-rs: Library Descriptor Resolution Tool
//
// SPDX-FileCopyrightText: 2026 LibTool Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, IncludeError, LibToolError, LibToolResult};
use crate::utility::parse::ParseBoolError;

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidBool {
        key: "Override".to_string(),
        source: ParseBoolError {
            value: "maybe".to_string(),
        },
    };
    insta::assert_snapshot!(err.to_string());
}

#[test]
fn test_include_cycle_display() {
    let err = IncludeError::Cycle {
        chain: "a.xml -> b.xml -> a.xml".to_string(),
    };
    insta::assert_snapshot!(err.to_string());
}

#[test]
fn test_libtool_error_size() {
    // Box<str> variants (Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<LibToolError>();
    assert!(size <= 24, "LibToolError is {size} bytes, expected <= 24");
}

#[test]
fn test_libtool_result_size() {
    let size = std::mem::size_of::<LibToolResult<()>>();
    assert!(size <= 24, "LibToolResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_boxing_conversions() {
    let err: LibToolError = ConfigError::RootPathNotFound {
        path: "/missing".to_string(),
    }
    .into();
    assert!(matches!(err, LibToolError::Config(_)));
    assert!(err.to_string().contains("/missing"));
}
