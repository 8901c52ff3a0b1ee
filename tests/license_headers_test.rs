// ABOUTME: Checks that every Rust source file carries the workspace license header
// ABOUTME: Walks src, crates, tests, and benches from the manifest directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

const SPDX_LINE: &str = "// SPDX-License-Identifier: MIT OR Apache-2.0";
const COPYRIGHT_LINE: &str = "// Copyright (c) 2025 Async-IO.org";
const HEADER_LINES: usize = 8;

fn rust_files(dir: &Path, found: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_files(&path, found);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            found.push(path);
        }
    }
}

#[test]
fn test_every_source_file_has_spdx_header() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut files = Vec::new();
    for dir in ["src", "crates", "tests", "benches"] {
        rust_files(&root.join(dir), &mut files);
    }
    assert!(!files.is_empty());

    let missing: Vec<_> = files
        .iter()
        .filter(|path| {
            let contents = fs::read_to_string(path).unwrap();
            let header: Vec<&str> = contents.lines().take(HEADER_LINES).collect();
            !header.contains(&SPDX_LINE) || !header.contains(&COPYRIGHT_LINE)
        })
        .collect();

    assert!(missing.is_empty(), "files without license header: {missing:?}");
}
