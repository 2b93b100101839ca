//! Common test utilities for phingrun tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Listing report a well-behaved phing emits for the sample project
pub const SAMPLE_LISTING: &str = "\
Buildfile: build.xml

Main targets:
-------------
build  Build the project
test  Run tests
php.lint  Lint sources

Subtargets:
------------
clean
";

/// Creates a temporary project root with a build.xml
pub fn create_project(build_xml: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let build_path = dir.path().join("build.xml");
    std::fs::write(&build_path, build_xml).expect("Failed to write build.xml");
    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Creates a temporary project root with no build files
pub fn create_empty_project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Creates a directory holding a fake `phing` executable.
///
/// The script answers `-list` with [`SAMPLE_LISTING`] and any other
/// invocation by echoing its final argument, so tests can observe exactly
/// which target was passed through.
#[cfg(unix)]
pub fn create_fake_phing() -> (TempDir, PathBuf) {
    // Only shell builtins here: the tests put just this script's directory
    // on PATH, so external binaries like `cat` are unavailable.
    create_fake_phing_script(&format!(
        r#"#!/bin/sh
for arg in "$@"; do
    if [ "$arg" = "-list" ]; then
        printf '%s' '{listing}'
        exit 0
    fi
done
last=""
for arg in "$@"; do last="$arg"; done
echo "ran target: $last"
echo "cwd: $(pwd)"
"#,
        listing = SAMPLE_LISTING
    ))
}

/// Creates a directory holding a fake `phing` with custom script content
#[cfg(unix)]
pub fn create_fake_phing_script(content: &str) -> (TempDir, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let script_path = dir.path().join("phing");
    std::fs::write(&script_path, content).expect("Failed to write script");

    let mut perms = std::fs::metadata(&script_path)
        .expect("Failed to get metadata")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script_path, perms).expect("Failed to set permissions");

    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Minimal well-formed build.xml
pub const SAMPLE_BUILD_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project name="app" default="build">
    <target name="build" description="Build the project"/>
    <target name="test" description="Run tests"/>
</project>
"#;
