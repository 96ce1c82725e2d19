// Copyright (c) 2026 ADNT Sarl <info@adnt.io>
// SPDX-License-Identifier: MIT

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use blinky_common::announce::resolve_project_name;

fn main() {
    embuild::espidf::sysenv::output();

    let root = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap())
        .parent()
        .unwrap()
        .to_path_buf();

    // Read version from project-root VERSION file
    let version_file = root.join("VERSION");
    let version = fs::read_to_string(&version_file)
        .expect("Failed to read VERSION file")
        .trim()
        .to_string();
    println!("cargo:rustc-env=BLINKY_VERSION={}", version);
    println!("cargo:rerun-if-changed={}", version_file.display());

    let name = project_name(&root.join("PROJECT_NAME"));
    println!("cargo:rustc-env=BLINKY_PROJECT_NAME={}", name);
    println!("cargo:rerun-if-changed=build.rs");
}

/// Project name from the generator: PROJECT_NAME env var, else the
/// project-root PROJECT_NAME file, else the package name.
fn project_name(file: &Path) -> String {
    println!("cargo:rerun-if-env-changed=PROJECT_NAME");
    println!("cargo:rerun-if-changed={}", file.display());

    let env_name = env::var("PROJECT_NAME").ok();
    let file_name = fs::read_to_string(file).ok();

    match resolve_project_name(env_name.as_deref(), file_name.as_deref()) {
        Some(name) => name.to_string(),
        None => {
            let fallback = env::var("CARGO_PKG_NAME").unwrap();
            println!(
                "cargo:warning=project name not substituted, using {}",
                fallback
            );
            fallback
        }
    }
}
