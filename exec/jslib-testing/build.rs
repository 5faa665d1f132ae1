//! Checks the embedded k6 testing bundle before the crate is compiled.
//!
//! The bundle is produced outside of this workspace (see `bundle/README.md`),
//! so a missing or truncated copy is reported here with a pointer to how it is
//! regenerated instead of as a bare `include_bytes!` failure.

#[path = "bundle_check.rs"]
mod bundle_check;

use std::env;
use std::path::Path;

const BUNDLE_PATH: &str = "bundle/index.iife.js";

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let bundle_path = Path::new(&manifest_dir).join(BUNDLE_PATH);

    println!("cargo:rerun-if-changed={}", bundle_path.display());
    println!("cargo:rerun-if-changed=bundle_check.rs");

    if let Err(message) = bundle_check::check_bundle(&bundle_path) {
        panic!("{message}");
    }
}
