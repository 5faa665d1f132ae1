//! Validation of the bundle artifact, shared by `build.rs` and its tests.

use std::fs;
use std::path::Path;

/// Fails when the bundle at `path` is missing, not a regular file, or empty.
pub fn check_bundle(path: &Path) -> Result<u64, String> {
    let metadata = fs::metadata(path).map_err(|err| {
        format!(
            "Failed to read the k6 testing bundle at {}: {err}. \
             Rebuild it as described in bundle/README.md",
            path.display()
        )
    })?;

    if !metadata.is_file() || metadata.len() == 0 {
        return Err(format!(
            "The k6 testing bundle at {} is empty or not a file. \
             Rebuild it as described in bundle/README.md",
            path.display()
        ));
    }

    Ok(metadata.len())
}
