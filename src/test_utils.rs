// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    const LICENSE_HEADER: &str = "// SPDX-License-Identifier: MPL-2.0";

    fn collect_sources(dir: &Path, out: &mut Vec<std::path::PathBuf>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_sources(&path, out);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                out.push(path);
            }
        }
    }

    #[test]
    fn every_source_file_carries_the_license_header() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let mut sources = Vec::new();
        for dir in ["src", "tests", "benches"] {
            collect_sources(&root.join(dir), &mut sources);
        }
        assert!(!sources.is_empty());

        let missing: Vec<_> = sources
            .iter()
            .filter(|path| {
                fs::read_to_string(path)
                    .map(|content| !content.starts_with(LICENSE_HEADER))
                    .unwrap_or(true)
            })
            .collect();
        assert!(missing.is_empty(), "missing license header: {missing:?}");
    }
}
