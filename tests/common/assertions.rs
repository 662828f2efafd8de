//! Directory listing helpers for CLI tests.

use std::path::Path;

/// Sorted names of the entries directly inside `dir`
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", dir.display(), e))
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Assert that `stdout`/`stderr` of a result contains `needle`.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "Expected output to contain {:?}\nGot:\n{}",
            $needle,
            combined
        );
    };
}
