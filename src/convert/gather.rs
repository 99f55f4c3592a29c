use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use glob::glob;
use tracing::warn;

/// Expand glob patterns in the arguments, keeping argument order. An argument
/// naming an existing path is taken literally, even if it contains `[`, `*`
/// or `?`.
pub fn expand_paths(paths: &[String]) -> Vec<PathBuf> {
    let mut expanded = Vec::new();

    for p in paths {
        if Path::new(p).exists() {
            expanded.push(PathBuf::from(p));
            continue;
        }
        // Normalize Windows path separators for glob patterns
        let pattern = p.replace('\\', "/");
        let mut has_match = false;
        if let Ok(pattern_results) = glob(&pattern) {
            for path_res in pattern_results {
                match path_res {
                    Ok(path) => {
                        has_match = true;
                        expanded.push(path);
                    }
                    Err(e) => warn!("Could not read entry for {:?}: {}", p, e),
                }
            }
        }
        // Invalid pattern or no matches: the argument is a literal path
        if !has_match {
            expanded.push(PathBuf::from(p));
        }
    }

    expanded
}

/// Reads the whole file as raw bytes.
pub fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = fs::File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// File name without directories and without the last extension.
pub fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
