mod compile;
mod generate_all;
mod lint;
mod validate_all;

pub use compile::compile;
pub use generate_all::generate_all;
pub use lint::lint;
pub use validate_all::validate_all;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

/// JSON files in `dir` whose names end with `suffix`, sorted by name
fn json_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(anyhow!("Directory not found: {}", dir.display()));
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(suffix));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
