use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde_json::Value;

use uigen::constants::defaults;
use uigen::layout_mgmt::validate_value;

use crate::argsets::ValidateAllArgs;

use super::json_files;

/// Validate every generated layout file in a directory
pub fn validate_all(args: ValidateAllArgs) -> Result<()> {
    let layout_files = json_files(&args.layouts_dir, defaults::LAYOUT_FILE_SUFFIX)
        .map_err(|e| anyhow!("No generated layouts found: {e}"))?;
    println!("Found {} layout files to validate", layout_files.len());

    let mut valid = 0;
    let mut invalid = 0;
    for layout_file in &layout_files {
        match validate_one(layout_file) {
            Ok(()) => {
                println!("✓ {} is valid", layout_file.display());
                valid += 1;
            }
            Err(e) => {
                println!("✗ {} is invalid: {}", layout_file.display(), e);
                invalid += 1;
            }
        }
    }

    println!("Validation summary: {valid} valid, {invalid} invalid");
    if invalid > 0 {
        return Err(anyhow!("{invalid} layout(s) failed validation"));
    }
    Ok(())
}

fn validate_one(layout_file: &Path) -> Result<()> {
    let layout: Value = serde_json::from_str(&fs::read_to_string(layout_file)?)?;
    validate_value(&layout)?;
    Ok(())
}
