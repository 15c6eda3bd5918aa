use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use uigen::constants::defaults;
use uigen::layout_mgmt::validate;

use crate::argsets::GenerateAllArgs;

use super::json_files;

/// Compile every device config in the mocks directory and write the layouts
pub fn generate_all(args: GenerateAllArgs) -> Result<()> {
    let config_files = json_files(&args.mocks_dir, ".json")?;
    println!("Found {} mock configurations", config_files.len());

    fs::create_dir_all(&args.output_dir).map_err(|e| {
        anyhow!(
            "Failed to create output directory {}: {}",
            args.output_dir.display(),
            e
        )
    })?;

    let mut succeeded = 0;
    let mut failed = 0;
    for config_file in &config_files {
        match generate_one(config_file, &args.output_dir) {
            Ok(Some(output_path)) => {
                println!("✓ Generated layout: {}", output_path.display());
                succeeded += 1;
            }
            Ok(None) => {
                println!("⚠ No layout generated for {}", config_file.display());
                failed += 1;
            }
            Err(e) => {
                log::error!("Failed to process {}: {}", config_file.display(), e);
                println!("✗ Failed to process {}: {}", config_file.display(), e);
                failed += 1;
            }
        }
    }

    println!("Summary: {succeeded} succeeded, {failed} failed");
    if failed > 0 {
        return Err(anyhow!("{failed} configuration(s) could not be processed"));
    }
    Ok(())
}

fn generate_one(config_file: &Path, output_dir: &Path) -> Result<Option<PathBuf>> {
    let config_raw = fs::read_to_string(config_file)?;
    let Some(layout) = uigen::compile_str(&config_raw) else {
        return Ok(None);
    };
    validate(&layout)?;

    let stem = config_file
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("Invalid file name {}", config_file.display()))?;
    let output_path = output_dir.join(format!("{stem}{}", defaults::LAYOUT_FILE_SUFFIX));
    fs::write(&output_path, serde_json::to_string_pretty(&layout)?)?;
    Ok(Some(output_path))
}
