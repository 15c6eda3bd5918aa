use std::fs;

use anyhow::{anyhow, Result};

use crate::argsets::CompileArgs;

pub fn compile(args: CompileArgs) -> Result<()> {
    let path = &args.config_path;
    let config_raw = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

    let layout = uigen::compile_str(&config_raw)
        .ok_or_else(|| anyhow!("No layout could be generated for '{}'", path.display()))?;

    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}
