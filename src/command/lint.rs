use std::fs;

use anyhow::{anyhow, Result};
use serde_json::Value;

use uigen::device_mgmt::lint_device_config;

use crate::argsets::LintArgs;

pub fn lint(args: LintArgs) -> Result<()> {
    let path = &args.config_path;
    let config: Value = serde_json::from_str(&fs::read_to_string(path)?)
        .map_err(|e| anyhow!("Could not parse {}: {}", path.display(), e))?;

    let issues = lint_device_config(&config);
    for issue in &issues {
        println!("{issue}");
    }
    if !issues.is_empty() {
        return Err(anyhow!(
            "{} issue(s) found in {}",
            issues.len(),
            path.display()
        ));
    }
    log::info!("No issues found in {}", path.display());
    Ok(())
}
