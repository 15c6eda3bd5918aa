mod argsets;
mod command;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use env_logger::Env;

use uigen::constants::{defaults, envvars};
use uigen::helpers::{base_path, load_dotenv};

const CMD_COMPILE: &str = "compile";
const CMD_GENERATE_ALL: &str = "generate-all";
const CMD_VALIDATE_ALL: &str = "validate-all";
const CMD_LINT: &str = "lint";

fn main() -> Result<()> {
    load_dotenv();
    env_logger::Builder::from_env(
        Env::default().filter_or(envvars::LOGGING_LEVEL, defaults::LOG_LEVEL),
    )
    .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_COMPILE) => command::compile(argsets::CompileArgs {
            config_path: args.free_from_str()?,
        }),
        Some(CMD_GENERATE_ALL) => {
            let mocks_dir: Option<PathBuf> = args.opt_free_from_str()?;
            let output_dir: Option<PathBuf> = args.opt_free_from_str()?;
            command::generate_all(argsets::GenerateAllArgs {
                mocks_dir: mocks_dir.unwrap_or_else(|| base_path::MOCKS_DIR.clone()),
                output_dir: output_dir.unwrap_or_else(|| base_path::OUTPUT_DIR.clone()),
            })
        }
        Some(CMD_VALIDATE_ALL) => {
            let layouts_dir: Option<PathBuf> = args.opt_free_from_str()?;
            command::validate_all(argsets::ValidateAllArgs {
                layouts_dir: layouts_dir.unwrap_or_else(|| base_path::OUTPUT_DIR.clone()),
            })
        }
        Some(CMD_LINT) => command::lint(argsets::LintArgs {
            config_path: args.free_from_str()?,
        }),
        _ => Err(anyhow!(
            "Subcommand must be one of '{CMD_COMPILE}', '{CMD_GENERATE_ALL}', '{CMD_VALIDATE_ALL}', '{CMD_LINT}'"
        )),
    }
}
