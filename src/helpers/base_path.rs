use std::{env, path::PathBuf};

use once_cell::sync::Lazy;

use crate::constants::{defaults, envvars};

pub static ROOT_DIR: Lazy<PathBuf> = Lazy::new(|| {
    if let Ok(root_dir) = env::var(envvars::ROOT_DIR) {
        return root_dir.into();
    }
    PathBuf::from(".")
});

pub static MOCKS_DIR: Lazy<PathBuf> = Lazy::new(|| {
    if let Ok(mocks_dir) = env::var(envvars::MOCKS_DIR) {
        return mocks_dir.into();
    }
    ROOT_DIR.join(defaults::MOCKS_DIR_NAME)
});

pub static OUTPUT_DIR: Lazy<PathBuf> = Lazy::new(|| {
    if let Ok(output_dir) = env::var(envvars::OUTPUT_DIR) {
        return output_dir.into();
    }
    ROOT_DIR.join(defaults::OUTPUT_DIR_NAME)
});
