use std::path::PathBuf;

pub struct CompileArgs {
    pub config_path: PathBuf,
}

pub struct GenerateAllArgs {
    pub mocks_dir: PathBuf,
    pub output_dir: PathBuf,
}

pub struct ValidateAllArgs {
    pub layouts_dir: PathBuf,
}

pub struct LintArgs {
    pub config_path: PathBuf,
}
