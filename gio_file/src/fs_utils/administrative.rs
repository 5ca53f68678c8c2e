use crate::fs_utils;
use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// The dir that holds files created by default.
pub const ENV_VAR_PARENT_DIR: &str = "GIO_PARENT_DIR";

pub const DEFAULT_PARENT_DIR_NAME: &str = "gio";

pub fn default_parent_dir() -> PathBuf {
    env::var(ENV_VAR_PARENT_DIR).map_or_else(
        |_| env::temp_dir().join(DEFAULT_PARENT_DIR_NAME),
        PathBuf::from,
    )
}

/// `$GIO_PARENT_DIR/<file_name>`, or `<temp_dir>/gio/<file_name>`.
/// The parent dir is created if missing.
pub fn default_file_path(file_name: &str) -> Result<PathBuf> {
    let parent_dir_path = default_parent_dir();
    fs_utils::create_dir_all(&parent_dir_path)?;
    Ok(parent_dir_path.join(file_name))
}
