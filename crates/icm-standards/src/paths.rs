//! Data directory resolution.

use std::path::PathBuf;

/// Environment variable pointing to a directory with replacement tables.
pub const DATA_DIR_ENV_VAR: &str = "ICM_DATA_DIR";

/// Directory named by `ICM_DATA_DIR`, if set and non-empty.
pub fn data_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(DATA_DIR_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
