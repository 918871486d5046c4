//! Owner, equipment category, size and type lookup tables.
//!
//! The tables ship embedded in the binary. Set `ICM_DATA_DIR` (or pass a
//! directory to [`Registry::load_from_dir`]) to replace any of them with
//! files of the same name.

pub mod embedded;
pub mod error;
pub mod loaders;
pub mod paths;
pub mod registry;

pub use error::{Result, StandardsError};
pub use loaders::TableFile;
pub use paths::{DATA_DIR_ENV_VAR, data_dir_from_env};
pub use registry::Registry;
