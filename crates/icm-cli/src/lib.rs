//! Library side of the `icm` binary.

pub mod logging;
pub mod output;
