//! Check digit engine, transposition detection and unique code generation
//! for intermodal container markings.

pub mod checksum;
pub mod error;
pub mod generator;
pub mod transposition;

pub use checksum::{char_value, checksum, complete, verify};
pub use error::GeneratorError;
pub use generator::{CodeGenerator, Exclusions, GeneratorConfig, SerialRange, generate};
pub use transposition::{detect_transpositions, has_transposition_risk};
