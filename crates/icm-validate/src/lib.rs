//! Pattern matching and field validation of free-form container markings.
//!
//! Text is matched against candidate [`Pattern`]s, each an ordered list of
//! [`Field`]s. The [`validate`] entry point returns the first pattern that
//! matches and validates, or the first candidate with its diagnostics.

pub mod field;
pub mod fields;
pub mod matcher;
pub mod pattern;
pub mod validator;

pub use field::{Field, FieldCheck, Resolved, Siblings, Span};
pub use matcher::select;
pub use pattern::{Pattern, PatternKind, canonical_patterns};
pub use validator::{FieldReport, ValidationResult, evaluate, validate};
