use thiserror::Error;

/// Infeasible generator configurations. All of them abort before any code
/// is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("count must be at least 1")]
    InvalidCount,
    #[error("owner code pool is empty")]
    EmptyOwnerPool,
    #[error(
        "count {count} exceeds the {capacity} unique codes available for this configuration"
    )]
    CapacityExceeded { count: usize, capacity: usize },
}
