//! Error types for generation operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Parameter validation failed before any generation work started
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A cell's candidate set became empty during propagation
    ///
    /// Unrecoverable for the attempted seed; the solver performs no
    /// backtracking. Retrying with a new seed is a caller-level policy.
    Contradiction {
        /// Column of the contradicted cell
        x: usize,
        /// Row of the contradicted cell
        y: usize,
    },

    /// The solve loop exceeded its iteration cap
    IterationLimit {
        /// Collapses performed before giving up
        iterations: usize,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Artifact or log serialization failure
    Serialization {
        /// Description of what was being serialized
        target: &'static str,
        /// Underlying serialization error
        source: serde_json::Error,
    },
}

impl GenerationError {
    /// Stable kind label recorded in outcome log entries
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => "configuration",
            Self::Contradiction { .. } => "contradiction",
            Self::IterationLimit { .. } => "iteration_limit",
            Self::FileSystem { .. } => "filesystem",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Contradiction { x, y } => {
                write!(f, "Contradiction at ({x}, {y}): no candidate tiles remain")
            }
            Self::IterationLimit { iterations } => {
                write!(f, "Solve exceeded the iteration cap after {iterations} collapses")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { target, source } => {
                write!(f, "Failed to serialize {target}: {source}")
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for a failed operation on a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GenerationError {
    GenerationError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::GenerationError;

    #[test]
    fn test_kind_labels_are_stable() {
        let contradiction = GenerationError::Contradiction { x: 3, y: 4 };
        let limit = GenerationError::IterationLimit { iterations: 10_000 };

        assert_eq!(contradiction.kind(), "contradiction");
        assert_eq!(limit.kind(), "iteration_limit");
        assert!(format!("{contradiction}").contains("(3, 4)"));
    }
}
