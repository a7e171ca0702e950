//! Error taxonomy for construction, parsing, arithmetic and matrix conversion.
//!
//! Every failure is raised synchronously at the point of misuse. Binary
//! operators that meet an operand pair they do not implement do not error
//! directly; the dispatcher in [`crate::tower`] retries with the reflected
//! operand order first and only then reports [`QuaternionError::ArgumentType`].

use thiserror::Error;

/// Result alias used by every fallible operation in the crate.
pub type QuatResult<T> = Result<T, QuaternionError>;

/// Errors that can occur while building or combining quaternion values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuaternionError {
    /// Too many constructor arguments, or extra arguments after a shape that
    /// takes none (copy, text, complex pair).
    #[error("argument count error: {0}")]
    ArgumentCount(String),

    /// An argument of the wrong kind for its position, a component given both
    /// by position and by name, or an unsupported operand pair.
    #[error("argument type error: {0}")]
    ArgumentType(String),

    /// A named component that is not one of `scalar`, `i`, `j`, `k`.
    #[error("unknown component name `{0}`")]
    UnknownComponent(String),

    /// Malformed quaternion text.
    #[error("malformed quaternion text: {0}")]
    Format(String),

    /// Reciprocal of, or division by, a value whose norm is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Matrix of the wrong dimensions for a quaternion representation.
    #[error("shape error: expected {expected}, found {found}")]
    Shape {
        /// Required dimensions, e.g. `2x2`
        expected: String,
        /// Dimensions actually supplied
        found: String,
    },
}

impl QuaternionError {
    /// True for the argument-type family, which includes unknown component names.
    pub fn is_argument_type(&self) -> bool {
        matches!(
            self,
            QuaternionError::ArgumentType(_) | QuaternionError::UnknownComponent(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = QuaternionError::UnknownComponent("x".to_string());
        assert_eq!(err.to_string(), "unknown component name `x`");

        let err = QuaternionError::Shape {
            expected: "2x2".to_string(),
            found: "3x3".to_string(),
        };
        assert!(err.to_string().contains("expected 2x2"));
    }

    #[test]
    fn test_argument_type_family() {
        assert!(QuaternionError::UnknownComponent("w".into()).is_argument_type());
        assert!(QuaternionError::ArgumentType("bad".into()).is_argument_type());
        assert!(!QuaternionError::DivisionByZero.is_argument_type());
    }
}
