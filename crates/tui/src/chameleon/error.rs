//! Error types for the state container.

use thiserror::Error;

/// Why a content child was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidChildReason {
    /// A content child is already attached.
    AlreadyHasChild,
    /// The offered view has no list semantics.
    NotAList,
}

impl std::fmt::Display for InvalidChildReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyHasChild => write!(f, "a content child is already attached"),
            Self::NotAList => write!(f, "the content child must be a list view"),
        }
    }
}

/// Errors returned by [`crate::Chameleon`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChameleonError {
    /// The container accepts exactly one list-like content child.
    #[error("Chameleon can host only one list view: {0}")]
    InvalidChild(InvalidChildReason),
}

impl ChameleonError {
    /// The reason carried by an invalid-child error.
    pub fn reason(&self) -> InvalidChildReason {
        match self {
            Self::InvalidChild(reason) => *reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_child_messages() {
        let err = ChameleonError::InvalidChild(InvalidChildReason::AlreadyHasChild);
        assert_eq!(
            err.to_string(),
            "Chameleon can host only one list view: a content child is already attached"
        );

        let err = ChameleonError::InvalidChild(InvalidChildReason::NotAList);
        assert!(err.to_string().ends_with("must be a list view"));
        assert_eq!(err.reason(), InvalidChildReason::NotAList);
    }
}
