//! Error types for team operations

use thiserror::Error;

/// Errors returned by strict team operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    /// The member is already part of the team (by identity)
    ///
    /// `position` is where the existing member sits in insertion order.
    #[error("member already exists in the team at position {position}")]
    DuplicateMember { position: usize },
}

/// Result alias for team operations
pub type Result<T> = std::result::Result<T, TeamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_member_message() {
        let err = TeamError::DuplicateMember { position: 2 };
        assert_eq!(err.to_string(), "member already exists in the team at position 2");
    }
}
