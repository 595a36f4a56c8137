//! Namespace tree errors.

/// Failure of a tree lookup or creation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// No module logger exists at this full name.
    #[error("module logger not found: {0:?}")]
    NotFound(String),
    /// A module logger already exists at this full name.
    #[error("module logger already exists: {0:?}")]
    AlreadyExists(String),
}
