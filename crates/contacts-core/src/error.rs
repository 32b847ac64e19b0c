//! Error types for the contacts client
//!
//! Two layers live here:
//! - [`Error`]: what repositories and configuration return
//! - [`ViewError`]: what the list controller and forms show to the user

use crate::model::ContactField;
use thiserror::Error;

/// Result type alias for contacts operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the contacts client
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failure or non-2xx response
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body is not the expected JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Contact not found
    #[error("Contact not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// A failure as presented to the user
///
/// Network failures collapse into two kinds regardless of cause: a failed
/// initial load and a failed create/update/delete. The transport detail is
/// logged, never shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Loading the contact list failed
    #[error("{0}")]
    Fetch(String),

    /// Creating, updating or deleting a contact failed
    #[error("{0}")]
    Mutation(String),

    /// Required fields are empty; nothing was sent
    #[error("Please fill in: {}", join_fields(.0))]
    Incomplete(Vec<ContactField>),
}

impl ViewError {
    pub(crate) fn fetch() -> Self {
        Self::Fetch("Error fetching contact details. Please try again later.".to_string())
    }

    pub(crate) fn create() -> Self {
        Self::Mutation("Error adding contact. Please try again later.".to_string())
    }

    pub(crate) fn update() -> Self {
        Self::Mutation("Error updating contact. Please try again later.".to_string())
    }

    pub(crate) fn delete() -> Self {
        Self::Mutation("Error deleting contact. Please try again later.".to_string())
    }
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
