//! Error types for the Empty Nest catalog

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A required field was empty or absent
    #[error("Entry '{id}' is missing required field: {field}")]
    MissingField { id: String, field: &'static str },

    /// An entry with the same id is already in the catalog
    #[error("Duplicate entry id: {0}")]
    DuplicateId(String),

    /// No entry with the given id exists
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// The date column could not be parsed
    #[error("Entry '{id}' has malformed date: {value}")]
    MalformedDate { id: String, value: String },

    /// A filter category that normalizes to nothing
    #[error("Invalid category: {0:?}")]
    InvalidCategory(String),

    /// Clipboard write failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::EntryNotFound("perk-nomad".to_string());
        assert_eq!(format!("{}", err), "Entry not found: perk-nomad");
    }

    #[test]
    fn test_missing_field_display() {
        let err = CatalogError::MissingField {
            id: "perk-x".to_string(),
            field: "link_url",
        };
        assert_eq!(
            err.to_string(),
            "Entry 'perk-x' is missing required field: link_url"
        );
    }
}
