use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

// ============================================================================
// Book Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate book id: {0}")]
    DuplicateId(String),
}

/// Checks that every book in a fetched collection carries a distinct id.
pub fn ensure_unique_ids(books: &[Book]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(books.len());
    for book in books {
        if !seen.insert(book.id.as_str()) {
            return Err(CatalogError::DuplicateId(book.id.clone()));
        }
    }
    Ok(())
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: "Author".to_string(),
            isbn: "ISBN".to_string(),
            year: 2021,
        }
    }

    #[test]
    fn test_book_deserializes_from_wire_format() {
        let json = r#"[
            {"id":"1","title":"Test Book 1","author":"Author 1","isbn":"ISBN-1","year":2021},
            {"id":"2","title":"Test Book 2","author":"Author 2","isbn":"ISBN-2","year":2022}
        ]"#;

        let books: Vec<Book> = serde_json::from_str(json).unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Test Book 1");
        assert_eq!(books[1].author, "Author 2");
        assert_eq!(books[1].isbn, "ISBN-2");
        assert_eq!(books[1].year, 2022);
    }

    #[test]
    fn test_book_serializes_field_names() {
        let value = serde_json::to_value(book("42", "Dune")).unwrap();

        assert_eq!(value["id"], "42");
        assert_eq!(value["title"], "Dune");
        assert_eq!(value["author"], "Author");
        assert_eq!(value["isbn"], "ISBN");
        assert_eq!(value["year"], 2021);
    }

    #[test]
    fn test_book_rejects_string_year() {
        let json = r#"{"id":"1","title":"T","author":"A","isbn":"I","year":"2021"}"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }

    #[test]
    fn test_ensure_unique_ids() {
        assert!(ensure_unique_ids(&[]).is_ok());
        assert!(ensure_unique_ids(&[book("1", "A"), book("2", "B")]).is_ok());
        assert_eq!(
            ensure_unique_ids(&[book("1", "A"), book("2", "B"), book("1", "C")]),
            Err(CatalogError::DuplicateId("1".to_string()))
        );
    }

    #[test]
    fn test_api_error_new() {
        let error = ApiError::new("not_found", "Book not found");
        assert_eq!(error.error, "not_found");
        assert_eq!(error.message, "Book not found");
    }
}
