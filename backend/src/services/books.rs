use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::BookRow;
use shared::Book;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("Book not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Lists the whole catalog in shelf order.
pub async fn list_books(pool: &SqlitePool) -> Result<Vec<Book>, BookError> {
    let rows: Vec<BookRow> = sqlx::query_as(
        "SELECT id, title, author, isbn, year FROM books ORDER BY position ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(BookRow::to_shared).collect())
}

pub async fn get_book(pool: &SqlitePool, book_id: &str) -> Result<Book, BookError> {
    let row: Option<BookRow> =
        sqlx::query_as("SELECT id, title, author, isbn, year FROM books WHERE id = ?")
            .bind(book_id)
            .fetch_optional(pool)
            .await?;

    row.map(|r| r.to_shared()).ok_or(BookError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::setup_test_db;

    async fn insert_book(pool: &SqlitePool, id: &str, title: &str, position: i64) {
        sqlx::query(
            "INSERT INTO books (id, title, author, isbn, year, position) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(title)
        .bind("Author")
        .bind("ISBN")
        .bind(2020)
        .bind(position)
        .execute(pool)
        .await
        .unwrap();
    }

    #[test]
    fn test_book_error_display() {
        assert_eq!(BookError::NotFound.to_string(), "Book not found");
    }

    #[tokio::test]
    async fn test_list_books_returns_seeded_catalog() {
        let pool = setup_test_db().await;

        let books = list_books(&pool).await.unwrap();

        assert_eq!(books.len(), 5);
        assert_eq!(books[0].id, "1");
        assert_eq!(books[0].title, "The Rust Programming Language");
        assert_eq!(books[4].title, "Rust Atomics and Locks");
    }

    #[tokio::test]
    async fn test_list_books_orders_by_position() {
        let pool = setup_test_db().await;
        sqlx::query("DELETE FROM books").execute(&pool).await.unwrap();

        insert_book(&pool, "b", "Second", 2).await;
        insert_book(&pool, "c", "Third", 3).await;
        insert_book(&pool, "a", "First", 1).await;

        let titles: Vec<String> = list_books(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();

        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_list_books_empty_catalog() {
        let pool = setup_test_db().await;
        sqlx::query("DELETE FROM books").execute(&pool).await.unwrap();

        assert!(list_books(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected_by_storage() {
        let pool = setup_test_db().await;

        let result = sqlx::query(
            "INSERT INTO books (id, title, author, isbn, year, position) VALUES ('1', 'Copy', 'A', 'I', 2000, 9)",
        )
        .execute(&pool)
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_book() {
        let pool = setup_test_db().await;

        let book = get_book(&pool, "3").await.unwrap();
        assert_eq!(book.title, "Rust for Rustaceans");
        assert_eq!(book.year, 2021);

        assert!(matches!(
            get_book(&pool, "missing").await,
            Err(BookError::NotFound)
        ));
    }
}
