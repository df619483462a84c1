use shared::Book;

use crate::api::BookSourceError;

/// Lifecycle of one `BookList` activation.
///
/// Starts in `Loading` and settles exactly once. A settled state ignores any
/// later result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookListState {
    #[default]
    Loading,
    Loaded(Vec<Book>),
    Failed(String),
}

impl BookListState {
    pub fn resolve(self, result: Result<Vec<Book>, BookSourceError>) -> Self {
        match self {
            BookListState::Loading => match result {
                Ok(books) => BookListState::Loaded(books),
                Err(e) => BookListState::Failed(e.to_string()),
            },
            settled => settled,
        }
    }

    /// In-place form of [`resolve`](Self::resolve), for signal updates.
    pub fn settle(&mut self, result: Result<Vec<Book>, BookSourceError>) {
        *self = std::mem::take(self).resolve(result);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, BookListState::Loading)
    }

    /// Books in received order; empty until loaded.
    pub fn books(&self) -> &[Book] {
        match self {
            BookListState::Loaded(books) => books,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            BookListState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
