use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use shared::{ensure_unique_ids, ApiError, Book};
use thiserror::Error;

const API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookSourceError {
    #[error("Could not reach the book service: {0}")]
    Network(String),
    #[error("The book service responded with status {0}: {1}")]
    Status(u16, String),
    #[error("The book service sent an unreadable book list: {0}")]
    Decode(String),
}

/// Where the book list comes from.
///
/// `BookList` takes one of these as a prop, so tests hand it a stub
/// instead of going over the network. The returned future is polled on the
/// browser's local executor and never has to be `Send`.
pub trait BookSource {
    fn fetch_books(&self) -> LocalBoxFuture<'static, Result<Vec<Book>, BookSourceError>>;
}

/// Reads the catalog from `GET {api_base}/books`.
#[derive(Debug, Clone)]
pub struct HttpBookSource {
    api_base: String,
}

impl HttpBookSource {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    pub fn books_url(&self) -> String {
        format!("{}/books", self.api_base.trim_end_matches('/'))
    }
}

impl Default for HttpBookSource {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl BookSource for HttpBookSource {
    fn fetch_books(&self) -> LocalBoxFuture<'static, Result<Vec<Book>, BookSourceError>> {
        let url = self.books_url();

        async move {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| BookSourceError::Network(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| BookSourceError::Network(e.to_string()))?;

            if response.ok() {
                decode_books(&body)
            } else {
                Err(status_error(status, &response.status_text(), &body))
            }
        }
        .boxed_local()
    }
}

/// Decodes a bare JSON array of books, keeping the order it arrived in.
pub fn decode_books(body: &str) -> Result<Vec<Book>, BookSourceError> {
    let books: Vec<Book> =
        serde_json::from_str(body).map_err(|e| BookSourceError::Decode(e.to_string()))?;
    ensure_unique_ids(&books).map_err(|e| BookSourceError::Decode(e.to_string()))?;
    Ok(books)
}

/// Prefers the server's `ApiError` message, falling back to the status text.
fn status_error(status: u16, status_text: &str, body: &str) -> BookSourceError {
    let message = serde_json::from_str::<ApiError>(body)
        .map(|error| error.message)
        .unwrap_or_else(|_| status_text.to_string());
    BookSourceError::Status(status, message)
}
