use actix_web::{web, HttpResponse, Result};
use shared::ApiError;

use crate::models::AppState;
use crate::services::books::{self as book_service, BookError};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/books")
            .route("", web::get().to(list_books))
            .route("/{book_id}", web::get().to(get_book)),
    );
}

/// Responds with the bare JSON array of books, in catalog order.
async fn list_books(state: web::Data<AppState>) -> Result<HttpResponse> {
    match book_service::list_books(&state.db).await {
        Ok(books) => Ok(HttpResponse::Ok().json(books)),
        Err(e) => {
            log::error!("Error listing books: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiError::new(
                "internal_error",
                "Failed to list books",
            )))
        }
    }
}

async fn get_book(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let book_id = path.into_inner();

    match book_service::get_book(&state.db, &book_id).await {
        Ok(book) => Ok(HttpResponse::Ok().json(book)),
        Err(BookError::NotFound) => Ok(HttpResponse::NotFound().json(ApiError::new(
            "not_found",
            format!("Book {} not found", book_id),
        ))),
        Err(e) => {
            log::error!("Error fetching book {}: {:?}", book_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiError::new(
                "internal_error",
                "Failed to fetch book",
            )))
        }
    }
}
