//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::book::CreateBook,
    models::envelope::Envelope,
    AppState,
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = Envelope)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Envelope> {
    state.services.books.get_all_books().await
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Envelope),
        (status = 400, description = "Invalid input"),
        (status = 406, description = "ISBN already cataloged", body = Envelope)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<CreateBook>,
) -> AppResult<Envelope> {
    state.services.books.add_book(payload).await
}

/// Fetch a book by ISBN
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = Envelope),
        (status = 404, description = "Book not found", body = Envelope)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Envelope> {
    state.services.books.get_book(&isbn).await
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book deleted", body = Envelope),
        (status = 404, description = "Book not found", body = Envelope)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Envelope> {
    state.services.books.remove_book(&isbn).await
}
