//! Book catalog service

use serde_json::Value;
use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
    models::envelope::{Envelope, Status},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Fetch a book by ISBN
    pub async fn get_book(&self, isbn: &str) -> AppResult<Envelope> {
        match self.repository.books.get(isbn).await? {
            Some(book) => Ok(Envelope::new(
                Status::Success,
                Some(serde_json::to_value(&book)?),
            )),
            None => Ok(Envelope::status_only(Status::BookNonexistent)),
        }
    }

    /// List all books in store order
    pub async fn get_all_books(&self) -> AppResult<Envelope> {
        let books = self.repository.books.all().await?;
        let data = books
            .iter()
            .map(serde_json::to_value)
            .collect::<serde_json::Result<Vec<Value>>>()?;
        Ok(Envelope::new(Status::Success, Some(Value::Array(data))))
    }

    /// Create a book; the ISBN must be unused
    pub async fn add_book(&self, payload: CreateBook) -> AppResult<Envelope> {
        payload.validate()?;

        let book = Book::from(payload);
        if !self.repository.books.insert_unique(&book).await? {
            tracing::debug!(isbn = %book.isbn, "rejected duplicate book");
            return Ok(Envelope::status_only(Status::BookAlreadyExists));
        }

        tracing::info!(isbn = %book.isbn, title = %book.title, "book created");
        Ok(Envelope::new(
            Status::BookCreated,
            Some(serde_json::to_value(&book)?),
        ))
    }

    /// Delete a book by ISBN
    pub async fn remove_book(&self, isbn: &str) -> AppResult<Envelope> {
        if self.repository.books.remove(isbn).await? == 0 {
            return Ok(Envelope::status_only(Status::BookNonexistent));
        }
        tracing::info!(isbn = %isbn, "book removed");
        Ok(Envelope::status_only(Status::BookRemoved))
    }
}
