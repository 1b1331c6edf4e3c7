//! Book model and related payloads

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A catalog entry, uniquely identified by ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_date: String,
}

/// Payload for creating a book
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub author: String,
    #[validate(length(min = 1))]
    pub isbn: String,
    pub publication_date: String,
}

impl From<CreateBook> for Book {
    fn from(payload: CreateBook) -> Self {
        Self {
            title: payload.title,
            author: payload.author,
            isbn: payload.isbn,
            publication_date: payload.publication_date,
        }
    }
}
