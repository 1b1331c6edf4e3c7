//! Repository layer over the document store

pub mod books;
pub mod store;
pub mod users;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
pub use store::Store;

/// Main repository struct bundling the per-entity repositories
#[derive(Clone)]
pub struct Repository {
    pub users: users::UsersRepository,
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with the given store handle
    pub fn new(store: Store) -> Self {
        Self {
            users: users::UsersRepository::new(store.clone()),
            books: books::BooksRepository::new(store),
        }
    }
}

pub(crate) fn to_record<T: Serialize>(value: &T) -> AppResult<store::Record> {
    match serde_json::to_value(value)? {
        Value::Object(record) => Ok(record),
        other => Err(AppError::Internal(format!(
            "entity serialized to non-object JSON: {}",
            other
        ))),
    }
}

pub(crate) fn from_record<T: DeserializeOwned>(record: &store::Record) -> AppResult<T> {
    Ok(serde_json::from_value(Value::Object(record.clone()))?)
}
