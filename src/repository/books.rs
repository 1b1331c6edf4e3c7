//! Books repository over the BOOKS partition

use crate::{
    error::AppResult,
    models::book::Book,
    repository::{from_record, to_record},
    repository::store::{Store, BOOKS_TABLE},
};

const KEY: &str = "isbn";

#[derive(Clone)]
pub struct BooksRepository {
    store: Store,
}

impl BooksRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Get book by ISBN
    pub async fn get(&self, isbn: &str) -> AppResult<Option<Book>> {
        self.store
            .read(|db| {
                db.table(BOOKS_TABLE)
                    .get(KEY, isbn)
                    .map(from_record)
                    .transpose()
            })
            .await
    }

    /// All books, in store order
    pub async fn all(&self) -> AppResult<Vec<Book>> {
        self.store
            .read(|db| db.table(BOOKS_TABLE).all().iter().map(from_record).collect())
            .await
    }

    /// Insert the book unless the ISBN is already taken, in one session.
    pub async fn insert_unique(&self, book: &Book) -> AppResult<bool> {
        let record = to_record(book)?;
        self.store
            .write(|db| {
                let mut table = db.table_mut(BOOKS_TABLE);
                if table.contains(KEY, &book.isbn) {
                    return Ok(false);
                }
                table.insert(record);
                Ok(true)
            })
            .await
    }

    /// Delete book by ISBN; returns the number of records removed.
    pub async fn remove(&self, isbn: &str) -> AppResult<usize> {
        self.store
            .write(|db| Ok(db.table_mut(BOOKS_TABLE).remove(KEY, isbn)))
            .await
    }
}
