//! Wishlist workflow
//!
//! Cross-entity operation: resolve the user, resolve the book (for adds),
//! then rewrite the user's wishlist. Failure at any step propagates the
//! matching status without touching other state. The mutation itself runs
//! in one store session, so concurrent mutations for the same user cannot
//! lose each other's writes; a book deleted between its lookup and the
//! persist can still leave a dangling wishlist entry, which the data model
//! permits.

use crate::{
    error::AppResult,
    models::envelope::{Envelope, Status},
    repository::Repository,
};

#[derive(Clone)]
pub struct WishlistService {
    repository: Repository,
}

impl WishlistService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Fetch a user's wishlist mapping (ISBN -> cached title)
    pub async fn get_wishlist(&self, email: &str) -> AppResult<Envelope> {
        match self.repository.users.get(email).await? {
            Some(user) => Ok(Envelope::new(
                Status::Success,
                Some(serde_json::to_value(&user.wishlist)?),
            )),
            None => Ok(Envelope::status_only(Status::UserNonexistent)),
        }
    }

    /// Add a book to a user's wishlist, caching its title.
    ///
    /// Re-adding an ISBN already on the wishlist is an idempotent value
    /// overwrite.
    pub async fn add_to_wishlist(&self, email: &str, isbn: &str) -> AppResult<Envelope> {
        if !self.repository.users.exists(email).await? {
            return Ok(Envelope::status_only(Status::UserNonexistent));
        }

        let book = match self.repository.books.get(isbn).await? {
            Some(book) => book,
            None => return Ok(Envelope::status_only(Status::BookNonexistent)),
        };

        let updated = self
            .repository
            .users
            .mutate_wishlist(email, |wishlist| {
                wishlist.insert(isbn.to_string(), book.title.clone());
            })
            .await?;

        match updated {
            // User vanished between the existence check and the mutation.
            None => Ok(Envelope::status_only(Status::UserNonexistent)),
            Some(wishlist) => {
                tracing::info!(email = %email, isbn = %isbn, "wishlist entry added");
                Ok(Envelope::new(
                    Status::WishlistUpdated,
                    Some(serde_json::to_value(&wishlist)?),
                ))
            }
        }
    }

    /// Remove an ISBN from a user's wishlist; silently idempotent when the
    /// entry is absent.
    pub async fn remove_from_wishlist(&self, email: &str, isbn: &str) -> AppResult<Envelope> {
        let updated = self
            .repository
            .users
            .mutate_wishlist(email, |wishlist| {
                wishlist.shift_remove(isbn);
            })
            .await?;

        match updated {
            None => Ok(Envelope::status_only(Status::UserNonexistent)),
            Some(wishlist) => {
                tracing::info!(email = %email, isbn = %isbn, "wishlist entry removed");
                Ok(Envelope::new(
                    Status::WishlistUpdated,
                    Some(serde_json::to_value(&wishlist)?),
                ))
            }
        }
    }
}
