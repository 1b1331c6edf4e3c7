//! User management service
//!
//! Every operation resolves to a response envelope; entity-absent and
//! duplicate-key outcomes are statuses, not errors.

use serde_json::Value;
use validator::Validate;

use crate::{
    error::AppResult,
    models::envelope::{Envelope, Status},
    models::user::{CreateUser, UpdateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Fetch a user by email
    pub async fn get_user(&self, email: &str) -> AppResult<Envelope> {
        match self.repository.users.get(email).await? {
            Some(user) => Ok(Envelope::new(Status::Success, Some(user.public()?))),
            None => Ok(Envelope::status_only(Status::UserNonexistent)),
        }
    }

    /// List all users in store order
    pub async fn get_all_users(&self) -> AppResult<Envelope> {
        let users = self.repository.users.all().await?;
        let data = users
            .iter()
            .map(User::public)
            .collect::<serde_json::Result<Vec<Value>>>()?;
        Ok(Envelope::new(Status::Success, Some(Value::Array(data))))
    }

    /// Create a user with an empty wishlist
    pub async fn add_user(&self, payload: CreateUser) -> AppResult<Envelope> {
        payload.validate()?;

        let user = User::from(payload);
        if !self.repository.users.insert_unique(&user).await? {
            tracing::debug!(email = %user.email, "rejected duplicate user");
            return Ok(Envelope::status_only(Status::UserAlreadyExists));
        }

        tracing::info!(email = %user.email, "user created");
        Ok(Envelope::new(Status::UserCreated, Some(user.public()?)))
    }

    /// Merge the supplied fields into an existing user
    pub async fn update_user(&self, email: &str, data: UpdateUser) -> AppResult<Envelope> {
        match self.repository.users.update(email, &data).await? {
            None => Ok(Envelope::status_only(Status::UserNonexistent)),
            // The store matched the email but reported nothing written.
            Some(0) => Ok(Envelope::status_only(Status::Failure)),
            Some(_) => match self.repository.users.get(email).await? {
                Some(user) => Ok(Envelope::new(Status::Success, Some(user.public()?))),
                None => Ok(Envelope::status_only(Status::Failure)),
            },
        }
    }

    /// Delete a user by email
    pub async fn remove_user(&self, email: &str) -> AppResult<Envelope> {
        if self.repository.users.remove(email).await? == 0 {
            return Ok(Envelope::status_only(Status::UserNonexistent));
        }
        tracing::info!(email = %email, "user removed");
        Ok(Envelope::status_only(Status::UserRemoved))
    }
}
