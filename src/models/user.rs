//! User model and related payloads

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

/// A library member.
///
/// The email is the unique, immutable identifier. The wishlist maps a book
/// ISBN to its cached title; entries may outlive the referenced book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub wishlist: IndexMap<String, String>,
}

impl User {
    /// Serialized form with the password field stripped, for API responses.
    pub fn public(&self) -> serde_json::Result<Value> {
        let mut value = serde_json::to_value(self)?;
        if let Some(record) = value.as_object_mut() {
            record.remove("password");
        }
        Ok(value)
    }
}

/// Payload for creating a user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl From<CreateUser> for User {
    fn from(payload: CreateUser) -> Self {
        Self {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            password: payload.password,
            wishlist: IndexMap::new(),
        }
    }
}

/// Payload for updating a user; only supplied fields are written.
///
/// The email (identity) and the wishlist (owned by the wishlist workflow)
/// cannot be changed through this path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Payload for adding a book to a wishlist
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AddWishlistItem {
    #[validate(length(min = 1))]
    pub isbn: String,
}
