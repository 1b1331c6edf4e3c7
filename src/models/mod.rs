//! Data models and request/response payloads

pub mod book;
pub mod envelope;
pub mod user;

pub use book::{Book, CreateBook};
pub use envelope::{Envelope, Status};
pub use user::{AddWishlistItem, CreateUser, UpdateUser, User};
