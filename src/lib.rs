//! Libris Library Catalog Server
//!
//! A small library-catalog backend storing users and books in an embedded
//! JSON document store, exposing a REST JSON API for user and book CRUD and
//! per-user wishlist management.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
