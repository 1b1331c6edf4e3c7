//! API handlers for Libris REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod users;
pub mod wishlist;

use axum::{
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::{models::envelope::Envelope, AppState};

/// Render an envelope with the transport code mapped from its status.
impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status = self.status.http_status();
        (status, Json(self)).into_response()
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // API v1 routes
    let api_v1 = Router::new()
        // Liveness
        .route("/heartbeat", get(health::heartbeat))
        // Users
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:email", get(users::get_user))
        .route("/users/:email", put(users::update_user))
        .route("/users/:email", delete(users::delete_user))
        // Wishlists
        .route("/users/:email/wishlist", get(wishlist::get_wishlist))
        .route("/users/:email/wishlist", post(wishlist::add_to_wishlist))
        .route(
            "/users/:email/wishlist/:isbn",
            delete(wishlist::remove_from_wishlist),
        )
        // Books
        .route("/books", get(books::list_books))
        .route("/books", post(books::create_book))
        .route("/books/:isbn", get(books::get_book))
        .route("/books/:isbn", delete(books::delete_book))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::swagger_ui())
}
