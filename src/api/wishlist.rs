//! Wishlist endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::envelope::Envelope,
    models::user::AddWishlistItem,
    AppState,
};

/// Fetch a user's wishlist
#[utoipa::path(
    get,
    path = "/users/{email}/wishlist",
    tag = "wishlist",
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "Wishlist mapping of ISBN to title", body = Envelope),
        (status = 404, description = "User not found", body = Envelope)
    )
)]
pub async fn get_wishlist(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Envelope> {
    state.services.wishlist.get_wishlist(&email).await
}

/// Add a book to a user's wishlist
#[utoipa::path(
    post,
    path = "/users/{email}/wishlist",
    tag = "wishlist",
    params(
        ("email" = String, Path, description = "User email")
    ),
    request_body = AddWishlistItem,
    responses(
        (status = 200, description = "Wishlist updated", body = Envelope),
        (status = 404, description = "User or book not found", body = Envelope)
    )
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<AddWishlistItem>,
) -> AppResult<Envelope> {
    state
        .services
        .wishlist
        .add_to_wishlist(&email, &payload.isbn)
        .await
}

/// Remove a book from a user's wishlist
#[utoipa::path(
    delete,
    path = "/users/{email}/wishlist/{isbn}",
    tag = "wishlist",
    params(
        ("email" = String, Path, description = "User email"),
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Wishlist updated", body = Envelope),
        (status = 404, description = "User not found", body = Envelope)
    )
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    Path((email, isbn)): Path<(String, String)>,
) -> AppResult<Envelope> {
    state
        .services
        .wishlist
        .remove_from_wishlist(&email, &isbn)
        .await
}
