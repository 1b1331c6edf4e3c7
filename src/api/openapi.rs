//! OpenAPI documentation

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, users, wishlist};
use crate::models::{
    book::{Book, CreateBook},
    envelope::{Envelope, Status},
    user::{AddWishlistItem, CreateUser, UpdateUser, User},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "0.1.0",
        description = "Library Catalog REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::heartbeat,
        // Users
        users::list_users,
        users::create_user,
        users::get_user,
        users::update_user,
        users::delete_user,
        // Wishlists
        wishlist::get_wishlist,
        wishlist::add_to_wishlist,
        wishlist::remove_from_wishlist,
        // Books
        books::list_books,
        books::create_book,
        books::get_book,
        books::delete_book,
    ),
    components(schemas(
        Envelope,
        Status,
        User,
        CreateUser,
        UpdateUser,
        AddWishlistItem,
        Book,
        CreateBook,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "users", description = "User management"),
        (name = "wishlist", description = "Per-user wishlists"),
        (name = "books", description = "Book catalog")
    )
)]
pub struct ApiDoc;

/// Swagger UI router serving the generated document
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
