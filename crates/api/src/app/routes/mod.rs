use axum::{routing::get, Router};

pub mod system;
pub mod users;

/// Router for the `/api` tree.
///
/// The collection answers on both `/users` and `/users/`.
pub fn router() -> Router {
    Router::new()
        .route("/users/", get(users::list_users).post(users::create_user))
        .nest("/users", users::router())
}
