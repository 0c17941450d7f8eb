use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Extension, Path,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use userstore_core::{Entity, User, UserId};

use crate::app::dto::{self, ApiResponse};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let body = dto::UserBody::decode(&body?)?;

    let user = services.users.insert(body.into());
    tracing::info!(user_id = %user.id(), total = services.users.len(), "user created");

    Ok(dto::json_response(StatusCode::CREATED, &ApiResponse::data(user)))
}

pub async fn list_users(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let users = services.users.find_all();
    dto::json_response(StatusCode::OK, &ApiResponse::data(users))
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id?;
    let id: UserId = id.parse()?;
    let user = services.users.get(&id)?;

    Ok(dto::json_response(StatusCode::OK, &ApiResponse::data(user)))
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id?;
    let id: UserId = id.parse()?;
    services.users.get(&id)?;

    services.users.delete(&id);
    tracing::info!(user_id = %id, "user deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// The body is checked before the id, so a bad body on an unknown id is a 400.
pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let body = dto::UserBody::decode(&body?)?;
    let Path(id) = id?;
    let id: UserId = id.parse()?;
    services.users.get(&id)?;

    // A concurrent delete between the check and the write still surfaces as 404.
    let user = services
        .users
        .update(User::new(id, body.into()))
        .ok_or(ApiError::UserNotFound)?;
    tracing::info!(user_id = %id, "user updated");

    Ok(dto::json_response(StatusCode::OK, &ApiResponse::data(user)))
}
