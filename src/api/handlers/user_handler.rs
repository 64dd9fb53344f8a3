//! User record handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{UpsertUser, UserResponse};
use crate::errors::AppResult;

/// Create user record routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(upsert_user))
        .route("/user/:id", get(get_user))
}

/// Insert or update a user record
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = UpsertUser,
    responses(
        (status = 200, description = "Record upserted", body = UserResponse),
        (status = 400, description = "Validation error or weak secret"),
        (status = 503, description = "User store unavailable")
    )
)]
pub async fn upsert_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpsertUser>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.upsert_user(payload).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Get a user record by id
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User record with credential redacted", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 503, description = "User store unavailable")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(UserResponse::from(user)))
}
