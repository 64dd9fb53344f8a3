//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::AuthRequest;
use crate::errors::{AppError, AppResult};
use crate::services::AuthOutcome;

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/user/auth", post(authenticate))
}

/// Authenticate a user by id and password
#[utoipa::path(
    post,
    path = "/user/auth",
    tag = "Authentication",
    request_body = AuthRequest,
    responses(
        (status = 200, description = "Authenticated", body = bool),
        (status = 400, description = "Bad password"),
        (status = 404, description = "User account not found"),
        (status = 503, description = "User store unavailable")
    )
)]
pub async fn authenticate(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthRequest>,
) -> AppResult<Json<bool>> {
    let id = payload.id.clone();

    match state.auth_service.authenticate(payload).await? {
        AuthOutcome::Authenticated => Ok(Json(true)),
        AuthOutcome::BadCredential => Err(AppError::BadCredential),
        AuthOutcome::UnknownIdentity => {
            tracing::warn!(id = %id, "auth attempt for unknown user");
            Err(AppError::NotFound)
        }
    }
}
