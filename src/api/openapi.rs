//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, user_handler};
use crate::domain::{AccessCheck, AuthRequest, UpsertUser, UserResponse};

/// OpenAPI documentation for identity-api
#[derive(OpenApi)]
#[openapi(
    info(
        title = "identity-api",
        version = "0.1.0",
        description = "User identity service: credentials, roles, and access scopes",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        user_handler::upsert_user,
        user_handler::get_user,
        auth_handler::authenticate,
    ),
    components(
        schemas(
            UpsertUser,
            UserResponse,
            AuthRequest,
            AccessCheck,
        )
    ),
    tags(
        (name = "Users", description = "User record management"),
        (name = "Authentication", description = "Credential verification")
    )
)]
pub struct ApiDoc;
