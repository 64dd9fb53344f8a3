//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the store port to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod auth_service;
mod credential_service;
mod user_service;

pub use auth_service::{AuthOutcome, AuthService, Authenticator};
pub use credential_service::CredentialManager;
pub use user_service::{UserRegistry, UserService};
